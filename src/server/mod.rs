//! Local delivery of the printable page
//!
//! The server only hands out the rendered HTML; every widget runs in the
//! terminal or in the reader's own copy of the page.

pub mod tiny_http;
