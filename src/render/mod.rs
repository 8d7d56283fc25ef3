//! Section renderers
//!
//! - [`text`] - plain text for the terminal
//! - [`html`] - the printable page

pub mod html;
pub mod text;
