//! tiny_http adapter serving the printable page

use std::io::Cursor;

use chrono::{DateTime, Local};
use tiny_http::{Header, Method, Request, Response, StatusCode};

use chatshield::render::html;

/// What a request resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Page,
    NotFound,
    MethodNotAllowed,
}

fn route(method: &Method, url: &str) -> Route {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    match (method, path) {
        (Method::Get | Method::Head, "/" | "/index.html") => Route::Page,
        (_, "/" | "/index.html") => Route::MethodNotAllowed,
        _ => Route::NotFound,
    }
}

/// Answer a request with the page rendered at `now`
pub fn handle_request(request: &Request, now: DateTime<Local>) -> Response<Cursor<Vec<u8>>> {
    respond(request.method(), request.url(), now)
}

fn respond(method: &Method, url: &str, now: DateTime<Local>) -> Response<Cursor<Vec<u8>>> {
    match route(method, url) {
        Route::Page => text_response(html::document(now), "text/html; charset=utf-8", 200),
        Route::MethodNotAllowed => {
            text_response(format!("Method not allowed: {method}"), "text/plain; charset=utf-8", 405)
        },
        Route::NotFound => {
            text_response(format!("Not found: {url}"), "text/plain; charset=utf-8", 404)
        },
    }
}

fn text_response(body: String, content_type: &str, status: u16) -> Response<Cursor<Vec<u8>>> {
    let mut response = Response::from_data(body.into_bytes()).with_status_code(StatusCode(status));
    if let Ok(header) = Header::from_bytes("Content-Type", content_type) {
        response.add_header(header);
    }
    response
}
