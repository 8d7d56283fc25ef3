//! Local web server command

use chrono::Local;
use tiny_http::Server;

use crate::server::tiny_http::handle_request;

use super::export::open_in_browser;

/// Serve the printable page until interrupted
pub fn serve(port: u16, open: bool) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let server = Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to start server: {e}"))?;

    println!("Serving chatshield at http://localhost:{port}");
    println!();
    println!("Press Ctrl+C to stop");

    if open {
        open_in_browser(&format!("http://localhost:{port}"));
    }

    for request in server.incoming_requests() {
        let response = handle_request(&request, Local::now());
        log::debug!("{} {} -> {}", request.method(), request.url(), response.status_code().0);
        if let Err(e) = request.respond(response) {
            log::warn!("failed to send response: {e}");
        }
    }

    Ok(())
}
