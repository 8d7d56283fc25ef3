//! Printable page output

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use anyhow::Context as _;
use chrono::Local;

use chatshield::output::{OperationResult, Render};
use chatshield::paths;
use chatshield::render::html;

use super::AppContext;

/// Write the printable page to `output` (default: current directory)
pub fn export(ctx: &AppContext, output: Option<PathBuf>) -> anyhow::Result<()> {
    let path = output.unwrap_or_else(paths::export_file);
    write_page(&path)?;
    OperationResult {
        success: true,
        message: format!("Página imprimible guardada en {}", path.display()),
    }
    .render(ctx.mode());
    Ok(())
}

/// Write the printable page to a temporary file and open it for printing
pub fn print(ctx: &AppContext) -> anyhow::Result<()> {
    let message = print_page()?;
    OperationResult {
        success: true,
        message,
    }
    .render(ctx.mode());
    Ok(())
}

/// Write the page next to other temporary files, open it, and describe what happened
pub(super) fn print_page() -> anyhow::Result<String> {
    let path = std::env::temp_dir().join(paths::EXPORT_FILE);
    write_page(&path)?;
    open_in_browser(&path.display().to_string());
    Ok(format!(
        "Página abierta desde {}; usa Ctrl+P (Cmd+P en macOS) para imprimir o guardar como PDF",
        path.display()
    ))
}

fn write_page(path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    fs::write(path, html::document(Local::now()))
        .with_context(|| format!("Failed to write page: {}", path.display()))?;
    log::info!("wrote printable page to {}", path.display());
    Ok(())
}

/// Hand `target` to the desktop's default opener; failures are only logged
pub(super) fn open_in_browser(target: &str) {
    if let Err(e) = spawn_opener(target) {
        log::warn!("could not open {target}: {e}");
    }
}

#[cfg(target_os = "macos")]
fn spawn_opener(target: &str) -> io::Result<Child> {
    Command::new("open").arg(target).spawn()
}

#[cfg(target_os = "linux")]
fn spawn_opener(target: &str) -> io::Result<Child> {
    Command::new("xdg-open").arg(target).spawn()
}

#[cfg(target_os = "windows")]
fn spawn_opener(target: &str) -> io::Result<Child> {
    Command::new("cmd").args(["/c", "start", "", target]).spawn()
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn spawn_opener(_target: &str) -> io::Result<Child> {
    Err(io::Error::other("no known opener for this platform"))
}
