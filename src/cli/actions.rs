//! Reporting back to the GitHub Actions runner.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT`; failures become `::error::`
//! workflow commands when running inside Actions.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::error;

/// Publish a named step output, or print it when not running under Actions.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match std::env::var_os("GITHUB_OUTPUT").filter(|p| !p.is_empty()) {
        Some(path) => append_output(Path::new(&path), name, value),
        None => {
            println!("{name}={value}");
            Ok(())
        }
    }
}

/// Append one `name=value` entry to an Actions output file.
pub fn append_output(path: &Path, name: &str, value: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open output file {}", path.display()))?;
    let delimiter = format!("ghadelimiter_{}", std::process::id());
    file.write_all(format_output_entry(name, value, &delimiter).as_bytes())
        .with_context(|| format!("failed to write output file {}", path.display()))
}

/// Whether the process runs as a GitHub Actions step.
pub fn running_in_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Log the failure and surface it as the step's error annotation.
pub fn set_failed(err: &anyhow::Error) {
    error!("{err:#}");
    if running_in_actions() {
        println!("{}", workflow_command("error", &err.to_string()));
    }
}

/// Surface a non-fatal condition as a warning annotation.
pub fn warning(message: &str) {
    if running_in_actions() {
        println!("{}", workflow_command("warning", message));
    }
}

fn workflow_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

fn format_output_entry(name: &str, value: &str, delimiter: &str) -> String {
    if value.contains('\n') || value.contains('\r') {
        format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
    } else {
        format!("{name}={value}\n")
    }
}

fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
