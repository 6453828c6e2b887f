//! `bevy-init new`: scaffold a Bevy project in the current directory

use anyhow::{Context, Result};
use bevy_init::{ScaffoldRequest, Scaffolder, SystemRunner};

/// Execute the new command
///
/// # Arguments
///
/// * `name` - Project name, created as a directory under the current directory
/// * `run` - Run the project with `cargo run` once it is scaffolded
///
/// # Errors
///
/// Returns a [`bevy_init::ScaffoldError`] (wrapped) if the name is invalid
/// or any stage fails. Nothing created before the failure is removed.
pub fn execute(name: String, run: bool) -> Result<()> {
    let request = ScaffoldRequest::new(name, run)?;
    let base_dir = std::env::current_dir().context("Failed to get current directory")?;

    let scaffolder = Scaffolder::new(SystemRunner);
    if !SystemRunner.is_available(&scaffolder.config().program) {
        tracing::warn!(program = %scaffolder.config().program, "toolchain not found on PATH");
    }

    scaffolder.scaffold(&request, &base_dir)?;
    Ok(())
}
