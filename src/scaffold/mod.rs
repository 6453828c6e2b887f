//! Scaffold a new Bevy project
//!
//! Public interface only; the pipeline lives in `internal`.
//!
//! # Example
//!
//! ```no_run
//! use bevy_init::scaffold::{self, ScaffoldRequest};
//!
//! let request = ScaffoldRequest::new("demo", false)?;
//! scaffold::scaffold(request)?;
//! # Ok::<(), bevy_init::ScaffoldError>(())
//! ```

mod internal;

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::runner::{CommandRunner, SystemRunner};

pub use internal::{make_directories, validate_project_name, write_entry_point};

/// What to scaffold, built from CLI input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    project_name: String,
    run_after_create: bool,
}

impl ScaffoldRequest {
    /// Build a request, rejecting names that aren't a single path component
    pub fn new(
        project_name: impl Into<String>,
        run_after_create: bool,
    ) -> Result<Self, ScaffoldError> {
        let project_name = project_name.into();
        validate_project_name(&project_name)?;
        Ok(Self {
            project_name,
            run_after_create,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn run_after_create(&self) -> bool {
        self.run_after_create
    }
}

/// Toolchain settings for the external commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Package manager binary
    pub program: String,
    /// The one dependency added to the manifest
    pub dependency: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            program: "cargo".to_string(),
            dependency: "bevy".to_string(),
        }
    }
}

/// Runs the scaffold pipeline against an explicit base directory
pub struct Scaffolder<R: CommandRunner> {
    runner: R,
    config: ScaffoldConfig,
}

impl<R: CommandRunner> Scaffolder<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            config: ScaffoldConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScaffoldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    /// Create the project `base_dir/<name>` and return its path
    ///
    /// # Process
    ///
    /// 1. `cargo new <name>` in `base_dir`
    /// 2. `cargo add bevy` in the project
    /// 3. Asset and source directories
    /// 4. `src/main.rs` from the fixed template
    /// 5. `cargo run` in the project, if requested
    ///
    /// The process working directory is never changed.
    ///
    /// # Errors
    ///
    /// Any stage failure stops the pipeline. Earlier stages are not undone.
    pub fn scaffold(
        &self,
        request: &ScaffoldRequest,
        base_dir: &Path,
    ) -> Result<PathBuf, ScaffoldError> {
        internal::run_pipeline(&self.runner, &self.config, request, base_dir)
    }
}

/// Scaffold into the current directory using real `cargo`
pub fn scaffold(request: ScaffoldRequest) -> Result<(), ScaffoldError> {
    let base_dir = std::env::current_dir().map_err(|source| ScaffoldError::Filesystem {
        path: PathBuf::from("."),
        source,
    })?;

    Scaffolder::new(SystemRunner).scaffold(&request, &base_dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_rejects_bad_names() {
        for name in ["", ".", "..", "a/b", "-r", "a\\b"] {
            let err = ScaffoldRequest::new(name, false).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidInput { .. }),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_request_keeps_fields() {
        let request = ScaffoldRequest::new("space_game", true).unwrap();
        assert_eq!(request.project_name(), "space_game");
        assert!(request.run_after_create());
    }

    #[test]
    fn test_default_config_targets_cargo_and_bevy() {
        let config = ScaffoldConfig::default();
        assert_eq!(config.program, "cargo");
        assert_eq!(config.dependency, "bevy");
    }
}
