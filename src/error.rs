//! Error taxonomy for project scaffolding

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Create,
    AddDependency,
    MakeDirectories,
    WriteEntryPoint,
    Run,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Create => "create project",
            Stage::AddDependency => "add dependency",
            Stage::MakeDirectories => "make directories",
            Stage::WriteEntryPoint => "write entry point",
            Stage::Run => "run project",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name {name:?}: {reason}")]
    InvalidInput { name: String, reason: &'static str },

    #[error("Stage '{stage}' failed: `{command}` {}", describe_failure(.exit_code, .output))]
    ExternalCommandFailed {
        stage: Stage,
        command: String,
        exit_code: Option<i32>,
        output: Option<String>,
    },

    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScaffoldError {
    /// Process exit code for this failure
    ///
    /// External failures propagate the child's code when it has one.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidInput { .. } => 2,
            ScaffoldError::ExternalCommandFailed {
                exit_code: Some(code),
                ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }

    pub fn stage(&self) -> Option<Stage> {
        match self {
            ScaffoldError::InvalidInput { .. } => None,
            ScaffoldError::ExternalCommandFailed { stage, .. } => Some(*stage),
            ScaffoldError::Filesystem { .. } => None,
        }
    }
}

fn describe_failure(exit_code: &Option<i32>, output: &Option<String>) -> String {
    let status = match *exit_code {
        Some(code) => format!("exited with status {code}"),
        None if output.is_some() => "could not be launched".to_string(),
        None => "was terminated by a signal".to_string(),
    };

    match output {
        Some(out) if !out.trim().is_empty() => format!("{status}: {}", out.trim()),
        _ => status,
    }
}
