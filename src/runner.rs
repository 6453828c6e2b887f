//! Subprocess seam
//!
//! Every external toolchain call goes through [`CommandRunner`], so the
//! scaffold pipeline can be driven by a fake in tests.

use std::io;
use std::path::Path;
use std::process::Command;

/// Result of one external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// Captured output, if the runner captures it (the system runner doesn't)
    pub output: Option<String>,
}

impl CommandStatus {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn exited(code: i32) -> Self {
        Self { code: Some(code), output: None }
    }
}

/// Trait for running external commands
pub trait CommandRunner {
    /// Run `program args...` in `cwd` and block until it exits
    ///
    /// `Err` means the process could not be launched at all.
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandStatus>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandStatus> {
        (**self).run(program, args, cwd)
    }
}

/// Runs commands as real child processes with inherited stdio
pub struct SystemRunner;

impl SystemRunner {
    pub fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> io::Result<CommandStatus> {
        let resolved = which::which(program).map_err(|e| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("'{program}' not found on PATH ({e})"),
            )
        })?;

        tracing::debug!(program = %resolved.display(), ?args, cwd = %cwd.display(), "spawning");

        let status = Command::new(&resolved)
            .args(args)
            .current_dir(cwd)
            .status()?;

        Ok(CommandStatus {
            code: status.code(),
            output: None,
        })
    }
}
