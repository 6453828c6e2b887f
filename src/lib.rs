pub mod error;
pub mod layout;
pub mod runner;
pub mod scaffold;

// Re-export commonly used types
pub use error::{ScaffoldError, Stage};
pub use runner::{CommandRunner, CommandStatus, SystemRunner};
pub use scaffold::{scaffold, ScaffoldConfig, ScaffoldRequest, Scaffolder};
