// ABOUTME: Shared plumbing for the cms command-line console
// ABOUTME: Session/client wiring, logging setup, table rendering and interactive prompts

pub mod context;
pub mod error;
pub mod logging;
pub mod output;
pub mod prompt;

pub use context::AppContext;
pub use error::{CliError, CliResult};
