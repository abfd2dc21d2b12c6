pub mod config;
pub mod context;
pub mod entry;
pub mod prompts;
pub mod select;

pub use context::CliContext;
pub use entry::{Args, Command, ConfigCommand, GlobalOptions, run, run_with_prompt};
pub use prompts::{Prompt, ScriptedAnswers};
pub use select::{OutputFormat, SelectArgs};
