use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::error::Result;

use super::{config, context::CliContext, prompts::Prompt, select::SelectArgs};

#[derive(Parser, Debug, Clone)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = "Pick items one round at a time and print the accumulated selection",
    after_help = "Happy picking!"
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Disable interactive prompts (fail fast when input is required)
    #[arg(long, global = true)]
    pub non_interactive: bool,

    /// Replay prompt answers from a file (one answer per line)
    #[arg(long, value_name = "PATH", env = "ITEM_SELECTOR_ANSWERS", global = true)]
    pub answers: Option<PathBuf>,

    /// Override the config file path
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Apply a named preset from the config file
    #[arg(short = 'p', long, value_name = "NAME", global = true)]
    pub preset: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Interactively select items and print the result
    Select(SelectArgs),

    /// Inspect or initialize configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Show the resolved selector options
    Show,
    /// Print the config file path in use
    Path,
    /// Write a starter config file
    Init(InitArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite an existing config file without asking
    #[arg(long)]
    pub force: bool,
}

pub async fn run(args: Args) -> Result<()> {
    run_with_prompt(args, None).await
}

pub async fn run_with_prompt(args: Args, prompt: Option<Prompt>) -> Result<()> {
    let mut ctx = CliContext::from_args(args, prompt)?;
    match ctx.command().clone() {
        Command::Select(select_args) => super::select::execute(&select_args, &mut ctx).await,
        Command::Config(cmd) => config::execute(&cmd, &mut ctx).await,
    }
}
