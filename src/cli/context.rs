use crate::config::{OptionsRequest, ResolvedOptions, default_config_path, resolve};
use crate::error::Result;
use crate::selector::OptionOverrides;
use std::path::PathBuf;

use super::entry::{Args, Command, GlobalOptions};
use super::prompts::{Prompt, ScriptedAnswers};

pub struct CliContext {
    options: GlobalOptions,
    command: Command,
    prompt: Prompt,
}

impl CliContext {
    pub fn from_args(args: Args, prompt: Option<Prompt>) -> Result<Self> {
        let prompt = match (prompt, args.global.answers.as_deref()) {
            (Some(prompt), _) => prompt,
            (None, Some(path)) => Prompt::Scripted(ScriptedAnswers::from_file(path)?),
            (None, None) => Prompt::new(!args.global.non_interactive),
        };

        Ok(Self {
            options: args.global,
            command: args.command,
            prompt,
        })
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn prompt_mut(&mut self) -> &mut Prompt {
        &mut self.prompt
    }

    pub fn config_path(&self) -> PathBuf {
        self.options
            .config
            .clone()
            .unwrap_or_else(default_config_path)
    }

    /// Resolve selector options for this invocation.
    pub fn resolve_options(
        &self,
        catalog: Option<(PathBuf, OptionOverrides)>,
        command_line: OptionOverrides,
    ) -> Result<ResolvedOptions> {
        resolve(OptionsRequest {
            config_path: self.options.config.clone(),
            preset: self.options.preset.clone(),
            catalog,
            command_line,
        })
    }
}
