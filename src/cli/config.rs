use crate::config::file::write_template;
use crate::config::{ConfigSource, ResolvedOptions};
use crate::error::{Error, Result};
use crate::selector::OptionOverrides;

use super::{
    context::CliContext,
    entry::{ConfigCommand, InitArgs},
};

pub async fn execute(command: &ConfigCommand, ctx: &mut CliContext) -> Result<()> {
    match command {
        ConfigCommand::Show => show_command(ctx),
        ConfigCommand::Path => {
            println!("{}", ctx.config_path().display());
            Ok(())
        }
        ConfigCommand::Init(args) => init_command(args, ctx).await,
    }
}

fn show_command(ctx: &CliContext) -> Result<()> {
    let resolved = ctx.resolve_options(None, OptionOverrides::default())?;
    println!("# Configuration sources: {}", source_hint(&resolved.sources));
    if !resolved.available_presets.is_empty() {
        println!("# Available presets: {}", resolved.available_presets.join(", "));
    }
    println!();
    print!("{}", render_options(&resolved)?);
    Ok(())
}

fn source_hint(sources: &[ConfigSource]) -> String {
    if sources.is_empty() {
        return "defaults".to_string();
    }
    let layers: Vec<String> = sources.iter().map(ToString::to_string).collect();
    format!("defaults < {}", layers.join(" < "))
}

fn render_options(resolved: &ResolvedOptions) -> Result<String> {
    toml::to_string_pretty(&resolved.options).map_err(|source| Error::ConfigSerialize { source })
}

async fn init_command(args: &InitArgs, ctx: &mut CliContext) -> Result<()> {
    let path = ctx.config_path();
    let mut force = args.force;

    if path.exists() && !force && ctx.prompt_mut().is_interactive() {
        let message = format!("Config file '{}' exists. Overwrite?", path.display());
        if !ctx.prompt_mut().confirm(&message, false).await? {
            println!("Operation cancelled.");
            return Ok(());
        }
        force = true;
    }

    write_template(&path, force)?;
    println!("Config template written to {}", path.display());
    Ok(())
}
