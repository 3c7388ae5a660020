use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "View or change display preferences",
        "config [show | set <currency|locale> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [action] if action.eq_ignore_ascii_case("show") => show_config(context),
        [action, key, value @ ..] if action.eq_ignore_ascii_case("set") && !value.is_empty() => {
            let mut config = context.config().clone();
            config.set(key, value.join(" ").trim())?;
            context.apply_config(config)?;
            output::success(format!("Updated `{}`.", key.to_lowercase()));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [show | set <currency|locale> <value>]".into(),
        )),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    let config = context.config();
    output::section("Configuration");
    output::info(format!("  currency : {}", config.currency));
    output::info(format!("  locale   : {}", config.locale));
    output::info(format!(
        "  file     : {}",
        context.config_manager.path().display()
    ));
    Ok(())
}
