//! Core CLI dispatch, error reporting, and shell context helpers.

use std::io;

use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    core::{utils::PathResolver, ExpenseManager, SystemClock},
    currency::AmountFormatter,
    errors::ExpenseError,
    storage::JsonStorage,
};

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::{io as cli_io, output};
pub use crate::cli::shell_context::{CliMode, ShellContext};
pub use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single command. Reported to the user; the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Prompt(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    /// Opens the data directory (`EXPENSE_TRACKER_HOME` or the default) and
    /// loads expenses and configuration from it. An unusable directory only
    /// leaves the session unsaved.
    pub fn new(mode: CliMode) -> Self {
        let base = PathResolver::base_dir();
        let storage = JsonStorage::new(Some(base.clone()));
        let manager = ExpenseManager::open(Box::new(storage), Box::new(SystemClock));
        let config_manager = ConfigManager::with_base_dir(base);
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "falling back to default configuration");
                output::warning(format!("Ignoring unreadable configuration: {err}"));
                Config::default()
            }
        };
        Self::with_parts(mode, manager, config_manager, config)
    }

    pub fn with_parts(
        mode: CliMode,
        manager: ExpenseManager,
        config_manager: ConfigManager,
        config: Config,
    ) -> Self {
        Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            manager,
            config_manager,
            formatter: AmountFormatter::from_config(&config),
            config,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        }
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn can_prompt(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub(crate) fn theme(&self) -> &ColorfulTheme {
        &self.theme
    }

    pub(crate) fn today(&self) -> NaiveDate {
        self.manager.clock().today()
    }

    pub(crate) fn prompt(&self) -> String {
        "expenses> ".into()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub(crate) fn format_amount(&self, amount: f64) -> String {
        self.formatter.format(amount)
    }

    pub(crate) fn format_date(&self, date: NaiveDate) -> String {
        self.formatter.format_date(date)
    }

    pub(crate) fn apply_config(&mut self, config: Config) -> CommandResult {
        self.config_manager.save(&config)?;
        self.formatter = AmountFormatter::from_config(&config);
        self.config = config;
        Ok(())
    }

    /// Mutations are kept in memory even when the write fails; say so.
    pub(crate) fn warn_if_unsaved(&self) {
        if self.manager.last_save_failed() {
            output::warning("Changes could not be saved and will be lost when the shell exits.");
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let handler = self.registry.get(command).map(|definition| definition.handler);
        if let Some(handler) = handler {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.closest_command(input) {
            output::info(format!("Suggestion: `{}`?", best));
        }
    }

    fn closest_command(&self, input: &str) -> Option<&'static str> {
        let needle = input.to_lowercase();
        self.registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, name)| name)
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match cli_io::confirm_action(&self.theme, "Exit shell?", true) {
            Ok(answer) => Ok(answer),
            Err(CommandError::Prompt(err)) => Err(err.into()),
            Err(_) => Ok(true),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(ExpenseError::Validation(message)) => {
                output::warning(message);
            }
            CommandError::Core(ExpenseError::AmbiguousReference(reference)) => {
                output::error(format!("`{reference}` matches more than one expense."));
                output::hint("Use more characters of the id shown by `list`.");
            }
            other => output::error(other),
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(&err.message);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }
}

/// Positional arguments plus `--name value` / `--name=value` options and
/// bare `--switch` flags.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs<'a> {
    pub positional: Vec<&'a str>,
    options: Vec<(&'static str, &'a str)>,
    switches: Vec<&'static str>,
}

impl<'a> ParsedArgs<'a> {
    pub fn parse(
        args: &[&'a str],
        options: &[&'static str],
        switches: &[&'static str],
    ) -> Result<Self, CommandError> {
        let mut parsed = ParsedArgs::default();
        let mut iter = args.iter().copied();
        while let Some(arg) = iter.next() {
            let Some(flag) = arg.strip_prefix("--") else {
                parsed.positional.push(arg);
                continue;
            };
            let (name, inline) = match flag.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (flag, None),
            };
            if let Some(known) = options.iter().copied().find(|option| *option == name) {
                let value = inline.or_else(|| iter.next()).ok_or_else(|| {
                    CommandError::InvalidArguments(format!("`--{known}` requires a value"))
                })?;
                parsed.options.push((known, value));
            } else if let Some(known) = switches.iter().copied().find(|switch| *switch == name) {
                parsed.switches.push(known);
            } else {
                return Err(CommandError::InvalidArguments(format!(
                    "unknown option `--{name}`"
                )));
            }
        }
        Ok(parsed)
    }

    /// Last value given for `name`.
    pub fn option(&self, name: &str) -> Option<&'a str> {
        self.options
            .iter()
            .rev()
            .find(|(option, _)| *option == name)
            .map(|(_, value)| *value)
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }

    pub fn switch(&self, name: &str) -> bool {
        self.switches.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::FixedClock,
        domain::{Category, Expense},
        storage::MemoryStorage,
    };
    use tempfile::TempDir;

    fn script_context(storage: &MemoryStorage, temp: &TempDir) -> ShellContext {
        output::disable_colors();
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let manager = ExpenseManager::open(Box::new(storage.clone()), Box::new(FixedClock::on(today)));
        let config_manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        ShellContext::with_parts(CliMode::Script, manager, config_manager, Config::default())
    }

    fn titles(storage: &MemoryStorage) -> Vec<String> {
        storage
            .snapshot()
            .unwrap_or_default()
            .into_iter()
            .map(|expense: Expense| expense.title)
            .collect()
    }

    #[test]
    fn parses_options_and_switches() {
        let args = ["abc", "--title", "Lunch", "--amount=12.5", "--yes"];
        let parsed = ParsedArgs::parse(&args, &["title", "amount"], &["yes"]).unwrap();
        assert_eq!(parsed.positional, vec!["abc"]);
        assert_eq!(parsed.option("title"), Some("Lunch"));
        assert_eq!(parsed.option("amount"), Some("12.5"));
        assert!(parsed.switch("yes"));
        assert!(ParsedArgs::parse(&["--title"], &["title"], &[]).is_err());
        assert!(ParsedArgs::parse(&["--colour", "red"], &["title"], &[]).is_err());
    }

    #[test]
    fn first_run_is_seeded_and_add_persists() {
        let storage = MemoryStorage::default();
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        assert_eq!(context.manager().expenses().len(), 5);

        context
            .process_line("add \"Morning Coffee\" 3.75 food 2026-10-16")
            .unwrap();
        let first = &context.manager().expenses()[0];
        assert_eq!(first.title, "Morning Coffee");
        assert_eq!(first.category, Category::Food);
        assert_eq!(titles(&storage)[0], "Morning Coffee");
    }

    #[test]
    fn invalid_add_is_reported_and_not_stored() {
        let storage = MemoryStorage::with_expenses(Vec::new());
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        let err = context.process_line("add Taxi abc Transport").unwrap_err();
        assert!(matches!(err, CommandError::Core(ExpenseError::Validation(_))));
        assert!(context.process_line("add").is_err());
        assert!(context.manager().expenses().is_empty());
        context.report_error(err).unwrap();
    }

    #[test]
    fn delete_requires_confirmation_in_script_mode() {
        let storage = MemoryStorage::default();
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        assert!(matches!(
            context.process_line("delete 3"),
            Err(CommandError::InvalidArguments(_))
        ));
        assert_eq!(context.manager().expenses().len(), 5);

        context.process_line("delete 3 --yes").unwrap();
        let ids: Vec<String> = context
            .manager()
            .expenses()
            .iter()
            .map(|expense| expense.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2", "4", "5"]);
        assert_eq!(storage.snapshot().unwrap().len(), 4);
    }

    #[test]
    fn edit_overrides_only_given_fields() {
        let storage = MemoryStorage::default();
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        context
            .process_line("edit 2 --amount 1250 --title \"Rent October\"")
            .unwrap();
        let rent = context.manager().resolve("2").unwrap();
        assert_eq!(rent.title, "Rent October");
        assert_eq!(rent.amount, 1250.0);
        assert_eq!(rent.category, Category::Rent);
        assert!(context.process_line("edit 2").is_err());
    }

    #[test]
    fn unknown_commands_continue_with_suggestion() {
        let storage = MemoryStorage::default();
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        assert_eq!(context.closest_command("sumary"), Some("summary"));
        assert_eq!(context.closest_command("zzzzzzzzzz"), None);
        assert_eq!(
            context.process_line("lst").unwrap(),
            LoopControl::Continue
        );
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
    }

    #[test]
    fn config_set_updates_formatter() {
        let storage = MemoryStorage::default();
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        context.process_line("config set currency eur").unwrap();
        assert_eq!(context.config().currency, "EUR");
        assert_eq!(context.format_amount(5.0), "€5.00");
        assert!(context.process_line("config set currency euros").is_err());
        assert!(context.status().contains("expenses: 5"));
    }

    #[test]
    fn locale_setting_changes_dates_and_months() {
        let storage = MemoryStorage::default();
        let temp = TempDir::new().unwrap();
        let mut context = script_context(&storage, &temp);
        context.process_line("config set locale de-DE").unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(context.format_date(date), "5 Mär 2026");
        assert_eq!(context.formatter.format_month(10), "Okt");
        assert_eq!(context.format_amount(1200.0), "$1.200,00");
    }
}
