use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    core::ExpenseManager,
    currency::AmountFormatter,
};

use super::commands::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) manager: ExpenseManager,
    pub(crate) config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) formatter: AmountFormatter,
    pub(crate) theme: ColorfulTheme,
    pub(crate) last_command: Option<String>,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn manager(&self) -> &ExpenseManager {
        &self.manager
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, expenses: {} }}",
            self.running,
            self.last_command,
            self.manager.expenses().len()
        )
    }
}
