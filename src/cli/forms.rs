//! Interactive expense form.

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::core::CommandError;
use crate::domain::{parse_amount, parse_date, Category, ExpenseDraft};

/// Prompts for every editable field. `initial` prefills the form when editing;
/// otherwise the category defaults to `Other` and the date to `today`.
pub fn expense_form(
    theme: &ColorfulTheme,
    initial: Option<&ExpenseDraft>,
    today: NaiveDate,
) -> Result<ExpenseDraft, CommandError> {
    let mut title_input = Input::<String>::with_theme(theme)
        .with_prompt("Title")
        .validate_with(|value: &String| -> Result<(), &str> {
            if value.trim().is_empty() {
                Err("Title is required")
            } else {
                Ok(())
            }
        });
    if let Some(draft) = initial {
        title_input = title_input.with_initial_text(draft.title.clone());
    }
    let title = title_input.interact_text()?;

    let mut amount_input = Input::<String>::with_theme(theme)
        .with_prompt("Amount")
        .validate_with(|value: &String| -> Result<(), String> {
            match parse_amount(value) {
                Ok(amount) if amount < 0.0 => Err("Amount must not be negative".into()),
                Ok(_) => Ok(()),
                Err(err) => Err(err.to_string()),
            }
        });
    if let Some(draft) = initial {
        amount_input = amount_input.with_initial_text(format!("{:.2}", draft.amount));
    }
    let amount = parse_amount(&amount_input.interact_text()?)?;

    let selected = initial.map(|draft| draft.category).unwrap_or_default();
    let default_index = Category::ALL
        .iter()
        .position(|category| *category == selected)
        .unwrap_or(0);
    let category_index = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&Category::ALL)
        .default(default_index)
        .interact()?;

    let date_default = initial.map(|draft| draft.date).unwrap_or(today);
    let date_raw = Input::<String>::with_theme(theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .with_initial_text(date_default.to_string())
        .validate_with(|value: &String| -> Result<(), String> {
            parse_date(value).map(|_| ()).map_err(|err| err.to_string())
        })
        .interact_text()?;

    Ok(ExpenseDraft::new(
        title,
        amount,
        Category::ALL[category_index],
        parse_date(&date_raw)?,
    ))
}
