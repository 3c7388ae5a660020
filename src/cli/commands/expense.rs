use colored::Colorize;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ParsedArgs, ShellContext};
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::cli::{forms, io, output};
use crate::core::services::{parse_category_filter, ExpenseFilter, PeriodFilter};
use crate::domain::{parse_amount, parse_date, sum_amounts, Category, ExpenseDraft};

const ADD_USAGE: &str = "add <title> <amount> <category> [YYYY-MM-DD]";
const EDIT_USAGE: &str =
    "edit <id> [--title T] [--amount A] [--category C] [--date YYYY-MM-DD]";
const DELETE_USAGE: &str = "delete <id> [--yes]";
const LIST_USAGE: &str = "list [--search T] [--category C|All] [--period all|month|week]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("add", "Record a new expense", ADD_USAGE, cmd_add),
        CommandDefinition::new("edit", "Change an existing expense", EDIT_USAGE, cmd_edit),
        CommandDefinition::new("delete", "Remove an expense", DELETE_USAGE, cmd_delete),
        CommandDefinition::new("list", "List expenses, newest first", LIST_USAGE, cmd_list),
    ]
}

fn usage(text: &str) -> CommandError {
    CommandError::InvalidArguments(format!("usage: {text}"))
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let draft = match args {
        [] if context.can_prompt() => forms::expense_form(context.theme(), None, context.today())?,
        [title, amount, category] => ExpenseDraft::new(
            *title,
            parse_amount(amount)?,
            category.parse::<Category>()?,
            context.today(),
        ),
        [title, amount, category, date] => ExpenseDraft::new(
            *title,
            parse_amount(amount)?,
            category.parse::<Category>()?,
            parse_date(date)?,
        ),
        _ => return Err(usage(ADD_USAGE)),
    };

    let expense = context.manager.add(draft)?.clone();
    output::success(format!(
        "Added `{}` for {} ({}).",
        expense.title,
        context.format_amount(expense.amount),
        expense.id.short()
    ));
    context.warn_if_unsaved();
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["title", "amount", "category", "date"], &[])?;
    let [reference] = parsed.positional.as_slice() else {
        return Err(usage(EDIT_USAGE));
    };
    let existing = context.manager.resolve(reference)?.clone();

    let draft = if parsed.has_options() {
        let mut draft = existing.draft();
        if let Some(title) = parsed.option("title") {
            draft.title = title.to_string();
        }
        if let Some(amount) = parsed.option("amount") {
            draft.amount = parse_amount(amount)?;
        }
        if let Some(category) = parsed.option("category") {
            draft.category = category.parse::<Category>()?;
        }
        if let Some(date) = parsed.option("date") {
            draft.date = parse_date(date)?;
        }
        draft
    } else if context.can_prompt() {
        forms::expense_form(context.theme(), Some(&existing.draft()), context.today())?
    } else {
        return Err(CommandError::InvalidArguments(
            "nothing to change; pass --title, --amount, --category or --date".into(),
        ));
    };

    let updated = context.manager.edit(&existing.id, draft)?.clone();
    output::success(format!(
        "Updated `{}` ({}).",
        updated.title,
        updated.id.short()
    ));
    context.warn_if_unsaved();
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &[], &["yes"])?;
    let [reference] = parsed.positional.as_slice() else {
        return Err(usage(DELETE_USAGE));
    };
    let target = context.manager.resolve(reference)?.clone();

    if !parsed.switch("yes") {
        if !context.can_prompt() {
            return Err(CommandError::InvalidArguments(
                "deleting from a script requires `--yes`".into(),
            ));
        }
        output::info(format!(
            "{} | {} | {}",
            context.format_date(target.date),
            target.title,
            context.format_amount(target.amount)
        ));
        let confirmed = io::confirm_action(
            context.theme(),
            "Are you sure you want to delete this expense?",
            false,
        )?;
        if !confirmed {
            output::info("Deletion cancelled.");
            return Ok(());
        }
    }

    let removed = context.manager.delete(&target.id)?;
    output::success(format!("Deleted `{}`.", removed.title));
    context.warn_if_unsaved();
    Ok(())
}

fn cmd_list(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = ParsedArgs::parse(args, &["search", "category", "period"], &[])?;
    let mut filter = ExpenseFilter::default();
    // A bare word is treated as a search term.
    match (parsed.option("search"), parsed.positional.as_slice()) {
        (Some(term), []) => filter = filter.search(term),
        (None, words) => filter = filter.search(words.join(" ")),
        (Some(_), _) => return Err(usage(LIST_USAGE)),
    }
    if let Some(category) = parsed.option("category") {
        filter = filter.category(parse_category_filter(category)?);
    }
    if let Some(period) = parsed.option("period") {
        filter = filter.period(period.parse::<PeriodFilter>()?);
    }

    let rows = context.manager.filtered(&filter);
    if rows.is_empty() {
        output::info("No expenses found matching your criteria.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Title").max_width(32),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::left("ID"),
    ]);
    for expense in &rows {
        let (r, g, b) = expense.category.color_rgb();
        table.push_row(vec![
            context.format_date(expense.date),
            expense.title.clone(),
            expense.category.as_str().truecolor(r, g, b).to_string(),
            context.format_amount(expense.amount),
            expense.id.short().to_string(),
        ]);
    }
    output::info(table.render());
    output::hint(format!(
        "{} shown, total {}",
        rows.len(),
        context.format_amount(sum_amounts(rows.iter().copied()))
    ));
    Ok(())
}
