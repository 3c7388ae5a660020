use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::ui::chart::{render_bars, Bar, BAR_WIDTH};
use crate::core::services::TREND_MONTHS;
use crate::domain::Category;

const NO_DATA: &str = "No data available for analytics";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show total, monthly, daily and top-category spending",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "categories",
            "Show spending per category",
            "categories",
            cmd_categories,
        ),
        CommandDefinition::new(
            "trend",
            "Show spending for the most recent months",
            "trend",
            cmd_trend,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = context.manager.summary();
    let highest = &summary.highest_category;
    output::section("Summary");
    let lines = [
        ("Total Expenses", context.format_amount(summary.total)),
        ("This Month", context.format_amount(summary.monthly_total)),
        ("Today", context.format_amount(summary.daily_total)),
        (
            "Highest Spend",
            format!("{} ({})", highest.label(), context.format_amount(highest.amount)),
        ),
    ];
    for (label, value) in lines {
        output::info(format!("  {label:<15} {value}"));
    }
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let breakdown = context.manager.category_breakdown();
    if breakdown.is_empty() {
        output::info(NO_DATA);
        return Ok(());
    }
    let total: f64 = breakdown.iter().map(|row| row.amount).sum();
    let bars: Vec<Bar> = breakdown
        .iter()
        .map(|row| {
            let share = if total > 0.0 {
                row.amount / total * 100.0
            } else {
                0.0
            };
            Bar {
                label: row.category.to_string(),
                value: row.amount,
                caption: format!("{} ({share:.1}%)", context.format_amount(row.amount)),
                color: Some(row.category.color_rgb()),
            }
        })
        .collect();

    output::section("Spending by Category");
    for line in render_bars(&bars, BAR_WIDTH) {
        output::info(line);
    }
    Ok(())
}

fn cmd_trend(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let trend = context.manager.monthly_trend();
    if trend.is_empty() {
        output::info(NO_DATA);
        return Ok(());
    }
    let bars: Vec<Bar> = trend
        .iter()
        .map(|month| Bar {
            label: context.formatter.format_month(month.month).to_string(),
            value: month.amount,
            caption: context.format_amount(month.amount),
            color: Some(Category::Transport.color_rgb()),
        })
        .collect();

    output::section(format!("Monthly Trend (last {TREND_MONTHS} months)"));
    for line in render_bars(&bars, BAR_WIDTH) {
        output::info(line);
    }
    Ok(())
}
