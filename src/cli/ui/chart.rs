use colored::Colorize;

pub const BAR_WIDTH: usize = 30;

/// One horizontal bar: a label, the value that sizes it, and the text shown
/// after the bar.
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub caption: String,
    pub color: Option<(u8, u8, u8)>,
}

/// Number of cells for `value`, scaled against the largest value. Any
/// positive value gets at least one cell.
pub fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round().clamp(1.0, width as f64) as usize
}

pub fn render_bars(bars: &[Bar], width: usize) -> Vec<String> {
    let max = bars.iter().map(|bar| bar.value).fold(0.0, f64::max);
    let label_width = bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);

    bars.iter()
        .map(|bar| {
            let len = bar_length(bar.value, max, width);
            let body = "█".repeat(len);
            let body = match bar.color {
                Some((r, g, b)) => body.truecolor(r, g, b).to_string(),
                None => body.bright_cyan().to_string(),
            };
            format!(
                "{:<label_width$}  {}{}  {}",
                bar.label,
                body,
                " ".repeat(width - len),
                bar.caption
            )
        })
        .collect()
}
