//! Amount and date presentation. No conversion happens here: every amount is
//! shown in the single configured currency.

use chrono::{Datelike, NaiveDate};

use crate::config::Config;

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_DE: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];
const MONTHS_FR: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const MONTHS_IT: [&str; 12] = [
    "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
];
const MONTHS_PT: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];
const MONTHS_NL: [&str; 12] = [
    "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

/// Separators and calendar names used when rendering numbers and dates.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub month_names: &'static [&'static str; 12],
    /// `7 Okt 2026` instead of `Oct 7, 2026`.
    pub day_first: bool,
}

impl Default for LocaleFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            month_names: &MONTHS_EN,
            day_first: false,
        }
    }
}

impl LocaleFormat {
    /// Maps a language tag onto separators and month names. Unknown tags fall
    /// back to `en-US`; languages without a month table keep English names.
    pub fn for_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" => (',', '.'),
            "fr" | "sv" | "nb" | "fi" | "pl" | "cs" => (',', ' '),
            _ => ('.', ','),
        };
        let month_names = match language.as_str() {
            "de" => &MONTHS_DE,
            "fr" => &MONTHS_FR,
            "es" => &MONTHS_ES,
            "it" => &MONTHS_IT,
            "pt" => &MONTHS_PT,
            "nl" => &MONTHS_NL,
            _ => &MONTHS_EN,
        };
        Self {
            decimal_separator,
            grouping_separator,
            month_names,
            day_first: language != "en" && decimal_separator == ',',
        }
    }

    /// Short name for a 1-based month; empty when out of range.
    pub fn month_abbrev(&self, month: u32) -> &'static str {
        month
            .checked_sub(1)
            .and_then(|idx| self.month_names.get(idx as usize))
            .copied()
            .unwrap_or_default()
    }

    /// Medium date as shown in lists, e.g. `Oct 17, 2026`.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let month = self.month_abbrev(date.month());
        if self.day_first {
            format!("{} {} {}", date.day(), month, date.year())
        } else {
            format!("{} {}, {}", month, date.day(), date.year())
        }
    }
}

/// Formats amounts according to a [`Config`].
#[derive(Debug, Clone)]
pub struct AmountFormatter {
    code: String,
    locale: LocaleFormat,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl AmountFormatter {
    pub fn new(code: impl Into<String>, locale: LocaleFormat) -> Self {
        Self {
            code: code.into().to_ascii_uppercase(),
            locale,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.currency.clone(), LocaleFormat::for_tag(&config.locale))
    }

    /// `1395.5` renders as `$1,395.50` for USD.
    pub fn format(&self, amount: f64) -> String {
        let body = format_number(&self.locale, amount.abs(), minor_units_for(&self.code));
        let sign = if amount < 0.0 { "-" } else { "" };
        match symbol_for(&self.code) {
            Some(symbol) => format!("{sign}{symbol}{body}"),
            None => format!("{sign}{} {body}", self.code),
        }
    }

    pub fn format_month(&self, month: u32) -> &'static str {
        self.locale.month_abbrev(month)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        self.locale.format_date(date)
    }
}

pub fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        "AUD" => Some("A$"),
        "CAD" => Some("C$"),
        _ => None,
    }
}

pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

pub fn format_number(locale: &LocaleFormat, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = group_digits(int_part, locale.grouping_separator);
    match frac_part {
        Some(frac) => format!("{grouped}{}{frac}", locale.decimal_separator),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
