//! The closed set of expense categories.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

/// Classification label for an expense. The set is fixed; there are no
/// user-defined categories.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Food,
    Transport,
    Rent,
    Shopping,
    Bills,
    Education,
    Health,
    #[default]
    Other,
}

impl Category {
    /// Every category in canonical display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transport,
        Category::Rent,
        Category::Shopping,
        Category::Bills,
        Category::Education,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Rent => "Rent",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Education => "Education",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }

    /// Display colour as a `#rrggbb` hex string.
    pub fn color_hex(&self) -> &'static str {
        match self {
            Category::Food => "#10b981",
            Category::Transport => "#3b82f6",
            Category::Rent => "#6366f1",
            Category::Shopping => "#f59e0b",
            Category::Bills => "#ef4444",
            Category::Education => "#8b5cf6",
            Category::Health => "#ec4899",
            Category::Other => "#64748b",
        }
    }

    /// Display colour split into RGB components.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        let hex = &self.color_hex()[1..];
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).unwrap_or_default()
        };
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// Comma separated list of valid names, for error messages and help text.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                ExpenseError::Validation(format!(
                    "unknown category `{}` (expected one of: {})",
                    needle,
                    Self::names()
                ))
            })
    }
}
