pub mod category;
pub mod common;
pub mod expense;

pub use category::Category;
pub use common::{sum_amounts, Amounted, Displayable};
pub use expense::{parse_amount, parse_date, Expense, ExpenseDraft, ExpenseId};
