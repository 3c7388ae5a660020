pub mod clock;
pub mod expense_manager;
pub mod services;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use expense_manager::ExpenseManager;
