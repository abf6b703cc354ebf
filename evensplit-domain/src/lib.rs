#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Expense, MAX_EXPENSE_AMOUNT, MemberBalances, MemberId, Money, MoneyParseError,
    SETTLEMENT_EPSILON, Settlement, SplitError, Transfer, distribute_expense, total,
};
pub use services::{SettlementCalculator, settle};
