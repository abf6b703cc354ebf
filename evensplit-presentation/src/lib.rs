#![warn(clippy::uninlined_format_args)]

pub mod balances_presenter;
pub mod error_presenter;
pub mod expenses_presenter;
pub mod settlement_presenter;

pub use balances_presenter::BalancesPresenter;
pub use error_presenter::{format_ledger_error, format_parse_error};
pub use expenses_presenter::ExpensesPresenter;
pub use settlement_presenter::SettlementPresenter;

use evensplit_domain::Money;

pub const DEFAULT_CURRENCY: &str = "$";

/// Formats an amount as `<symbol><x.xx>`.
pub fn format_amount(amount: Money, currency: &str) -> String {
    format!("{currency}{:.2}", amount.round_to_cents().as_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole(Money::from_i64(10), "$", "$10.00")]
    #[case::cents(Money::new(1250, 2), "$", "$12.50")]
    #[case::rounded(Money::new(333_333, 4), "$", "$33.33")]
    #[case::half_up(Money::new(12_345, 3), "$", "$12.35")]
    #[case::other_symbol(Money::new(5, 1), "€", "€0.50")]
    fn formats_two_decimals(#[case] amount: Money, #[case] currency: &str, #[case] expected: &str) {
        assert_eq!(format_amount(amount, currency), expected);
    }
}
