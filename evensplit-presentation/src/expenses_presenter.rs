use crate::{DEFAULT_CURRENCY, format_amount};
use evensplit_application::ExpenseRecord;
use evensplit_i18n as i18n;
use std::fmt::Write as _;

pub struct ExpensesPresenter;

impl ExpensesPresenter {
    pub fn render(expenses: &[ExpenseRecord]) -> String {
        Self::render_with_currency(expenses, DEFAULT_CURRENCY)
    }

    pub fn render_with_currency(expenses: &[ExpenseRecord], currency: &str) -> String {
        if expenses.is_empty() {
            return format!("{}\n", i18n::NO_EXPENSES);
        }

        let mut reply = String::with_capacity(expenses.len() * 40);
        for record in expenses {
            let expense = &record.expense;
            let _ = writeln!(
                &mut reply,
                "{}",
                i18n::expense_entry(
                    record.sequence,
                    &expense.payer,
                    format_amount(expense.amount, currency),
                    &expense.description,
                )
            );
        }
        reply
    }
}
