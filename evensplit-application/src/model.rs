use evensplit_domain::{Expense, MemberId, Money, Transfer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBalance {
    pub id: MemberId,
    pub balance: Money,
}

/// An expense together with its 1-based position in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    pub sequence: usize,
    pub expense: Expense,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResult {
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
}

impl SettlementResult {
    pub fn is_settled(&self) -> bool {
        self.transfers.is_empty()
    }
}
