use crate::{
    error::LedgerError,
    model::{ExpenseRecord, PersonBalance, SettlementResult},
};
use evensplit_domain::{
    Expense, MAX_EXPENSE_AMOUNT, MemberBalances, MemberId, Money, SettlementCalculator,
    distribute_expense,
};
use fxhash::FxHashSet;

/// Running balances and expense log for a fixed group of members.
///
/// Writes go through `&mut self`; readers get owned snapshots, so a
/// settlement always sees a consistent set of balances.
#[derive(Debug, Clone)]
pub struct Ledger {
    members: Vec<MemberId>,
    balances: MemberBalances,
    expenses: Vec<ExpenseRecord>,
}

impl Ledger {
    /// Creates a ledger for the given roster.
    ///
    /// Names are trimmed and blank names dropped. Fails when nothing is left
    /// or a name appears twice.
    pub fn new<I, S>(names: I) -> Result<Self, LedgerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut members = Vec::new();

        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                continue;
            }
            let member = MemberId::from(name);
            if !seen.insert(member.clone()) {
                return Err(LedgerError::DuplicateMember(member));
            }
            members.push(member);
        }

        if members.is_empty() {
            return Err(LedgerError::NoMembers);
        }

        let balances = members
            .iter()
            .cloned()
            .map(|member| (member, Money::ZERO))
            .collect();

        tracing::debug!(member_count = members.len(), "Created ledger");

        Ok(Self {
            members,
            balances,
            expenses: Vec::new(),
        })
    }

    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn expenses(&self) -> &[ExpenseRecord] {
        &self.expenses
    }

    /// Records an expense and splits it equally among all members.
    ///
    /// Amounts above [`MAX_EXPENSE_AMOUNT`] are rejected.
    pub fn add_expense(
        &mut self,
        payer: &str,
        amount: Money,
        description: impl Into<String>,
    ) -> Result<&ExpenseRecord, LedgerError> {
        let Some((_, payer_id, _)) = self.balances.get_full(payer) else {
            tracing::warn!(payer, "Rejected expense from unknown member");
            return Err(LedgerError::UnknownMember(payer.to_string()));
        };
        let payer_id = payer_id.clone();

        if amount <= Money::ZERO {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if amount > MAX_EXPENSE_AMOUNT {
            tracing::warn!(amount = %amount, "Rejected expense above the amount cap");
            return Err(LedgerError::AmountOutOfRange);
        }

        distribute_expense(&mut self.balances, &payer_id, amount)?;

        let record = ExpenseRecord {
            sequence: self.expenses.len() + 1,
            expense: Expense {
                payer: payer_id,
                amount,
                description: description.into(),
            },
        };
        tracing::debug!(
            sequence = record.sequence,
            payer = %record.expense.payer,
            amount = %amount,
            "Recorded expense"
        );
        self.expenses.push(record);

        let last = self.expenses.len() - 1;
        Ok(&self.expenses[last])
    }

    /// Like [`Ledger::add_expense`], parsing the amount from user input first.
    pub fn add_expense_text(
        &mut self,
        payer: &str,
        amount: &str,
        description: impl Into<String>,
    ) -> Result<&ExpenseRecord, LedgerError> {
        let amount: Money = amount.parse().inspect_err(|err| {
            tracing::warn!(error = %err, "Rejected non-numeric expense amount");
        })?;
        self.add_expense(payer, amount, description)
    }

    /// Snapshot of every member's balance, in roster order.
    pub fn current_balances(&self) -> MemberBalances {
        self.balances.clone()
    }

    pub fn balances(&self) -> Vec<PersonBalance> {
        self.balances
            .iter()
            .map(|(id, &balance)| PersonBalance {
                id: id.clone(),
                balance,
            })
            .collect()
    }

    /// Computes the transfers that clear the current balances.
    ///
    /// The ledger itself is left unchanged.
    pub fn settle(&self) -> SettlementResult {
        let snapshot = self.current_balances();
        let transfers = SettlementCalculator.settle(&snapshot);

        SettlementResult {
            balances: self.balances(),
            transfers,
        }
    }

    /// Forgets all expenses and zeroes every balance. The roster is kept.
    pub fn reset(&mut self) {
        self.expenses.clear();
        for balance in self.balances.values_mut() {
            *balance = Money::ZERO;
        }
        tracing::debug!(member_count = self.members.len(), "Reset ledger");
    }
}
