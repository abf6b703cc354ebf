use crate::model::{MemberBalances, MemberId, Money, Settlement, Transfer, total};

/// One side of an outstanding balance, always stored as a positive amount.
struct Position<'a> {
    member: &'a MemberId,
    amount: Money,
}

/// Settlement calculation service
///
/// Matches the largest remaining debtor against the largest remaining
/// creditor until one side runs out. Members with equal amounts keep the
/// order in which they appear in the balance snapshot.
pub struct SettlementCalculator;

impl SettlementCalculator {
    /// Calculate the transfers that clear `balances`.
    ///
    /// # Arguments
    /// * `balances` - Balance snapshot (MemberId -> Money), positive means owed money
    ///
    /// # Returns
    /// Transfers in the order they were matched
    pub fn settle(&self, balances: &MemberBalances) -> Vec<Transfer> {
        self.settle_with_residual(balances).transfers
    }

    /// Like [`SettlementCalculator::settle`], also returning whatever the
    /// transfers could not clear when the snapshot does not sum to zero.
    pub fn settle_with_residual(&self, balances: &MemberBalances) -> Settlement {
        let (debtors, creditors) = partition(balances);

        let mut transfers = Vec::with_capacity(debtors.len() + creditors.len());
        let mut debtor_idx = 0;
        let mut creditor_idx = 0;
        let mut debt = remaining_at(&debtors, debtor_idx);
        let mut credit = remaining_at(&creditors, creditor_idx);

        while let (Some(debtor), Some(creditor)) =
            (debtors.get(debtor_idx), creditors.get(creditor_idx))
        {
            let payment = debt.min(credit);
            transfers.push(Transfer {
                from: debtor.member.clone(),
                to: creditor.member.clone(),
                amount: payment,
            });

            debt -= payment;
            credit -= payment;

            if debt.is_negligible() {
                debtor_idx += 1;
                debt = remaining_at(&debtors, debtor_idx);
            }
            if credit.is_negligible() {
                creditor_idx += 1;
                credit = remaining_at(&creditors, creditor_idx);
            }
        }

        let mut residual = MemberBalances::new();
        for (idx, debtor) in debtors.iter().enumerate().skip(debtor_idx) {
            let left = if idx == debtor_idx { debt } else { debtor.amount };
            residual.insert(debtor.member.clone(), -left);
        }
        for (idx, creditor) in creditors.iter().enumerate().skip(creditor_idx) {
            let left = if idx == creditor_idx {
                credit
            } else {
                creditor.amount
            };
            residual.insert(creditor.member.clone(), left);
        }

        tracing::debug!(
            member_count = balances.len(),
            debtor_count = debtors.len(),
            creditor_count = creditors.len(),
            transfer_count = transfers.len(),
            "Computed settlement transfers"
        );

        if !residual.is_empty() {
            tracing::warn!(
                residual_count = residual.len(),
                residual_total = %total(&residual)
                    .map_or_else(|| "overflow".to_string(), |sum| sum.to_string()),
                "Balances do not sum to zero; leaving remainder unsettled"
            );
        }

        Settlement {
            transfers,
            residual,
        }
    }
}

/// Settles a balance snapshot with the default calculator.
pub fn settle(balances: &MemberBalances) -> Vec<Transfer> {
    SettlementCalculator.settle(balances)
}

fn partition(balances: &MemberBalances) -> (Vec<Position<'_>>, Vec<Position<'_>>) {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();

    for (member, &balance) in balances {
        if balance.is_negligible() {
            continue;
        }
        let position = Position {
            member,
            amount: balance.abs(),
        };
        if balance.is_negative() {
            debtors.push(position);
        } else {
            creditors.push(position);
        }
    }

    // `sort_by` is stable, so ties keep snapshot order.
    debtors.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount));
    creditors.sort_by(|lhs, rhs| rhs.amount.cmp(&lhs.amount));

    (debtors, creditors)
}

fn remaining_at(positions: &[Position<'_>], idx: usize) -> Money {
    positions.get(idx).map_or(Money::ZERO, |position| position.amount)
}
