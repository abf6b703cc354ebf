use arcstr::ArcStr;
use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy, prelude::FromPrimitive};
use std::{
    borrow::Borrow,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

/// Balances whose magnitude is at or below this value are treated as settled.
///
/// `Decimal` keeps 28 significant digits, so dividing an amount of 10^18 or
/// more leaves rounding dust above this tolerance. Expenses are capped at
/// [`MAX_EXPENSE_AMOUNT`].
pub const SETTLEMENT_EPSILON: Money = Money(Decimal::from_parts(1, 0, 0, false, 9));

/// Largest single expense (10^15) whose equal shares stay well inside
/// [`SETTLEMENT_EPSILON`].
pub const MAX_EXPENSE_AMOUNT: Money =
    Money(Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0));

/// Name of a group member. Equality is exact string equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(ArcStr);

impl MemberId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for MemberId {
    fn from(name: &str) -> Self {
        Self(ArcStr::from(name))
    }
}

impl Borrow<str> for MemberId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("'{0}' is not a valid amount")]
    NotANumber(String),
    #[error("amount must be a finite number")]
    NotFinite,
}

/// Signed currency amount with exact decimal arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// True when the amount is within [`SETTLEMENT_EPSILON`] of zero.
    pub fn is_negligible(self) -> bool {
        self.abs() <= SETTLEMENT_EPSILON
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Divides the amount into `parts` equal shares.
    pub fn split_evenly(self, parts: usize) -> Option<Self> {
        if parts == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(parts)).map(Self)
    }

    /// Rounds half away from zero to two decimal places.
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Self)
            .map_err(|_| MoneyParseError::NotANumber(trimmed.to_string()))
    }
}

impl TryFrom<f64> for Money {
    type Error = MoneyParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(MoneyParseError::NotFinite);
        }
        Decimal::from_f64(value)
            .map(Self)
            .ok_or(MoneyParseError::NotFinite)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Balance snapshot keyed by member, in roster order.
pub type MemberBalances = IndexMap<MemberId, Money>;

/// `from` pays `to` the given amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Money,
}

#[derive(Debug, PartialEq)]
pub struct Settlement {
    pub transfers: Vec<Transfer>,
    /// Balances the transfers could not clear, non-empty only when the
    /// input did not sum to zero.
    pub residual: MemberBalances,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub payer: MemberId,
    pub amount: Money,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("cannot split an expense without members")]
    NoMembers,
    #[error("payer '{0}' is not a member")]
    UnknownPayer(MemberId),
    #[error("amount is out of range")]
    Overflow,
}

/// Sum of all balances, or `None` when it does not fit in a `Money`.
pub fn total(balances: &MemberBalances) -> Option<Money> {
    balances
        .values()
        .try_fold(Money::ZERO, |acc, &balance| acc.checked_add(balance))
}

/// Splits `amount` equally among every member in `balances`, crediting the
/// payer with everything beyond their own share.
///
/// Either every balance is updated or none is.
pub fn distribute_expense(
    balances: &mut MemberBalances,
    payer: &MemberId,
    amount: Money,
) -> Result<(), SplitError> {
    if balances.is_empty() {
        return Err(SplitError::NoMembers);
    }
    if !balances.contains_key(payer) {
        return Err(SplitError::UnknownPayer(payer.clone()));
    }

    let share = amount
        .split_evenly(balances.len())
        .ok_or(SplitError::Overflow)?;
    let payer_credit = amount.checked_sub(share).ok_or(SplitError::Overflow)?;

    let updated = balances
        .iter()
        .map(|(member, balance)| {
            if member == payer {
                balance.checked_add(payer_credit)
            } else {
                balance.checked_sub(share)
            }
        })
        .collect::<Option<Vec<Money>>>()
        .ok_or(SplitError::Overflow)?;

    for (slot, value) in balances.values_mut().zip(updated) {
        *slot = value;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn trio() -> MemberBalances {
        ["Alice", "Bob", "Carol"]
            .into_iter()
            .map(|name| (MemberId::from(name), Money::ZERO))
            .collect()
    }

    #[rstest]
    fn equal_split_credits_payer_and_debits_others(mut trio: MemberBalances) {
        distribute_expense(&mut trio, &MemberId::from("Alice"), Money::from_i64(30))
            .expect("split");

        assert_eq!(trio["Alice"], Money::from_i64(20));
        assert_eq!(trio["Bob"], Money::from_i64(-10));
        assert_eq!(trio["Carol"], Money::from_i64(-10));
    }

    #[rstest]
    fn uneven_split_stays_within_tolerance_of_zero(mut trio: MemberBalances) {
        distribute_expense(&mut trio, &MemberId::from("Bob"), Money::from_i64(100))
            .expect("split");

        assert!(total(&trio).is_some_and(Money::is_negligible));
        assert_eq!(trio["Bob"].round_to_cents(), Money::new(6667, 2));
        assert_eq!(trio["Alice"].round_to_cents(), Money::new(-3333, 2));
    }

    #[rstest]
    fn unknown_payer_leaves_balances_untouched(mut trio: MemberBalances) {
        let before = trio.clone();
        let err = distribute_expense(&mut trio, &MemberId::from("Dave"), Money::from_i64(5))
            .unwrap_err();

        assert_eq!(err, SplitError::UnknownPayer(MemberId::from("Dave")));
        assert_eq!(trio, before);
    }

    #[test]
    fn empty_roster_is_rejected() {
        let mut balances = MemberBalances::new();
        let err = distribute_expense(&mut balances, &MemberId::from("A"), Money::from_i64(1))
            .unwrap_err();
        assert_eq!(err, SplitError::NoMembers);
    }

    #[rstest]
    #[case::integer("12", Money::from_i64(12))]
    #[case::cents("12.50", Money::new(1250, 2))]
    #[case::padded(" 7 ", Money::from_i64(7))]
    #[case::negative("-3.5", Money::new(-35, 1))]
    fn parses_numeric_amounts(#[case] input: &str, #[case] expected: Money) {
        assert_eq!(input.parse::<Money>(), Ok(expected));
    }

    #[rstest]
    #[case::word("twelve")]
    #[case::empty("")]
    #[case::trailing_garbage("12abc")]
    fn rejects_non_numeric_amounts(#[case] input: &str) {
        assert!(matches!(
            input.parse::<Money>(),
            Err(MoneyParseError::NotANumber(_))
        ));
    }

    #[rstest]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn rejects_non_finite_floats(#[case] value: f64) {
        assert_eq!(Money::try_from(value), Err(MoneyParseError::NotFinite));
    }

    #[test]
    fn total_reports_overflow_as_none() {
        let balances: MemberBalances = [
            (MemberId::from("A"), Money::from_decimal(Decimal::MAX)),
            (MemberId::from("B"), Money::from_decimal(Decimal::MAX)),
        ]
        .into_iter()
        .collect();

        assert_eq!(total(&balances), None);
    }

    #[test]
    fn expense_cap_is_one_quadrillion() {
        assert_eq!(MAX_EXPENSE_AMOUNT, "1000000000000000".parse().unwrap());
    }

    #[rstest]
    fn capped_expense_split_stays_within_tolerance(mut trio: MemberBalances) {
        distribute_expense(&mut trio, &MemberId::from("Carol"), MAX_EXPENSE_AMOUNT)
            .expect("split");

        assert!(total(&trio).is_some_and(Money::is_negligible));
    }

    #[test]
    fn converts_finite_floats() {
        assert_eq!(Money::try_from(10.5), Ok(Money::new(105, 1)));
    }

    #[rstest]
    #[case::tiny(Money::new(1, 12), true)]
    #[case::at_epsilon(SETTLEMENT_EPSILON, true)]
    #[case::negative_tiny(Money::new(-5, 10), true)]
    #[case::cent(Money::new(1, 2), false)]
    fn negligible_uses_absolute_tolerance(#[case] amount: Money, #[case] expected: bool) {
        assert_eq!(amount.is_negligible(), expected);
    }

    #[rstest]
    #[case::half_up(Money::new(1005, 3), Money::new(101, 2))]
    #[case::half_down_negative(Money::new(-1005, 3), Money::new(-101, 2))]
    #[case::unchanged(Money::new(42, 1), Money::new(420, 2))]
    fn rounds_half_away_from_zero(#[case] amount: Money, #[case] expected: Money) {
        assert_eq!(amount.round_to_cents(), expected);
    }
}
