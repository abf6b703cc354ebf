use evensplit_domain::{MemberId, Money, MoneyParseError, SplitError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("at least one member is required")]
    NoMembers,
    #[error("member '{0}' is listed more than once")]
    DuplicateMember(MemberId),
    #[error("'{0}' is not a member of this group")]
    UnknownMember(String),
    #[error(transparent)]
    InvalidAmount(#[from] MoneyParseError),
    #[error("amount must be greater than zero (got {0})")]
    NonPositiveAmount(Money),
    #[error("amount is out of range")]
    AmountOutOfRange,
}

impl From<SplitError> for LedgerError {
    fn from(err: SplitError) -> Self {
        match err {
            SplitError::NoMembers => LedgerError::NoMembers,
            SplitError::UnknownPayer(member) => LedgerError::UnknownMember(member.to_string()),
            SplitError::Overflow => LedgerError::AmountOutOfRange,
        }
    }
}
