use evensplit_application::LedgerError;
use evensplit_i18n as i18n;
use evensplit_parser::ParseError;

pub fn format_ledger_error(error: &LedgerError) -> String {
    match error {
        LedgerError::NoMembers => i18n::NO_MEMBERS_ENTERED.to_string(),
        LedgerError::DuplicateMember(member) => i18n::duplicate_member(member),
        LedgerError::UnknownMember(name) => i18n::unknown_member(name),
        LedgerError::InvalidAmount(_) => i18n::INVALID_AMOUNT.to_string(),
        LedgerError::NonPositiveAmount(_) => i18n::NON_POSITIVE_AMOUNT.to_string(),
        LedgerError::AmountOutOfRange => i18n::AMOUNT_OUT_OF_RANGE.to_string(),
    }
}

pub fn format_parse_error(error: &ParseError) -> String {
    match error {
        ParseError::EmptyMemberList => i18n::EMPTY_MEMBER_LIST.to_string(),
        ParseError::UnknownCommand { word, .. } => i18n::unknown_command(word),
        ParseError::SyntaxError { line, detail } => i18n::syntax_error(*line, detail),
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use evensplit_domain::{MemberId, Money, MoneyParseError};
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount(MoneyParseError::NotANumber("ten".to_string())),
        "Please enter a valid numeric amount."
    )]
    #[case::unknown_member(
        LedgerError::UnknownMember("Dave".to_string()),
        "'Dave' is not a member of this group"
    )]
    #[case::duplicate(
        LedgerError::DuplicateMember(MemberId::from("Bob")),
        "Member 'Bob' is listed more than once"
    )]
    #[case::non_positive(
        LedgerError::NonPositiveAmount(Money::from_i64(-1)),
        "The amount must be greater than zero."
    )]
    #[case::no_members(LedgerError::NoMembers, "No members entered. Exiting.")]
    fn format_ledger_error_cases(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(format_ledger_error(&error), expected);
    }

    #[rstest]
    #[case::syntax(
        ParseError::SyntaxError {
            line: 3,
            detail: "usage: add <payer> <amount> [description]".to_string(),
        },
        "Line 3: Syntax error - usage: add <payer> <amount> [description]"
    )]
    #[case::unknown(
        ParseError::UnknownCommand {
            word: "pay".to_string(),
            line: 1,
        },
        "Unknown command 'pay'. Type `help` for a list of commands."
    )]
    #[case::empty(ParseError::EmptyMemberList, "The member list is empty.")]
    fn format_parse_error_cases(#[case] error: ParseError, #[case] expected: &str) {
        assert_eq!(format_parse_error(&error), expected);
    }
}
