use crate::{DEFAULT_CURRENCY, format_amount};
use evensplit_application::PersonBalance;
use evensplit_i18n as i18n;
use std::fmt::Write as _;

pub struct BalancesPresenter;

impl BalancesPresenter {
    pub fn render(balances: &[PersonBalance]) -> String {
        Self::render_with_currency(balances, DEFAULT_CURRENCY)
    }

    /// One line per member: what they should receive, what they owe, or
    /// that they are settled.
    pub fn render_with_currency(balances: &[PersonBalance], currency: &str) -> String {
        let mut reply = String::with_capacity(balances.len() * 32);

        for person in balances {
            let line = if person.balance.is_negligible() {
                i18n::is_settled(&person.id)
            } else if person.balance.is_negative() {
                i18n::owes(&person.id, format_amount(-person.balance, currency))
            } else {
                i18n::should_receive(&person.id, format_amount(person.balance, currency))
            };
            let _ = writeln!(&mut reply, "{line}");
        }

        reply
    }
}

#[cfg(all(test, not(feature = "ja")))]
mod tests {
    use super::*;
    use evensplit_domain::{MemberId, Money};

    fn person(name: &str, balance: Money) -> PersonBalance {
        PersonBalance {
            id: MemberId::from(name),
            balance,
        }
    }

    #[test]
    fn render_describes_each_member() {
        let balances = [
            person("Alice", Money::from_i64(20)),
            person("Bob", Money::from_i64(-10)),
            person("Carol", Money::ZERO),
        ];

        let output = BalancesPresenter::render(&balances);

        assert_eq!(
            output,
            "Alice should receive: $20.00\nBob owes: $10.00\nCarol is settled.\n"
        );
    }

    #[test]
    fn render_treats_dust_as_settled() {
        let balances = [person("Alice", Money::new(1, 20))];

        assert_eq!(BalancesPresenter::render(&balances), "Alice is settled.\n");
    }

    #[test]
    fn render_uses_configured_currency() {
        let balances = [person("Alice", Money::new(-750, 2))];

        let output = BalancesPresenter::render_with_currency(&balances, "£");

        assert_eq!(output, "Alice owes: £7.50\n");
    }
}
