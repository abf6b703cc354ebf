use crate::{DEFAULT_CURRENCY, format_amount};
use evensplit_domain::Transfer;
use evensplit_i18n as i18n;
use std::fmt::Write as _;

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(transfers: &[Transfer]) -> String {
        Self::render_with_currency(transfers, DEFAULT_CURRENCY)
    }

    pub fn render_with_currency(transfers: &[Transfer], currency: &str) -> String {
        if transfers.is_empty() {
            return format!("{}\n", i18n::EVERYONE_SETTLED);
        }

        let mut reply = String::with_capacity(transfers.len() * 32);
        for transfer in transfers {
            let _ = writeln!(
                &mut reply,
                "{}",
                i18n::pays(
                    &transfer.from,
                    &transfer.to,
                    format_amount(transfer.amount, currency)
                )
            );
        }
        reply
    }
}
