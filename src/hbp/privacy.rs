use crate::models::{Client, Transaction};
use crate::Money;

use std::borrow::Cow;

pub const NAME_SUFFIX: &str = "***";
pub const PHONE_PREFIX: &str = "******";
pub const AMOUNT_PLACEHOLDER: &str = "••••••";
pub const EMAIL_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskKind {
    Name,
    Phone,
    Amount,
    Email,
}

/// Obfuscates a value for display. Never leaks more than the first character of
/// a name or the last four digits of a phone number.
pub fn mask(value: &str, kind: MaskKind) -> String {
    return match kind {
        MaskKind::Name => match value.trim().chars().next() {
            Some(first) => format!("{first}{NAME_SUFFIX}"),
            None => "Unknown".to_string(),
        },
        MaskKind::Phone => {
            let digits: Vec<char> = value.chars().filter(char::is_ascii_digit).collect();

            if digits.is_empty() {
                return "N/A".to_string();
            }

            let last_four: String = digits[digits.len().saturating_sub(4)..].iter().collect();
            format!("{PHONE_PREFIX}{last_four}")
        }
        MaskKind::Amount => AMOUNT_PLACEHOLDER.to_string(),
        MaskKind::Email => EMAIL_PLACEHOLDER.to_string(),
    };
}

/// The view's privacy toggle. It only ever selects a projection; records are never touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrivacyMode {
    #[default]
    Visible,
    Masked,
}

impl PrivacyMode {
    pub fn from_flag(masked: bool) -> Self {
        if masked {
            return Self::Masked;
        }

        return Self::Visible;
    }

    pub fn toggle(self) -> Self {
        return match self {
            Self::Visible => Self::Masked,
            Self::Masked => Self::Visible,
        };
    }

    pub fn is_masked(&self) -> bool {
        return *self == Self::Masked;
    }

    pub fn show<'a>(&self, value: &'a str, kind: MaskKind) -> Cow<'a, str> {
        return match self {
            Self::Visible => Cow::Borrowed(value),
            Self::Masked => Cow::Owned(mask(value, kind)),
        };
    }

    pub fn show_amount(&self, amount: &Money) -> String {
        return match self {
            Self::Visible => amount.format_fcfa(),
            Self::Masked => mask("", MaskKind::Amount),
        };
    }

    pub fn transaction<'a>(&self, tx: &'a Transaction) -> DisplayedTransaction<'a> {
        return DisplayedTransaction {
            tx,
            client_name: self.show(&tx.client_name, MaskKind::Name),
            payer_phone: self.show(&tx.payer_phone, MaskKind::Phone),
            receiver_phone: self.show(&tx.receiver_phone, MaskKind::Phone),
            amount: self.show_amount(&tx.amount),
        };
    }

    pub fn client<'a>(&self, client: &'a Client) -> DisplayedClient<'a> {
        return DisplayedClient {
            client,
            name: self.show(&client.full_name, MaskKind::Name),
            phone: self.show(&client.phone, MaskKind::Phone),
            email: self.show(&client.email, MaskKind::Email),
            balance: self.show_amount(&client.balance),
        };
    }
}

/// Read-only projection of a transaction for one privacy mode
#[derive(Debug)]
pub struct DisplayedTransaction<'a> {
    pub tx: &'a Transaction,
    pub client_name: Cow<'a, str>,
    pub payer_phone: Cow<'a, str>,
    pub receiver_phone: Cow<'a, str>,
    pub amount: String,
}

/// Read-only projection of a client for one privacy mode
#[derive(Debug)]
pub struct DisplayedClient<'a> {
    pub client: &'a Client,
    pub name: Cow<'a, str>,
    pub phone: Cow<'a, str>,
    pub email: Cow<'a, str>,
    pub balance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ids::ClientId;
    use crate::models::ClientStatus;

    fn build_client() -> Client {
        Client {
            id: ClientId("C-7".to_string()),
            full_name: "Ngono José".to_string(),
            phone: "695851906".to_string(),
            email: "jose@example.cm".to_string(),
            balance: Money::from(15000),
            status: ClientStatus::Active,
            registered_at: None,
        }
    }

    #[test]
    fn mask_name() {
        assert_eq!(mask("Ngono José", MaskKind::Name), "N***");
        assert_eq!(mask("Élodie", MaskKind::Name), "É***");
        assert_eq!(mask("", MaskKind::Name), "Unknown");
    }

    #[test]
    fn mask_phone() {
        assert_eq!(mask("695851906", MaskKind::Phone), "******1906");
        assert_eq!(mask("+237 695 85 19 06", MaskKind::Phone), "******1906");
        assert_eq!(mask("12", MaskKind::Phone), "******12");
        assert_eq!(mask("N/A", MaskKind::Phone), "N/A");
    }

    #[test]
    fn mask_amount_leaks_no_digits() {
        let masked = mask("1200", MaskKind::Amount);

        assert_eq!(masked, AMOUNT_PLACEHOLDER);
        assert!(!masked.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn toggle_twice_shows_raw_values_again() {
        let client = build_client();
        let before = client.clone();

        let mode = PrivacyMode::Visible;
        let masked = mode.toggle().client(&client);
        assert_eq!(masked.name, "N***");
        assert_eq!(masked.phone, "******1906");
        assert_eq!(masked.email, "-");
        assert_eq!(masked.balance, AMOUNT_PLACEHOLDER);

        let shown = mode.toggle().toggle().client(&client);
        assert_eq!(shown.name, "Ngono José");
        assert_eq!(shown.phone, "695851906");
        assert_eq!(shown.email, "jose@example.cm");
        assert_eq!(shown.balance, "15 000 FCFA");

        assert_eq!(client, before);
    }

    #[test]
    fn visible_mode_borrows() {
        let shown = PrivacyMode::Visible.show("abc", MaskKind::Name);

        assert!(matches!(shown, Cow::Borrowed("abc")));
    }

    #[test]
    fn from_flag() {
        assert!(PrivacyMode::from_flag(true).is_masked());
        assert!(!PrivacyMode::from_flag(false).is_masked());
    }
}
