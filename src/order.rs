// src/order.rs
//
// Order encoding and the handoff deep link. An order never touches storage:
// the encoder turns the answer record into a human-readable message and the
// caller gets back a wa.me link with the message pre-filled. Nothing is read
// back from the channel.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;

use crate::i18n::{messages, Language};
use crate::models::{Field, GameAccount, SellRequest, Service, VirtualNumber};

/// Characters left verbatim by `encodeURIComponent`.
const HANDOFF_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// `MAJAL-` plus six random digits. Not unique and never checked against
/// prior orders; no consumer may assume otherwise.
pub fn mint_order_id() -> String {
    let suffix: u32 = rand::rng().random_range(100_000..1_000_000);
    format!("MAJAL-{suffix}")
}

/// Required fields whose answer is missing or blank.
pub fn missing_required<'a>(
    service: &'a Service,
    answers: &HashMap<String, String>,
) -> Vec<&'a Field> {
    service
        .fields
        .iter()
        .filter(|f| {
            f.required
                && answers
                    .get(f.id)
                    .map_or(true, |v| v.trim().is_empty())
        })
        .collect()
}

/// Message lines follow the field schema's declaration order, never the
/// order the answers were entered in. Unanswered optional fields are skipped.
pub fn encode_order(
    service: &Service,
    answers: &HashMap<String, String>,
    lang: Language,
    order_id: &str,
) -> String {
    let msg = messages(lang);
    let mut out = String::new();
    out.push_str(msg.order_header);
    out.push('\n');
    out.push_str(&format!("{}: {}\n", msg.order_id_label, order_id));
    out.push_str(&format!("{}: {}\n", msg.order_service_label, service.title.get(lang)));
    out.push_str("-----------\n");
    for field in service.fields {
        if let Some(value) = answers.get(field.id) {
            if !value.is_empty() {
                out.push_str(&format!("{}: {}\n", field.label.get(lang), value));
            }
        }
    }
    out
}

pub fn encode_number_order(number: &VirtualNumber, app: &str, lang: Language) -> String {
    let msg = messages(lang);
    format!(
        "{}\n{}: {} ({})\n{}: {}\n{}: {}\n{}: {} {}",
        msg.number_order_header,
        msg.country_label,
        number.country.get(lang),
        number.flag,
        msg.code_label,
        number.code,
        msg.requested_app_label,
        app,
        msg.price_label,
        number.price,
        msg.currency,
    )
}

pub fn encode_account_purchase(account: &GameAccount, lang: Language) -> String {
    let msg = messages(lang);
    format!(
        "{} {} ({}: ACC-{})\n{}: {} {}\n{}: {}",
        msg.market_buy_intro,
        account.game,
        msg.order_id_label,
        account.id,
        msg.price_label,
        account.price,
        msg.currency,
        msg.level_label,
        account.level,
    )
}

pub fn encode_account_listing(listing: &SellRequest, lang: Language) -> String {
    let msg = messages(lang);
    let mut out = String::new();
    out.push_str(msg.sell_header);
    out.push('\n');
    out.push_str(&format!("{}: {}\n", msg.game_label, listing.game));
    out.push_str(&format!("{}: {}\n", msg.level_label, listing.level));
    out.push_str(&format!("{}: {}\n", msg.skins_label, listing.skins));
    if !listing.server.is_empty() {
        out.push_str(&format!("{}: {}\n", msg.server_label, listing.server));
    }
    if !listing.binding.is_empty() {
        out.push_str(&format!("{}: {}\n", msg.binding_label, listing.binding));
    }
    out.push_str(&format!("{}: {} {}\n", msg.price_label, listing.price, msg.currency));
    if !listing.description.is_empty() {
        out.push_str(&format!("{}: {}\n", msg.description_label, listing.description));
    }
    out
}

/// The Order Handoff Channel: a fixed messaging deep link parameterized only
/// by the configured phone number. Opening it is the caller's business; no
/// acknowledgment exists and none is awaited.
pub fn handoff_url(whatsapp_number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        whatsapp_number,
        utf8_percent_encode(message, HANDOFF_SET)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Localized;
    use crate::models::{Category, FieldType};

    static PHONE_FIELD: &[Field] = &[Field {
        id: "phone",
        label: Localized::new("هاتف", "Phone"),
        kind: FieldType::Text,
        options: &[],
        placeholder: None,
        required: true,
    }];

    static UNLOCK: Service = Service {
        id: "unlock-test",
        title: Localized::new("فك الحساب", "Unlock Account"),
        description: Localized::new("", ""),
        icon: "🔓",
        category: Category::Social,
        image: "",
        steps: &[],
        details: None,
        fields: PHONE_FIELD,
    };

    #[test]
    fn order_id_has_prefix_and_six_digits() {
        for _ in 0..32 {
            let id = mint_order_id();
            let suffix = id.strip_prefix("MAJAL-").expect("prefix");
            assert_eq!(suffix.len(), 6);
            assert!(suffix.chars().all(|c| c.is_ascii_digit()));
            assert_ne!(suffix.chars().next(), Some('0'));
        }
    }

    #[test]
    fn encoded_message_names_service_and_answer() {
        let mut answers = HashMap::new();
        answers.insert("phone".to_string(), "0501234567".to_string());
        let message = encode_order(&UNLOCK, &answers, Language::En, "MAJAL-123456");
        assert!(message.contains("Unlock Account"));
        assert!(message.contains("Phone: 0501234567"));
        assert!(message.contains("MAJAL-123456"));

        let url = handoff_url("966500000000", &message);
        assert!(url.starts_with("https://wa.me/966500000000?text="));
        assert!(url.contains("Phone%3A%200501234567"));
    }

    #[test]
    fn message_follows_schema_order_not_entry_order() {
        static TWO_FIELDS: &[Field] = &[
            Field {
                id: "first",
                label: Localized::new("أول", "First"),
                kind: FieldType::Text,
                options: &[],
                placeholder: None,
                required: false,
            },
            Field {
                id: "second",
                label: Localized::new("ثاني", "Second"),
                kind: FieldType::Text,
                options: &[],
                placeholder: None,
                required: false,
            },
        ];
        let service = Service { fields: TWO_FIELDS, ..UNLOCK };

        // Inserted in reverse of declaration order.
        let mut answers = HashMap::new();
        answers.insert("second".to_string(), "b".to_string());
        answers.insert("first".to_string(), "a".to_string());

        let message = encode_order(&service, &answers, Language::En, "MAJAL-111111");
        let first = message.find("First: a").expect("first line");
        let second = message.find("Second: b").expect("second line");
        assert!(first < second);
    }

    #[test]
    fn missing_required_blocks_blank_and_absent_answers() {
        let mut answers = HashMap::new();
        assert_eq!(missing_required(&UNLOCK, &answers).len(), 1);

        answers.insert("phone".to_string(), "   ".to_string());
        assert_eq!(missing_required(&UNLOCK, &answers).len(), 1);

        answers.insert("phone".to_string(), "0501234567".to_string());
        assert!(missing_required(&UNLOCK, &answers).is_empty());
    }

    #[test]
    fn handoff_encoding_covers_arabic_and_newlines() {
        let url = handoff_url("966500000000", "طلب جديد\nSAR 15");
        assert!(url.contains("%D8%B7%D9%84%D8%A8")); // "طلب"
        assert!(url.contains("%0A"));
        assert!(!url.contains('\n'));
        assert!(url.contains("%20"));
    }
}
