//! Checkout message composition
//!
//! Renders the cart into the WhatsApp order text and builds the deep link.
//! This module only does string construction; opening the link and
//! clearing the cart stay with the caller.

use shared::models::settings::{DEFAULT_CURRENCY, DEFAULT_RESTAURANT_NAME};
use shared::models::{CartItem, Settings};

/// Messaging endpoint base
const MESSAGING_HOST: &str = "https://wa.me";

/// A composed order: the human-readable text and the link that carries it
#[derive(Debug, Clone)]
pub struct CheckoutMessage {
    pub text: String,
    pub link: String,
}

/// Fixed 2-decimal rendering of minor currency units ("1299" -> "12.99").
///
/// Prices are integers end to end; this is the only place they meet a
/// decimal point, and only for display.
fn format_money(minor_units: i64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}

/// Build the order message text
///
/// ```text
/// *{restaurant} - New Order*
///
/// *Order Details:*
///
/// 1. *{item}*
///    Quantity: {qty}
///    Price: {currency}{line total}
///    Note: {note}            (only when a note exists)
/// ...
///
/// *Total: {currency}{subtotal}*
/// ```
pub fn compose_order_message(items: &[CartItem], settings: &Settings) -> String {
    let restaurant_name = if settings.restaurant_name.is_empty() {
        DEFAULT_RESTAURANT_NAME
    } else {
        &settings.restaurant_name
    };
    let currency = if settings.currency.is_empty() {
        DEFAULT_CURRENCY
    } else {
        &settings.currency
    };

    let mut message = format!("*{} - New Order*\n\n", restaurant_name);
    message.push_str("*Order Details:*\n");

    for (index, item) in items.iter().enumerate() {
        message.push_str(&format!("\n{}. *{}*\n", index + 1, item.menu_item.name));
        message.push_str(&format!("   Quantity: {}\n", item.quantity));
        message.push_str(&format!(
            "   Price: {}{}\n",
            currency,
            format_money(item.line_total())
        ));
        if let Some(note) = &item.note
            && !note.is_empty()
        {
            message.push_str(&format!("   Note: {}\n", note));
        }
    }

    let total: i64 = items.iter().map(CartItem::line_total).sum();
    message.push_str(&format!("\n*Total: {}{}*", currency, format_money(total)));

    message
}

/// Build the messaging deep link: `https://wa.me/<digits>?text=<encoded>`
///
/// The configured number may carry "+", spaces or dashes; the endpoint
/// wants digits only.
pub fn order_link(whatsapp_number: &str, message: &str) -> String {
    let digits: String = whatsapp_number
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    format!(
        "{}/{}?text={}",
        MESSAGING_HOST,
        digits,
        urlencoding::encode(message)
    )
}

/// Compose text and link in one step
pub fn compose(items: &[CartItem], settings: &Settings) -> CheckoutMessage {
    let text = compose_order_message(items, settings);
    let link = order_link(&settings.whatsapp_number, &text);
    CheckoutMessage { text, link }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::MenuItem;

    fn cart_item(name: &str, price: i64, quantity: u32, note: Option<&str>) -> CartItem {
        CartItem {
            menu_item: MenuItem {
                id: Some(format!("menu_item:{}", name.to_lowercase().replace(' ', "_"))),
                category_id: "category:mains".to_string(),
                name: name.to_string(),
                description: String::new(),
                price,
                image_url: None,
                is_available: true,
                is_hidden: false,
            },
            quantity,
            note: note.map(str::to_string),
        }
    }

    fn settings() -> Settings {
        Settings {
            restaurant_name: "Mini's & Twennies".to_string(),
            currency: "$".to_string(),
            whatsapp_number: "1234567890".to_string(),
            ..Settings::fallback()
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0), "0.00");
        assert_eq!(format_money(5), "0.05");
        assert_eq!(format_money(99), "0.99");
        assert_eq!(format_money(100), "1.00");
        assert_eq!(format_money(2598), "25.98");
        assert_eq!(format_money(3497), "34.97");
    }

    #[test]
    fn test_two_line_order_message() {
        let items = vec![
            cart_item("Margherita Pizza", 1299, 2, Some("Extra cheese please")),
            cart_item("Caesar Salad", 899, 1, None),
        ];

        let message = compose_order_message(&items, &settings());

        assert!(message.starts_with("*Mini's & Twennies - New Order*\n\n*Order Details:*\n"));
        assert!(message.contains("1. *Margherita Pizza*\n"));
        assert!(message.contains("   Quantity: 2\n"));
        assert!(message.contains("   Price: $25.98\n"));
        assert!(message.contains("   Note: Extra cheese please\n"));
        assert!(message.contains("2. *Caesar Salad*\n"));
        assert!(message.contains("   Quantity: 1\n"));
        assert!(message.contains("   Price: $8.99\n"));
        assert!(message.ends_with("\n*Total: $34.97*"));

        // The note line only exists for the first item
        assert_eq!(message.matches("Note:").count(), 1);
    }

    #[test]
    fn test_defaults_when_settings_unsaved() {
        let items = vec![cart_item("Pizza", 1000, 1, None)];
        let message = compose_order_message(&items, &Settings::fallback());

        assert!(message.starts_with("*Mini's & Twennies - New Order*"));
        assert!(message.contains("Price: $10.00"));
    }

    #[test]
    fn test_order_link_is_digits_only_and_encoded() {
        let link = order_link("+1 (234) 567-890", "*Order* & more\nline two");

        assert!(link.starts_with("https://wa.me/1234567890?text="));
        assert!(!link.contains('+'));
        let encoded = link.split_once("?text=").unwrap().1;
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('&'));
        assert!(encoded.contains("%20"));
        assert!(encoded.contains("%0A"));
        assert!(encoded.contains("%26"));
    }

    #[test]
    fn test_compose_wires_number_from_settings() {
        let items = vec![cart_item("Pizza", 1299, 1, None)];
        let composed = compose(&items, &settings());

        assert!(composed.link.starts_with("https://wa.me/1234567890?text="));
        assert!(composed.text.contains("1. *Pizza*"));
    }
}
