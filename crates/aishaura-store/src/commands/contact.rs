//! # Contact & Share Commands
//!
//! The WhatsApp affordances around the order flow: the receipt-share
//! button on the confirmation step, the floating contact button's badge
//! counter, and its persisted dismissal flag.

use aishaura_core::types::OrderReceipt;

use crate::Storefront;

impl Storefront {
    /// Builds the `wa.me` link for sharing a confirmed receipt with the
    /// business.
    pub fn receipt_share_link(&self, receipt: &OrderReceipt) -> String {
        let message = format!(
            "Hi! I've placed an order and would like to share the receipt.\n\n\
             Order ID: #{}\nAmount: {}\n\n\
             Please confirm receipt of my payment.",
            receipt.order_id, receipt.amount
        );
        self.contact_link(&message)
    }

    /// Builds a `wa.me` link carrying an arbitrary message to the
    /// business number, and clears the unread badge - the user is
    /// initiating contact, so there is nothing left to nudge about.
    pub fn contact_link(&self, message: &str) -> String {
        self.store.set_badge_count(0);
        format!(
            "https://wa.me/{}?text={}",
            self.config.whatsapp_number,
            urlencoding::encode(message)
        )
    }

    /// Current unread badge count for the floating contact button.
    pub fn whatsapp_badge(&self) -> u32 {
        self.store.badge_count()
    }

    /// Sets the unread badge count.
    pub fn set_whatsapp_badge(&self, count: u32) {
        self.store.set_badge_count(count);
    }

    /// Hides the floating contact button and remembers the choice.
    pub fn dismiss_contact_button(&self) {
        self.store.set_contact_dismissed(true);
    }

    /// Brings the floating contact button back.
    pub fn restore_contact_button(&self) {
        self.store.set_contact_dismissed(false);
    }

    /// Whether the floating contact button was dismissed.
    pub fn contact_button_dismissed(&self) -> bool {
        self.store.contact_dismissed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::testing::storefront_with;
    use aishaura_core::money::Money;
    use aishaura_core::types::OrderReceipt;

    #[test]
    fn test_receipt_share_link() {
        let (storefront, _view) = storefront_with("share", |_| {});
        let receipt = OrderReceipt {
            order_id: "AM-123".to_string(),
            amount: Money::from_paise(19950),
            phone: "9876543210".to_string(),
        };

        let link = storefront.receipt_share_link(&receipt);
        assert!(link.starts_with("https://wa.me/918073047946?text="));
        assert!(link.contains("AM-123"));
        // Message is percent-encoded, including the rupee amount
        assert!(link.contains(&urlencoding::encode("₹199.50").into_owned()));
    }

    #[test]
    fn test_initiating_contact_clears_badge() {
        let (storefront, _view) = storefront_with("badge", |_| {});

        storefront.set_whatsapp_badge(2);
        assert_eq!(storefront.whatsapp_badge(), 2);

        storefront.contact_link("Hi Aishaura, I have a question about my order.");
        assert_eq!(storefront.whatsapp_badge(), 0);
    }

    #[test]
    fn test_contact_dismissal_round_trip() {
        let (storefront, _view) = storefront_with("dismiss", |_| {});

        assert!(!storefront.contact_button_dismissed());
        storefront.dismiss_contact_button();
        assert!(storefront.contact_button_dismissed());
        storefront.restore_contact_button();
        assert!(!storefront.contact_button_dismissed());
    }
}
