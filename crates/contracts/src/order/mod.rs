//! Order request types, form validation and the submit timestamp.

use chrono::{DateTime, FixedOffset, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The store clock is fixed to UTC+7 regardless of the customer's device
/// timezone, so timestamps in the order sheet line up with the shop's day.
static STORE_TZ: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::east_opt(7 * 3600).expect("UTC+7 is a valid offset"));

/// Wire shape of one order submission. Built at submit time, sent once,
/// discarded after the response is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub product_name: String,
    pub size: String,
    /// Unit price at the moment of ordering (the discounted price). `None`
    /// when the sheet published a non-numeric price.
    pub price: Option<f64>,
    pub customer_name: String,
    pub phone: String,
    pub contact_by_telegram: bool,
    pub address: String,
    pub quantity: u32,
    pub notes: String,
    /// Client-local wall clock in the store timezone, "DD.MM.YYYY HH:MM".
    pub submitted_at: String,
}

/// What the customer types into the order form. Lives in a signal on the
/// frontend; validation and conversion stay here so they are host-testable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub customer_name: String,
    pub phone: String,
    pub contact_by_telegram: bool,
    pub address: String,
    pub quantity: u32,
    pub notes: String,
}

impl OrderForm {
    /// Checks required fields. Returns the first problem as a user-facing
    /// message; no request may be sent while this fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Please enter your name".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Please enter your phone number".into());
        }
        if self.address.trim().is_empty() {
            return Err("Please enter your delivery address".into());
        }
        if !self.contact_by_telegram {
            return Err("Please confirm we may contact you on Telegram".into());
        }
        Ok(())
    }

    /// Build the request for a validated form.
    pub fn to_request(
        &self,
        product_name: &str,
        size: &str,
        price: Option<f64>,
        now: DateTime<Utc>,
    ) -> OrderRequest {
        OrderRequest {
            product_name: product_name.to_string(),
            size: size.to_string(),
            price,
            customer_name: self.customer_name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            contact_by_telegram: self.contact_by_telegram,
            address: self.address.trim().to_string(),
            quantity: self.quantity.max(1),
            notes: self.notes.trim().to_string(),
            submitted_at: order_timestamp(now),
        }
    }
}

/// Format a UTC instant as the store-local, 24-hour order timestamp.
pub fn order_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&*STORE_TZ)
        .format("%d.%m.%Y %H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_form() -> OrderForm {
        OrderForm {
            customer_name: "Jane".to_string(),
            phone: "012345".to_string(),
            contact_by_telegram: true,
            address: "Street 1".to_string(),
            quantity: 1,
            notes: String::new(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        let mut f = valid_form();
        f.customer_name = "  ".to_string();
        assert!(f.validate().is_err());

        let mut f = valid_form();
        f.phone = String::new();
        assert!(f.validate().is_err());

        let mut f = valid_form();
        f.address = String::new();
        assert!(f.validate().is_err());

        let mut f = valid_form();
        f.contact_by_telegram = false;
        assert!(f.validate().is_err());
    }

    #[test]
    fn timestamp_is_store_local_24h() {
        // 18:05 UTC = 01:05 next day at UTC+7.
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 18, 5, 0).unwrap();
        assert_eq!(order_timestamp(now), "16.03.2024 01:05");
    }

    #[test]
    fn request_carries_selection_and_trimmed_fields() {
        let mut form = valid_form();
        form.customer_name = " Jane ".to_string();
        form.quantity = 0;
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap();
        let req = form.to_request("Classic T-Shirt", "M", Some(10.0), now);
        assert_eq!(req.product_name, "Classic T-Shirt");
        assert_eq!(req.size, "M");
        assert_eq!(req.customer_name, "Jane");
        assert_eq!(req.quantity, 1);
        assert_eq!(req.submitted_at, "15.03.2024 13:00");
    }

    #[test]
    fn request_serializes_with_camel_case_keys() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 6, 0, 0).unwrap();
        let req = valid_form().to_request("Cap", "One Size", Some(5.0), now);
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("productName").is_some());
        assert!(json.get("contactByTelegram").is_some());
        assert!(json.get("submittedAt").is_some());
    }
}
