use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String,          // Unique ID, assigned by the server
    pub product_id: String,  // Product the review is attached to
    pub customer_id: String, // Customer who posted it
    pub rating: u8,          // 1-5
    pub comment: String,     // Free-text body
    // Reviewer name denormalized at read time; absent when the customer
    // record is gone.
    #[serde(default)]
    pub customer_name: Option<String>,
    // Legacy reviewer fields still seen on older payloads.
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Review {
    /// Display name for the reviewer: customer name, then the legacy
    /// username, then "User #id". Empty strings count as absent.
    pub fn reviewer_label(&self) -> String {
        if let Some(name) = self.customer_name.as_deref().filter(|n| !n.is_empty()) {
            name.to_string()
        } else if let Some(name) = self.username.as_deref().filter(|n| !n.is_empty()) {
            name.to_string()
        } else {
            format!("User #{}", self.user_id.unwrap_or_default())
        }
    }
}

/// Fields for posting a review. Reviews are immutable once posted; there is
/// no update payload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub product_id: String,
    pub customer_id: String,
    pub rating: u8,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> Review {
        Review {
            id: "r1".into(),
            product_id: "p1".into(),
            customer_id: "c1".into(),
            rating: 4,
            comment: "Solid".into(),
            customer_name: None,
            username: None,
            user_id: None,
        }
    }

    #[test]
    fn reviewer_label_prefers_customer_name() {
        let mut r = review();
        r.customer_name = Some("Ada Lovelace".into());
        r.username = Some("ada".into());
        r.user_id = Some(7);
        assert_eq!(r.reviewer_label(), "Ada Lovelace");
    }

    #[test]
    fn reviewer_label_falls_back_to_username() {
        let mut r = review();
        r.username = Some("ada".into());
        r.user_id = Some(7);
        assert_eq!(r.reviewer_label(), "ada");
    }

    #[test]
    fn reviewer_label_treats_empty_strings_as_absent() {
        let mut r = review();
        r.customer_name = Some(String::new());
        r.username = Some(String::new());
        r.user_id = Some(7);
        assert_eq!(r.reviewer_label(), "User #7");
    }

    #[test]
    fn reviewer_label_degenerate_case_renders_user_zero() {
        assert_eq!(review().reviewer_label(), "User #0");
    }

    #[test]
    fn legacy_fields_default_when_missing_from_payload() {
        let json = r#"{
            "id": "r1",
            "product_id": "p1",
            "customer_id": "c1",
            "rating": 5,
            "comment": "Great",
            "customer_name": "Ada Lovelace"
        }"#;
        let parsed: Review = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.customer_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(parsed.username, None);
        assert_eq!(parsed.user_id, None);
    }
}
