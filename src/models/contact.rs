use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A way to reach the portfolio owner (email, phone, location).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
    pub link: String,
}

impl ContactInfo {
    /// Web links open in a new tab; `mailto:`/`tel:` links do not.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// A column of links in the footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FooterLink {
    pub name: String,
    pub href: String,
    #[serde(default)]
    pub external: bool,
}

/// A message submitted through the contact form.
///
/// All four fields are required. Submission is simulated: nothing is sent or
/// stored, the server only waits and acknowledges.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactMessage {
    /// Names of required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}

/// Acknowledgement returned once a simulated submission completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_blank_fields_in_form_order() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "  ".to_string(),
            subject: String::new(),
            message: "Hello".to_string(),
        };
        assert_eq!(message.missing_fields(), vec!["email", "subject"]);
    }

    #[test]
    fn complete_message_has_no_missing_fields() {
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        };
        assert!(message.missing_fields().is_empty());
    }

    #[test]
    fn only_web_links_are_external() {
        let web = ContactInfo {
            label: "Location".to_string(),
            value: "Somewhere".to_string(),
            link: "https://maps.example.com".to_string(),
        };
        let mail = ContactInfo {
            label: "Email".to_string(),
            value: "a@b.c".to_string(),
            link: "mailto:a@b.c".to_string(),
        };
        assert!(web.is_external());
        assert!(!mail.is_external());
    }
}
