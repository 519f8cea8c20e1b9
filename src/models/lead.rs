//! Best-effort contact extraction from free conversation text.
//!
//! The patterns are deliberately loose: `city` matches any "in <words>" and
//! `name` runs greedily until the first non-letter. The result is a soft
//! signal for a human follow-up, not structured data.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use super::chat::ConversationRequest;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)name is ([a-zA-Z ]+)").expect("valid name pattern"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\+?[0-9][0-9\s\-]{7,})").expect("valid phone pattern"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}").expect("valid email pattern"));
static CITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)in ([a-zA-Z ]+)").expect("valid city pattern"));

#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Lead {
    pub issue: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
}

impl Lead {
    pub fn from_conversation(conversation: &ConversationRequest) -> Self {
        Self::extract(conversation.joined_text())
    }

    pub fn extract(text: String) -> Self {
        let name = capture_group(&NAME_RE, &text);
        let phone = capture_group(&PHONE_RE, &text);
        let email = EMAIL_RE
            .find(&text)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let city = capture_group(&CITY_RE, &text);
        Self { issue: text, name, phone, email, city }
    }

    /// A lead is worth forwarding once there is some way to reach the person.
    pub fn has_contact(&self) -> bool {
        !self.phone.is_empty() || !self.email.is_empty()
    }
}

fn capture_group(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_email_and_city() {
        let lead = Lead::extract("my name is Jane and I live in Burnaby, email jane@example.com".into());
        assert!(lead.name.starts_with("Jane"));
        assert_eq!(lead.name, "Jane and I live in Burnaby");
        assert_eq!(lead.email, "jane@example.com");
        assert_eq!(lead.city, "Burnaby");
        assert_eq!(lead.phone, "");
        assert!(lead.has_contact());
    }

    #[test]
    fn issue_is_the_full_text() {
        let text = "heat pump makes a grinding noise";
        assert_eq!(Lead::extract(text.into()).issue, text);
    }

    #[test]
    fn extracts_phone_numbers() {
        assert_eq!(Lead::extract("call me at 604-555-0199 please".into()).phone, "604-555-0199");
        assert_eq!(Lead::extract("reach me on +1 604 555 0199".into()).phone, "+1 604 555 0199");
        assert_eq!(Lead::extract("number 6045550199.".into()).phone, "6045550199");
    }

    #[test]
    fn short_digit_runs_are_not_phones() {
        let lead = Lead::extract("the unit is 12 years old and 3 meters away".into());
        assert_eq!(lead.phone, "");
        assert!(!lead.has_contact());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lead = Lead::extract("My NAME IS Bob. Write to BOB@Example.COM".into());
        assert_eq!(lead.name, "Bob");
        assert_eq!(lead.email, "BOB@Example.COM");
    }

    #[test]
    fn city_pattern_is_loose() {
        // "interested in heating" reads as a city; accepted false positive.
        let lead = Lead::extract("I am interested in heating".into());
        assert_eq!(lead.city, "heating");
    }

    #[test]
    fn nothing_found_yields_empty_fields() {
        let lead = Lead::extract("hello there".into());
        assert_eq!(
            lead,
            Lead { issue: "hello there".into(), ..Lead::default() }
        );
    }

    #[test]
    fn serializes_with_all_fields() {
        let lead = Lead::extract("email a@b.io".into());
        let json = serde_json::to_value(&lead).unwrap();
        for key in ["issue", "name", "phone", "email", "city"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
