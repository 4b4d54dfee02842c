//! FAQ records and the one-shot loader that fetches them.
//!
//! - [`FaqRecord`] - a single question/answer pair as served by the backend
//! - [`loader`] - HTTP and file loading with size and timeout guards

mod loader;

pub use loader::{fetch_faqs, load_file, parse_records, LoadError, MAX_RESPONSE_SIZE};

use serde::{Deserialize, Serialize};

/// Identifier of a FAQ record, unique within one loaded list.
pub type FaqId = i64;

/// One question/answer pair.
///
/// Immutable once loaded. The backend names its fields `faqNo`, `faqCate`,
/// `faqTitle` and `faqContent`; both those and the short names are accepted.
///
/// `content` is HTML from a trusted source. It is displayed, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    #[serde(alias = "faqNo")]
    pub id: FaqId,
    #[serde(alias = "faqCate")]
    pub category: String,
    #[serde(alias = "faqTitle")]
    pub title: String,
    #[serde(alias = "faqContent")]
    pub content: String,
}

impl FaqRecord {
    pub fn new(
        id: FaqId,
        category: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category: category.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Case-insensitive substring match over title and content.
    ///
    /// `needle_lower` must already be lowercased; the caller lowers it once per
    /// search instead of once per record.
    pub fn matches_lowered(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_short_names() {
        let json = r#"{"id": 3, "category": "Buying", "title": "Refunds?", "content": "<p>Yes</p>"}"#;
        let record: FaqRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, FaqRecord::new(3, "Buying", "Refunds?", "<p>Yes</p>"));
    }

    #[test]
    fn test_deserialize_backend_names() {
        let json = r#"{"faqNo": 7, "faqCate": "구매", "faqTitle": "배송", "faqContent": "<b>3일</b>"}"#;
        let record: FaqRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.category, "구매");
        assert_eq!(record.title, "배송");
        assert_eq!(record.content, "<b>3일</b>");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"faqNo": 1, "faqCate": "Common", "faqTitle": "t", "faqContent": "c", "faqDate": "2024-01-01"}"#;
        assert!(serde_json::from_str::<FaqRecord>(json).is_ok());
    }

    #[test]
    fn test_matches_title_or_content_ignoring_case() {
        let record = FaqRecord::new(1, "Common", "How do I Reset my password?", "Use the <b>Account</b> page");
        assert!(record.matches_lowered("reset"));
        assert!(record.matches_lowered("account"));
        assert!(!record.matches_lowered("shipping"));
    }
}
