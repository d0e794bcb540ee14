//! Credential endpoints and their wire types.
//!
//! The service uses camelCase field names (`hashPass`, `isLeaked`); the
//! serde renames keep the Rust side snake_case.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult, decode, status_error};

/// A stored credential as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordEntry {
    pub id: i64,
    pub host: String,
    pub login: String,
    pub hash_pass: String,
    /// Whether the service flagged this credential as leaked.
    /// Older deployments omit the field.
    #[serde(default)]
    pub is_leaked: bool,
}

/// Body of an add request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub host: String,
    pub login: String,
    pub hash_pass: String,
}

/// Body of an update request. Only set fields are serialized, so the server
/// touches nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_pass: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_leaked: Option<bool>,
}

impl EntryPatch {
    /// True when no field is set and there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.login.is_none()
            && self.hash_pass.is_none()
            && self.is_leaked.is_none()
    }
}

impl ApiClient {
    /// Fetches every entry. The service routes the collection with a
    /// trailing slash.
    pub async fn list_entries(&self) -> ApiResult<Vec<PasswordEntry>> {
        let response = self.request(Method::GET, "/user-pass/").send().await?;
        decode(response).await
    }

    /// Creates an entry and returns the server's canonical copy.
    pub async fn add_entry(&self, draft: &EntryDraft) -> ApiResult<PasswordEntry> {
        let response = self
            .request(Method::POST, "/user-pass")
            .json(draft)
            .send()
            .await?;
        decode(response).await
    }

    /// Updates an entry, sending only the fields the patch carries.
    pub async fn update_entry(&self, id: i64, patch: &EntryPatch) -> ApiResult<PasswordEntry> {
        let response = self
            .request(Method::PUT, &format!("/user-pass/{id}"))
            .json(patch)
            .send()
            .await?;
        decode(response).await
    }

    /// Deletes an entry. The response body is ignored.
    pub async fn delete_entry(&self, id: i64) -> ApiResult<()> {
        let response = self
            .request(Method::DELETE, &format!("/user-pass/{id}"))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Entries deserialize from the service's camelCase wire names.
    #[test]
    fn test_entry_deserializes_camel_case() {
        let json = r#"{
            "id": 3,
            "host": "example.com",
            "login": "alice",
            "hashPass": "s3cret",
            "isLeaked": true
        }"#;

        let entry: PasswordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 3);
        assert_eq!(entry.host, "example.com");
        assert_eq!(entry.login, "alice");
        assert_eq!(entry.hash_pass, "s3cret");
        assert!(entry.is_leaked);
    }

    /// A missing `isLeaked` defaults to false.
    #[test]
    fn test_entry_is_leaked_defaults_to_false() {
        let json = r#"{"id": 1, "host": "a", "login": "b", "hashPass": "c"}"#;

        let entry: PasswordEntry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_leaked);
    }

    /// A draft serializes with the wire's camelCase password field.
    #[test]
    fn test_draft_serializes_camel_case() {
        let draft = EntryDraft {
            host: "example.com".to_string(),
            login: "alice".to_string(),
            hash_pass: "s3cret".to_string(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "host": "example.com",
                "login": "alice",
                "hashPass": "s3cret"
            })
        );
    }

    /// A patch serializes only the fields that are set.
    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = EntryPatch {
            host: Some("new.example.com".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({"host": "new.example.com"}));
    }

    /// An all-unset patch serializes to an empty object and knows it
    /// carries nothing.
    #[test]
    fn test_empty_patch() {
        let patch = EntryPatch::default();

        assert!(patch.is_empty());
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            serde_json::json!({})
        );
    }

    /// Any set field makes the patch non-empty.
    #[test]
    fn test_patch_with_leak_flag_is_not_empty() {
        let patch = EntryPatch {
            is_leaked: Some(false),
            ..Default::default()
        };

        assert!(!patch.is_empty());
    }
}
