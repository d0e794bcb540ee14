//! Vault effect handlers.

use pwx_core::api::{ApiClient, EntryDraft, EntryPatch, fallback};

use crate::events::{UiEvent, VaultUiEvent};

/// Fetches the full entry list.
///
/// Pure async function - runtime spawns and sends result to inbox.
pub async fn fetch_entries(base_url: String, token: String) -> UiEvent {
    let client = ApiClient::with_token(base_url, token);
    let result = client.list_entries().await.map_err(|err| {
        tracing::warn!(error = %err, "fetch entries failed");
        err.user_message(fallback::FETCH)
    });
    UiEvent::Vault(VaultUiEvent::FetchFinished { result })
}

/// Creates a new entry; the result carries the server's canonical copy.
pub async fn add_entry(base_url: String, token: String, draft: EntryDraft) -> UiEvent {
    let client = ApiClient::with_token(base_url, token);
    let result = client.add_entry(&draft).await.map_err(|err| {
        tracing::warn!(error = %err, "add entry failed");
        err.user_message(fallback::SAVE)
    });
    UiEvent::Vault(VaultUiEvent::AddFinished { result })
}

/// Sends the changed subset of an entry's fields.
pub async fn update_entry(base_url: String, token: String, id: i64, patch: EntryPatch) -> UiEvent {
    let client = ApiClient::with_token(base_url, token);
    let result = client.update_entry(id, &patch).await.map_err(|err| {
        tracing::warn!(error = %err, "update entry failed");
        err.user_message(fallback::SAVE)
    });
    UiEvent::Vault(VaultUiEvent::UpdateFinished { result })
}

/// Deletes an entry. The result carries the id the client asked to delete;
/// the response body is ignored.
pub async fn delete_entry(base_url: String, token: String, id: i64) -> UiEvent {
    let client = ApiClient::with_token(base_url, token);
    let result = client.delete_entry(id).await.map(|()| id).map_err(|err| {
        tracing::warn!(error = %err, "delete entry failed");
        err.user_message(fallback::DELETE)
    });
    UiEvent::Vault(VaultUiEvent::DeleteFinished { result })
}
