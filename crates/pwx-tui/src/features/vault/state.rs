//! Vault state container.
//!
//! Holds the password list plus its request status. Mutations only happen
//! through the `apply_*` methods when a confirmed result arrives; optimistic
//! updates are deliberately absent.

use pwx_core::api::PasswordEntry;

use crate::effects::UiEffect;

/// State for the password list screen.
#[derive(Debug, Default)]
pub struct VaultSlice {
    pub entries: Vec<PasswordEntry>,
    pub loading: bool,
    pub error: Option<String>,
    /// Index of the highlighted row within `entries`.
    pub selected: usize,
    /// First visible row of the scroll window.
    pub offset: usize,
}

impl VaultSlice {
    /// Marks the fetch as in flight and returns the effect that runs it.
    pub fn start_fetch(&mut self) -> UiEffect {
        self.loading = true;
        self.error = None;
        UiEffect::FetchEntries
    }

    /// Marks a mutating request (add, update, delete) as in flight.
    pub fn start_operation(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn selected_entry(&self) -> Option<&PasswordEntry> {
        self.entries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Scrolls the window so the selected row stays visible in `rows` lines.
    pub fn ensure_visible(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected + 1 - rows;
        }
        let max_offset = self.entries.len().saturating_sub(rows);
        self.offset = self.offset.min(max_offset);
    }

    /// Replaces the list wholesale with the server copy. A failed fetch
    /// keeps the stale entries and only stores the message.
    pub fn apply_fetch(&mut self, result: Result<Vec<PasswordEntry>, String>) {
        self.loading = false;
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
                self.clamp_selection();
            }
            Err(msg) => self.error = Some(msg),
        }
    }

    /// Appends the confirmed entry returned by the server.
    pub fn apply_add(&mut self, result: Result<PasswordEntry, String>) {
        self.loading = false;
        match result {
            Ok(entry) => {
                self.entries.push(entry);
                self.error = None;
            }
            Err(msg) => self.error = Some(msg),
        }
    }

    /// Replaces the matching entry in place; an unknown id changes nothing.
    pub fn apply_update(&mut self, result: Result<PasswordEntry, String>) {
        self.loading = false;
        match result {
            Ok(entry) => {
                if let Some(pos) = self.entries.iter().position(|e| e.id == entry.id) {
                    self.entries[pos] = entry;
                }
                self.error = None;
            }
            Err(msg) => self.error = Some(msg),
        }
    }

    /// Removes at most one entry by id.
    pub fn apply_delete(&mut self, result: Result<i64, String>) {
        self.loading = false;
        match result {
            Ok(id) => {
                if let Some(pos) = self.entries.iter().position(|e| e.id == id) {
                    self.entries.remove(pos);
                }
                self.error = None;
                self.clamp_selection();
            }
            Err(msg) => self.error = Some(msg),
        }
    }

    fn clamp_selection(&mut self) {
        if self.entries.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.entries.len() {
            self.selected = self.entries.len() - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn entry(id: i64, host: &str) -> PasswordEntry {
        PasswordEntry {
            id,
            host: host.to_string(),
            login: "user".to_string(),
            hash_pass: "secret".to_string(),
            is_leaked: false,
        }
    }

    /// A successful fetch replaces the list wholesale, including rows the
    /// server no longer returns.
    #[test]
    fn test_fetch_replaces_wholesale() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "old.ru"), entry(2, "gone.ru")];
        vault.selected = 1;
        vault.loading = true;

        vault.apply_fetch(Ok(vec![entry(3, "new.ru")]));

        assert!(!vault.loading);
        assert_eq!(vault.entries.len(), 1);
        assert_eq!(vault.entries[0].id, 3);
        assert_eq!(vault.selected, 0);
        assert!(vault.error.is_none());
    }

    /// A failed fetch keeps the stale entries and stores the message.
    #[test]
    fn test_fetch_failure_keeps_stale_entries() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "kept.ru")];
        vault.loading = true;

        vault.apply_fetch(Err("Ошибка загрузки паролей".to_string()));

        assert!(!vault.loading);
        assert_eq!(vault.entries.len(), 1);
        assert_eq!(vault.error.as_deref(), Some("Ошибка загрузки паролей"));
    }

    /// A confirmed add appends exactly one row.
    #[test]
    fn test_add_appends_once() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "a.ru")];

        vault.apply_add(Ok(entry(2, "b.ru")));

        assert_eq!(vault.entries.len(), 2);
        assert_eq!(vault.entries[1].id, 2);
    }

    /// An update replaces the row in place without reordering.
    #[test]
    fn test_update_replaces_in_place() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "a.ru"), entry(2, "b.ru"), entry(3, "c.ru")];

        let mut changed = entry(2, "renamed.ru");
        changed.login = "other".to_string();
        vault.apply_update(Ok(changed));

        assert_eq!(vault.entries[1].host, "renamed.ru");
        assert_eq!(vault.entries[1].login, "other");
        assert_eq!(vault.entries[0].id, 1);
        assert_eq!(vault.entries[2].id, 3);
    }

    /// An update whose id is not in the list is a silent no-op.
    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "a.ru")];

        vault.apply_update(Ok(entry(99, "ghost.ru")));

        assert_eq!(vault.entries.len(), 1);
        assert_eq!(vault.entries[0].host, "a.ru");
        assert!(vault.error.is_none());
    }

    /// A delete removes at most one row; unknown ids remove nothing.
    #[test]
    fn test_delete_removes_at_most_one() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "a.ru"), entry(2, "b.ru")];
        vault.selected = 1;

        vault.apply_delete(Ok(2));
        assert_eq!(vault.entries.len(), 1);
        assert_eq!(vault.selected, 0);

        vault.apply_delete(Ok(2));
        assert_eq!(vault.entries.len(), 1);
    }

    /// `start_fetch` flips the loading flag and clears a previous error.
    #[test]
    fn test_start_fetch_clears_error() {
        let mut vault = VaultSlice::default();
        vault.error = Some("старая ошибка".to_string());

        let effect = vault.start_fetch();

        assert!(vault.loading);
        assert!(vault.error.is_none());
        assert!(matches!(effect, UiEffect::FetchEntries));
    }

    /// Selection movement stops at both ends of the list.
    #[test]
    fn test_selection_clamped_to_list() {
        let mut vault = VaultSlice::default();
        vault.entries = vec![entry(1, "a.ru"), entry(2, "b.ru")];

        vault.select_prev();
        assert_eq!(vault.selected, 0);

        vault.select_next();
        vault.select_next();
        assert_eq!(vault.selected, 1);
    }

    /// The scroll window follows the selection in both directions.
    #[test]
    fn test_ensure_visible_scrolls_window() {
        let mut vault = VaultSlice::default();
        vault.entries = (0..10).map(|i| entry(i, "h.ru")).collect();

        vault.selected = 7;
        vault.ensure_visible(3);
        assert_eq!(vault.offset, 5);

        vault.selected = 2;
        vault.ensure_visible(3);
        assert_eq!(vault.offset, 2);
    }

    /// Shrinking the list pulls the offset back into range.
    #[test]
    fn test_ensure_visible_clamps_after_shrink() {
        let mut vault = VaultSlice::default();
        vault.entries = (0..10).map(|i| entry(i, "h.ru")).collect();
        vault.selected = 9;
        vault.ensure_visible(3);
        assert_eq!(vault.offset, 7);

        vault.apply_fetch(Ok(vec![entry(0, "h.ru"), entry(1, "h.ru")]));
        vault.ensure_visible(3);
        assert_eq!(vault.offset, 0);
        assert_eq!(vault.selected, 1);
    }
}
