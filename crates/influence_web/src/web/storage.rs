use influence_core::install::{is_dismissed_value, DismissalStore, DISMISSED_VALUE};
use tracing::warn;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(super) fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub(super) fn local_storage_set_string(key: &str, value: &str) {
    let Some(s) = local_storage() else {
        warn!("localStorage unavailable; {key} not saved");
        return;
    };
    if s.set_item(key, value).is_err() {
        warn!("localStorage: failed to write {key}");
    }
}

/// Install-banner opt-out persisted in `localStorage`.
pub(super) struct LocalDismissalStore {
    key: String,
}

impl LocalDismissalStore {
    pub(super) fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }
}

impl DismissalStore for LocalDismissalStore {
    fn is_dismissed(&self) -> bool {
        is_dismissed_value(local_storage_get_string(&self.key).as_deref())
    }

    fn mark_dismissed(&mut self) {
        local_storage_set_string(&self.key, DISMISSED_VALUE);
    }
}
