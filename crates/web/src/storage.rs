//! Task list persistence in `window.localStorage`

use leptos::logging::warn;
use tasks::{snapshot, TaskList, STORAGE_KEY};

fn local_storage() -> Option<web_sys::Storage> {
    leptos::window().local_storage().ok().flatten()
}

/// Read the stored list, seeding demo tasks on first visit
pub fn load() -> TaskList {
    let raw = local_storage().and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
    let restored = snapshot::restore(raw.as_deref());

    if restored.seeded {
        save(&restored.list);
    }
    restored.list
}

/// Write the whole list under the storage key
pub fn save(list: &TaskList) {
    let Some(storage) = local_storage() else {
        warn!("localStorage is unavailable; changes will not persist");
        return;
    };

    match snapshot::encode(list) {
        Ok(raw) => {
            if let Err(e) = storage.set_item(STORAGE_KEY, &raw) {
                warn!("Failed to save tasks: {:?}", e);
            }
        }
        Err(e) => warn!("Failed to encode tasks: {}", e),
    }
}
