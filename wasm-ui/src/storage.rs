//! Language preference in `localStorage`.

use activity_board::{LANGUAGE_STORAGE_KEY, Language, LanguageStore};
use web_sys::{Storage, window};

/// Stores the language code as a plain string (`"en"` / `"pt"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLanguageStore;

fn get_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

impl LanguageStore for LocalLanguageStore {
    fn load(&self) -> Option<Language> {
        let value = get_storage()?.get_item(LANGUAGE_STORAGE_KEY).ok()??;
        Language::from_code(&value)
    }

    fn save(&self, language: Language) {
        let Some(storage) = get_storage() else {
            log::warn!("localStorage unavailable; language not saved");
            return;
        };
        if storage.set_item(LANGUAGE_STORAGE_KEY, language.code()).is_err() {
            log::warn!("could not save language preference");
        }
    }
}
