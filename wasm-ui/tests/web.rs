//! Browser tests. Run with `wasm-pack test --headless --firefox wasm-ui`.

#![cfg(target_arch = "wasm32")]

use activity_board::{
    LANGUAGE_STORAGE_KEY, Language, LanguageStore, initial_language, toggle_language,
};
use activity_board_ui::document::apply_language;
use activity_board_ui::storage::LocalLanguageStore;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn clear_language() {
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(LANGUAGE_STORAGE_KEY).unwrap();
}

#[wasm_bindgen_test]
fn test_language_persists_as_plain_code() {
    clear_language();
    let store = LocalLanguageStore;
    assert_eq!(initial_language(&store), Language::En);

    toggle_language(&store, Language::En);
    let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
    assert_eq!(
        storage.get_item(LANGUAGE_STORAGE_KEY).unwrap().as_deref(),
        Some("pt")
    );
    assert_eq!(store.load(), Some(Language::Pt));
    clear_language();
}

#[wasm_bindgen_test]
fn test_apply_language_sweeps_tagged_elements() {
    let doc = document();
    let body = doc.body().unwrap();

    let heading = doc.create_element("h1").unwrap();
    heading.set_attribute("data-i18n", "pageTitle").unwrap();
    body.append_child(&heading).unwrap();

    let unknown = doc.create_element("p").unwrap();
    unknown.set_attribute("data-i18n", "mysteryKey").unwrap();
    body.append_child(&unknown).unwrap();

    let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
    input
        .set_attribute("data-i18n-placeholder", "emailPlaceholder")
        .unwrap();
    body.append_child(&input).unwrap();

    apply_language(Language::Pt);
    assert_eq!(
        heading.text_content().as_deref(),
        Some("Atividades Extracurriculares")
    );
    assert_eq!(unknown.text_content().as_deref(), Some("mysteryKey"));
    assert_eq!(input.placeholder(), "seu-email@mergington.edu");
    assert_eq!(
        doc.document_element().unwrap().get_attribute("lang").as_deref(),
        Some("pt")
    );

    apply_language(Language::En);
    assert_eq!(
        heading.text_content().as_deref(),
        Some("Extracurricular Activities")
    );
    assert_eq!(input.placeholder(), "your-email@mergington.edu");
}
