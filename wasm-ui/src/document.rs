//! Translation of the static page shell.
//!
//! Markup outside the Yew root names its strings by key:
//! `<title data-i18n="pageTitle">` or
//! `<input data-i18n-placeholder="emailPlaceholder">`. Unknown keys are shown
//! as-is.

use activity_board::{Language, resolve_name};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

/// Set `<html lang>` and translate every tagged element in the document.
pub fn apply_language(language: Language) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", language.code());
    }

    for element in tagged(&document, "data-i18n") {
        if let Some(key) = element.get_attribute("data-i18n") {
            element.set_text_content(Some(&*resolve_name(language, &key)));
        }
    }

    for element in tagged(&document, "data-i18n-placeholder") {
        let Some(key) = element.get_attribute("data-i18n-placeholder") else {
            continue;
        };
        if let Ok(input) = element.dyn_into::<HtmlInputElement>() {
            input.set_placeholder(&resolve_name(language, &key));
        }
    }
}

fn tagged(document: &Document, attribute: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(&format!("[{attribute}]")) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
