//! Client-side download of exported handoff documents.
//!
//! SYSTEM CONTEXT
//! ==============
//! The export endpoint returns the handoff JSON; the browser turns it into a
//! named file via a Blob object URL and a synthetic anchor click. The file
//! contents mirror the service response exactly, pretty-printed.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Download filename for a pack's handoff document.
pub fn handoff_filename(pack_id: i64) -> String {
    format!("content-pack-{pack_id}-handoff.json")
}

/// Exact file contents: the export response pretty-printed with 2-space
/// indentation. Serializing an in-memory `Value` cannot fail.
pub fn handoff_body(document: &serde_json::Value) -> String {
    serde_json::to_string_pretty(document).unwrap_or_default()
}

/// Trigger a browser download of `contents` as `filename`. No-op outside a
/// browser.
pub fn save_json_file(filename: &str, contents: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            return;
        };
        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|element| element.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, contents);
    }
}
