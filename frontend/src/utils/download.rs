//! Blob-backed file download without leaving the page.

use wasm_bindgen::JsCast;

/// Explicit charset so Polish diacritics in report cells survive whatever
/// the opening application assumes about the file.
const CSV_MIME: &str = "text/csv;charset=utf-8";

pub fn trigger_csv_download(filename: &str, csv_data: &str) -> Result<(), String> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(csv_data));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(CSV_MIME);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|_| "nie udało się utworzyć blobu".to_string())?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "nie udało się utworzyć adresu blobu".to_string())?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("brak obiektu document")?;
    let anchor = document
        .create_element("a")
        .map_err(|_| "nie udało się utworzyć odnośnika".to_string())?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "nie udało się rzutować odnośnika".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();
    document
        .body()
        .ok_or("brak elementu body")?
        .append_child(&anchor)
        .map_err(|_| "nie udało się dołączyć odnośnika".to_string())?;
    anchor.click();
    anchor.remove();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}
