//! Browser file download and upload helpers

use std::time::Duration;

use leptos::logging::warn;
use leptos::{document, set_timeout, window};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

/// Offer `contents` to the user as a JSON file download
pub fn download_json(file_name: &str, contents: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document().create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);

    let body = document()
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    // The click starts the download asynchronously, so keep the URL alive briefly
    set_timeout(
        move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                warn!("Failed to revoke download URL: {:?}", e);
            }
        },
        Duration::from_secs(1),
    );

    Ok(())
}

/// Read a picked file as text
pub async fn read_text(file: File) -> Option<String> {
    JsFuture::from(file.text()).await.ok()?.as_string()
}

pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        warn!("Failed to show alert {:?}: {:?}", message, e);
    }
}
