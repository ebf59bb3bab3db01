use log::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{js_sys, window, File, FileReader, HtmlElement, HtmlImageElement};

fn body() -> Option<HtmlElement> {
    window().and_then(|w| w.document()).and_then(|d| d.body())
}

/// Stops the page behind an overlay from scrolling.
pub fn lock_body_scroll(locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };
    match body() {
        Some(body) => {
            let _ = body.style().set_property("overflow", overflow);
        }
        None => warn!("No document body to set overflow on"),
    }
}

/// Warms the browser cache for an image that is likely shown next.
pub fn preload_image(url: Option<&str>) {
    let Some(url) = url else { return };
    if let Ok(img) = HtmlImageElement::new() {
        img.set_src(url);
    }
}

pub fn open_in_new_tab(url: &str) -> bool {
    match window().map(|w| w.open_with_url_and_target(url, "_blank")) {
        Some(Ok(Some(_))) => true,
        Some(Ok(None)) => {
            warn!("Popup blocked while opening {}", url);
            false
        }
        _ => {
            warn!("Could not open {}", url);
            false
        }
    }
}

pub fn set_document_attribute(name: &str, value: Option<&str>) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        warn!("No document element for {}", name);
        return;
    };
    let _ = match value {
        Some(value) => root.set_attribute(name, value),
        None => root.remove_attribute(name),
    };
}

/// Reads a picked file as a `data:` URL for an inline preview.
pub async fn read_as_data_url(file: File) -> Result<String, JsValue> {
    let reader = FileReader::new()?;
    let loaded = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        reader.set_onload(Some(&resolve));
        reader.set_onerror(Some(&reject));
    });
    reader.read_as_data_url(&file)?;
    JsFuture::from(loaded).await?;
    reader
        .result()?
        .as_string()
        .ok_or_else(|| JsValue::from_str("file reader returned no text"))
}
