use geo_core::TextSink;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `location.search` of the current page, empty when unavailable.
pub fn location_search() -> String {
    web::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Writes status text into an element's `innerText`.
pub struct ElementTextSink {
    element: web::HtmlElement,
}

impl ElementTextSink {
    pub fn by_id(document: &web::Document, id: &str) -> anyhow::Result<Self> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("#{} is not an HtmlElement: {:?}", id, e))?;
        Ok(Self { element })
    }
}

impl TextSink for ElementTextSink {
    fn write(&mut self, text: &str) {
        self.element.set_inner_text(text);
    }
}
