use coursedash::dom::{FrameTarget, PageDocument, PageElement, SelectControl};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlIFrameElement, HtmlSelectElement};

#[derive(Clone)]
pub(super) struct WebElement(HtmlElement);

impl WebElement {
    pub(super) fn new(el: HtmlElement) -> Self {
        Self(el)
    }
}

impl PageElement for WebElement {
    fn id(&self) -> String {
        self.0.id()
    }

    fn class_name(&self) -> String {
        self.0.class_name()
    }

    fn set_class_name(&self, value: &str) {
        self.0.set_class_name(value);
    }

    fn set_display(&self, value: &str) {
        if self.0.style().set_property("display", value).is_err() {
            warn!(id = %self.0.id(), "style.display rejected `{value}`");
        }
    }
}

#[derive(Clone)]
pub(super) struct WebSelect(HtmlSelectElement);

impl SelectControl for WebSelect {
    fn selected_value(&self) -> String {
        self.0.value()
    }
}

#[derive(Clone)]
pub(super) struct WebFrame(HtmlIFrameElement);

impl FrameTarget for WebFrame {
    fn set_src(&self, url: &str) {
        self.0.set_src(url);
    }
}

#[derive(Clone)]
pub(super) struct WebDocument(web_sys::Document);

impl WebDocument {
    pub(super) fn new(doc: web_sys::Document) -> Self {
        Self(doc)
    }

    pub(super) fn raw(&self) -> &web_sys::Document {
        &self.0
    }
}

impl PageDocument for WebDocument {
    type Element = WebElement;
    type Select = WebSelect;
    type Frame = WebFrame;

    fn elements_by_class(&self, class: &str) -> Vec<WebElement> {
        let found = self.0.get_elements_by_class_name(class);
        (0..found.length())
            .filter_map(|i| found.item(i))
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .map(WebElement)
            .collect()
    }

    fn select_by_id(&self, id: &str) -> Option<WebSelect> {
        self.0
            .get_element_by_id(id)?
            .dyn_into::<HtmlSelectElement>()
            .ok()
            .map(WebSelect)
    }

    fn frame_by_id(&self, id: &str) -> Option<WebFrame> {
        self.0
            .get_element_by_id(id)?
            .dyn_into::<HtmlIFrameElement>()
            .ok()
            .map(WebFrame)
    }
}
