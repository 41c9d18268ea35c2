//! In-memory page for host tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::dom::{FrameTarget, PageDocument, PageElement, SelectControl};
use crate::ui_model::ChartCategory;

struct ElementState {
    id: String,
    class_name: String,
    display: String,
}

#[derive(Clone)]
pub(crate) struct MemElement(Rc<RefCell<ElementState>>);

impl MemElement {
    pub(crate) fn new(id: &str, class_name: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementState {
            id: id.to_string(),
            class_name: class_name.to_string(),
            display: String::new(),
        })))
    }

    pub(crate) fn display(&self) -> String {
        self.0.borrow().display.clone()
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().class_name.split_whitespace().any(|c| c == class)
    }
}

impl PageElement for MemElement {
    fn id(&self) -> String {
        self.0.borrow().id.clone()
    }

    fn class_name(&self) -> String {
        self.0.borrow().class_name.clone()
    }

    fn set_class_name(&self, value: &str) {
        self.0.borrow_mut().class_name = value.to_string();
    }

    fn set_display(&self, value: &str) {
        self.0.borrow_mut().display = value.to_string();
    }
}

#[derive(Clone, Default)]
pub(crate) struct MemSelect(Rc<RefCell<String>>);

impl MemSelect {
    pub(crate) fn set_value(&self, value: &str) {
        *self.0.borrow_mut() = value.to_string();
    }
}

impl SelectControl for MemSelect {
    fn selected_value(&self) -> String {
        self.0.borrow().clone()
    }
}

/// Records every `src` assignment.
#[derive(Clone, Default)]
pub(crate) struct MemFrame(Rc<RefCell<Vec<String>>>);

impl MemFrame {
    pub(crate) fn history(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn src(&self) -> Option<String> {
        self.0.borrow().last().cloned()
    }
}

impl FrameTarget for MemFrame {
    fn set_src(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

#[derive(Default)]
pub(crate) struct MemPage {
    elements: Vec<MemElement>,
    selects: HashMap<String, MemSelect>,
    frames: HashMap<String, MemFrame>,
}

impl MemPage {
    /// Stock dashboard markup: the given panels, `links` tab links, the course
    /// selector, one selector per chart category and the frame.
    pub(crate) fn dashboard(panels: &[&str], links: usize) -> Self {
        let mut page = MemPage::default();
        for id in panels {
            page.add_element(id, "tabcontent");
        }
        for i in 0..links {
            page.add_element(&format!("link{i}"), "tablinks");
        }
        page.add_select("course_select");
        for c in ChartCategory::all() {
            page.add_select(&c.selector_id("chart_select_"));
        }
        page.add_frame("myframe");
        page
    }

    pub(crate) fn add_element(&mut self, id: &str, class_name: &str) -> MemElement {
        let el = MemElement::new(id, class_name);
        self.elements.push(el.clone());
        el
    }

    pub(crate) fn add_select(&mut self, id: &str) -> MemSelect {
        let sel = MemSelect::default();
        self.selects.insert(id.to_string(), sel.clone());
        sel
    }

    pub(crate) fn add_frame(&mut self, id: &str) -> MemFrame {
        let frame = MemFrame::default();
        self.frames.insert(id.to_string(), frame.clone());
        frame
    }

    pub(crate) fn remove_select(&mut self, id: &str) {
        self.selects.remove(id);
    }

    pub(crate) fn element(&self, id: &str) -> MemElement {
        self.elements
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .unwrap_or_else(|| panic!("no element {id}"))
    }

    pub(crate) fn select(&self, id: &str) -> MemSelect {
        self.selects[id].clone()
    }

    pub(crate) fn frame(&self, id: &str) -> MemFrame {
        self.frames[id].clone()
    }
}

impl PageDocument for MemPage {
    type Element = MemElement;
    type Select = MemSelect;
    type Frame = MemFrame;

    fn elements_by_class(&self, class: &str) -> Vec<MemElement> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .cloned()
            .collect()
    }

    fn select_by_id(&self, id: &str) -> Option<MemSelect> {
        self.selects.get(id).cloned()
    }

    fn frame_by_id(&self, id: &str) -> Option<MemFrame> {
        self.frames.get(id).cloned()
    }
}
