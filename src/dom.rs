//! The slice of the DOM the dashboard touches.
//!
//! The wasm crate implements these over `web_sys`; host tests use an in-memory
//! page. Handles are cheap clones of a shared node, so setters take `&self`.

pub trait PageElement: Clone {
    fn id(&self) -> String;
    fn class_name(&self) -> String;
    fn set_class_name(&self, value: &str);
    /// Sets the inline `display` style.
    fn set_display(&self, value: &str);
}

pub trait SelectControl: Clone {
    /// Value of the currently selected option.
    fn selected_value(&self) -> String;
}

pub trait FrameTarget: Clone {
    fn set_src(&self, url: &str);
}

pub trait PageDocument {
    type Element: PageElement;
    type Select: SelectControl;
    type Frame: FrameTarget;

    /// Elements carrying `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<Self::Element>;
    fn select_by_id(&self, id: &str) -> Option<Self::Select>;
    fn frame_by_id(&self, id: &str) -> Option<Self::Frame>;
}
