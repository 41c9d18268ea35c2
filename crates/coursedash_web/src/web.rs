use std::cell::RefCell;

use coursedash::{ChartCategory, DashboardConfig, DashboardError, PageController};
use tracing::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod console;
mod dom;

use dom::{WebDocument, WebElement};

/// Optional `<script type="application/json">` holding a `DashboardConfig`.
const CONFIG_ELEMENT_ID: &str = "coursedash-config";

thread_local! {
    static CONTROLLER: RefCell<Option<PageController<WebDocument>>> = const { RefCell::new(None) };
}

pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let (cfg, cfg_err) = match load_config(&document) {
        Ok(cfg) => (cfg, None),
        Err(e) => (DashboardConfig::default(), Some(e)),
    };
    console::init(cfg.tracing_level());
    if let Some(e) = cfg_err {
        warn!("ignoring page config: {e}");
    }

    let doc = WebDocument::new(document);
    if doc.raw().ready_state() == "loading" {
        let on_ready = {
            let doc = doc.clone();
            Closure::once_into_js(move || wire_or_log(doc, cfg))
        };
        if let Err(e) = doc
            .raw()
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            error!("cannot wait for DOMContentLoaded: {}", js_err(e));
        }
    } else {
        wire_or_log(doc, cfg);
    }
}

/// Inline tab handler: `onclick="showChart(event, 'Enrolment')"`.
#[wasm_bindgen(js_name = showChart)]
pub fn show_chart(evt: web_sys::Event, panel_id: &str) {
    let Some(trigger) = evt
        .current_target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        warn!(panel = panel_id, "showChart called without an element target");
        return;
    };
    with_controller(|c| c.show_tab(&WebElement::new(trigger), panel_id));
}

#[wasm_bindgen(js_name = refreshFrame)]
pub fn refresh_frame(chart: &str, course: &str) {
    with_controller(|c| c.refresh_frame(chart, course).map(|_| ()));
}

fn wire_or_log(doc: WebDocument, cfg: DashboardConfig) {
    match wire(&doc, &cfg) {
        Ok(()) => info!("dashboard ready"),
        Err(e) => error!("dashboard not wired: {e}"),
    }
}

fn wire(doc: &WebDocument, cfg: &DashboardConfig) -> Result<(), DashboardError> {
    let controller = PageController::bind(doc, cfg)?;
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));

    on_change(doc, &cfg.course_select_id, || {
        with_controller(|c| {
            c.on_course_changed();
            Ok(())
        })
    })?;

    for &category in ChartCategory::all() {
        on_change(doc, &cfg.chart_select_id(category), move || {
            with_controller(|c| c.on_chart_changed(category).map(|_| ()))
        })?;
    }
    Ok(())
}

fn on_change(
    doc: &WebDocument,
    id: &str,
    handler: impl FnMut() + 'static,
) -> Result<(), DashboardError> {
    let el = doc
        .raw()
        .get_element_by_id(id)
        .ok_or_else(|| DashboardError::MissingElement { id: id.to_string() })?;

    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}

fn with_controller(
    f: impl FnOnce(&mut PageController<WebDocument>) -> Result<(), DashboardError>,
) {
    CONTROLLER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            warn!("dashboard is not wired yet");
            return;
        };
        if let Err(e) = f(controller) {
            warn!("{e}");
        }
    });
}

fn load_config(document: &web_sys::Document) -> Result<DashboardConfig, DashboardError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(DashboardConfig::default());
    }
    DashboardConfig::from_json(&raw)
}

fn js_err(v: JsValue) -> DashboardError {
    DashboardError::Dom(v.as_string().unwrap_or_else(|| format!("{v:?}")))
}
