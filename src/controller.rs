use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::dom::{PageDocument, SelectControl};
use crate::endpoint::ChartEndpoint;
use crate::error::{DashboardError, Result};
use crate::frame::FrameRefresher;
use crate::tabs::TabSwitcher;
use crate::ui_model::{ChartCategory, Selection};

/// Everything the dashboard page needs, bound once at page load.
pub struct PageController<D: PageDocument> {
    tabs: TabSwitcher<D::Element>,
    frame: FrameRefresher<D::Frame, D::Select>,
    course_select: D::Select,
    chart_selects: Vec<(ChartCategory, D::Select)>,
    selection: Selection,
}

impl<D: PageDocument> PageController<D> {
    /// Resolves every required element, failing on the first one missing.
    pub fn bind(doc: &D, cfg: &DashboardConfig) -> Result<Self> {
        let course_select = require(
            doc.select_by_id(&cfg.course_select_id),
            &cfg.course_select_id,
        )?;

        let mut chart_selects = Vec::with_capacity(ChartCategory::all().len());
        for &category in ChartCategory::all() {
            let id = cfg.chart_select_id(category);
            let select = require(doc.select_by_id(&id), &id)?;
            chart_selects.push((category, select));
        }

        let frame = require(doc.frame_by_id(&cfg.frame_id), &cfg.frame_id)?;
        let tabs = TabSwitcher::bind(doc, cfg)?;

        info!(
            panels = ?tabs.panel_ids(),
            endpoint = %cfg.endpoint,
            "dashboard bound"
        );

        Ok(Self {
            tabs,
            frame: FrameRefresher::new(
                frame,
                course_select.clone(),
                ChartEndpoint::new(cfg.endpoint.clone()),
            ),
            course_select,
            chart_selects,
            selection: Selection::default(),
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn show_tab(&self, trigger: &D::Element, panel_id: &str) -> Result<()> {
        self.tabs.show_tab(trigger, panel_id)
    }

    pub fn refresh_frame(&self, chart: &str, course: &str) -> Result<String> {
        self.frame.refresh(chart, course)
    }

    pub fn on_course_changed(&mut self) {
        self.selection.course = self.course_select.selected_value();
        info!(course = %self.selection.course, "course selected");
    }

    /// Caches the category's trimmed value and reloads the frame with it.
    pub fn on_chart_changed(&mut self, category: ChartCategory) -> Result<String> {
        let select = self
            .chart_selects
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, s)| s)
            .ok_or_else(|| DashboardError::MissingElement {
                id: category.label().to_string(),
            })?;
        self.selection.chart = select.selected_value().trim().to_string();
        debug!(category = category.label(), chart = %self.selection.chart, "chart selected");
        self.frame.refresh(&self.selection.chart, &self.selection.course)
    }
}

fn require<T>(found: Option<T>, id: &str) -> Result<T> {
    found.ok_or_else(|| DashboardError::MissingElement { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemPage;

    const PANELS: &[&str] = &["Demographics", "Enrolment", "Activity", "Comments", "Questions"];

    fn bound() -> (MemPage, PageController<MemPage>) {
        let page = MemPage::dashboard(PANELS, PANELS.len());
        let ctl = PageController::bind(&page, &DashboardConfig::default()).unwrap();
        (page, ctl)
    }

    #[test]
    fn course_then_chart_triggers_one_assignment() {
        let (page, mut ctl) = bound();
        page.select("course_select").set_value("CS101");
        ctl.on_course_changed();
        assert!(page.frame("myframe").history().is_empty());

        page.select("chart_select_enrolment").set_value("  charts_enrol  ");
        ctl.on_chart_changed(ChartCategory::Enrolment).unwrap();

        assert_eq!(
            page.frame("myframe").history(),
            vec!["http://127.0.0.1:5819/?charts_enrol/?course=CS101".to_string()]
        );
        assert_eq!(
            ctl.selection(),
            &Selection {
                course: "CS101".to_string(),
                chart: "charts_enrol".to_string(),
            }
        );
    }

    #[test]
    fn same_chart_twice_refreshes_twice() {
        let (page, mut ctl) = bound();
        page.select("course_select").set_value("CS101");
        ctl.on_course_changed();
        page.select("chart_select_activity").set_value("charts_steps");

        ctl.on_chart_changed(ChartCategory::Activity).unwrap();
        ctl.on_chart_changed(ChartCategory::Activity).unwrap();
        assert_eq!(page.frame("myframe").history().len(), 2);
    }

    #[test]
    fn chart_before_course_change_uses_selector_value() {
        let (page, mut ctl) = bound();
        page.select("course_select").set_value("MATH200");
        page.select("chart_select_demographic").set_value("charts_demo");

        let url = ctl.on_chart_changed(ChartCategory::Demographic).unwrap();
        assert_eq!(url, "http://127.0.0.1:5819/?charts_demo/?course=MATH200");
    }

    #[test]
    fn last_chart_change_wins() {
        let (page, mut ctl) = bound();
        page.select("course_select").set_value("CS101");
        ctl.on_course_changed();
        page.select("chart_select_comments").set_value("charts_comments");
        page.select("chart_select_questionResponse").set_value("charts_quiz");

        ctl.on_chart_changed(ChartCategory::Comments).unwrap();
        ctl.on_chart_changed(ChartCategory::QuestionResponse).unwrap();

        assert_eq!(
            page.frame("myframe").src().as_deref(),
            Some("http://127.0.0.1:5819/?charts_quiz/?course=CS101")
        );
        assert_eq!(ctl.selection().chart, "charts_quiz");
    }

    #[test]
    fn binding_names_the_missing_selector() {
        let mut page = MemPage::dashboard(PANELS, PANELS.len());
        page.remove_select("chart_select_comments");

        let err = PageController::bind(&page, &DashboardConfig::default())
            .err()
            .unwrap();
        assert!(
            matches!(err, DashboardError::MissingElement { ref id } if id == "chart_select_comments")
        );
    }

    #[test]
    fn show_tab_goes_through_bound_panels() {
        let (page, ctl) = bound();
        ctl.show_tab(&page.element("link2"), "Activity").unwrap();
        assert_eq!(page.element("Activity").display(), "block");
        assert_eq!(page.element("Comments").display(), "none");
    }

    #[test]
    fn custom_endpoint_is_used() {
        let page = MemPage::dashboard(PANELS, PANELS.len());
        let cfg = DashboardConfig {
            endpoint: "https://charts.example.org/".to_string(),
            ..DashboardConfig::default()
        };
        let ctl = PageController::bind(&page, &cfg).unwrap();
        let url = ctl.refresh_frame("charts_demo", "CS 101").unwrap();
        assert_eq!(url, "https://charts.example.org/?charts_demo/?course=CS%20101");
    }
}
