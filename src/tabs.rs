use tracing::debug;

use crate::config::DashboardConfig;
use crate::dom::{PageDocument, PageElement};
use crate::error::{DashboardError, Result};

/// Shows one panel at a time and moves the active marker between tab links.
///
/// Panels and links are resolved once; later DOM additions are not picked up.
pub struct TabSwitcher<E> {
    panels: Vec<E>,
    links: Vec<E>,
    /// Class-name suffix appended to the active link, e.g. `" active"`.
    marker: String,
}

impl<E: PageElement> TabSwitcher<E> {
    pub fn bind<D>(doc: &D, cfg: &DashboardConfig) -> Result<Self>
    where
        D: PageDocument<Element = E>,
    {
        let panels = doc.elements_by_class(&cfg.panel_class);
        if panels.is_empty() {
            return Err(DashboardError::MissingElement {
                id: format!(".{}", cfg.panel_class),
            });
        }
        let links = doc.elements_by_class(&cfg.tab_link_class);
        if links.is_empty() {
            return Err(DashboardError::MissingElement {
                id: format!(".{}", cfg.tab_link_class),
            });
        }
        Self::new(panels, links, &cfg.active_token, cfg.strict_tab_pairing)
    }

    pub fn new(panels: Vec<E>, links: Vec<E>, active_token: &str, strict: bool) -> Result<Self> {
        if strict && panels.len() != links.len() {
            return Err(DashboardError::TabCountMismatch {
                panels: panels.len(),
                links: links.len(),
            });
        }
        Ok(Self {
            panels,
            links,
            marker: format!(" {active_token}"),
        })
    }

    pub fn panel_ids(&self) -> Vec<String> {
        self.panels.iter().map(PageElement::id).collect()
    }

    /// Hides every panel, clears every link, then reveals `panel_id` and marks
    /// `trigger` active.
    ///
    /// An unknown `panel_id` is rejected before anything is hidden. The marker
    /// is appended unconditionally, so a trigger outside the link set that is
    /// already active ends up carrying it twice.
    pub fn show_tab(&self, trigger: &E, panel_id: &str) -> Result<()> {
        let target = self
            .panels
            .iter()
            .find(|p| p.id() == panel_id)
            .ok_or_else(|| DashboardError::UnknownPanel(panel_id.to_string()))?;

        for panel in &self.panels {
            panel.set_display("none");
        }

        for link in &self.links {
            let class = link.class_name();
            // Only the first exact match is stripped.
            let cleared = class.replacen(self.marker.as_str(), "", 1);
            if cleared != class {
                link.set_class_name(&cleared);
            }
        }

        target.set_display("block");
        trigger.set_class_name(&format!("{}{}", trigger.class_name(), self.marker));

        debug!(panel = panel_id, "tab shown");
        Ok(())
    }
}
