use tracing::debug;

use crate::dom::{FrameTarget, SelectControl};
use crate::endpoint::ChartEndpoint;
use crate::error::{DashboardError, Result};

/// Points the embedded chart frame at `{endpoint}?{chart}/?course={course}`.
pub struct FrameRefresher<F, S> {
    frame: F,
    course_select: S,
    endpoint: ChartEndpoint,
}

impl<F: FrameTarget, S: SelectControl> FrameRefresher<F, S> {
    pub fn new(frame: F, course_select: S, endpoint: ChartEndpoint) -> Self {
        Self {
            frame,
            course_select,
            endpoint,
        }
    }

    /// Assigns the frame source and returns the URL.
    ///
    /// An empty `course` falls back to the course selector's live value.
    pub fn refresh(&self, chart: &str, course: &str) -> Result<String> {
        let chart = chart.trim();
        if chart.is_empty() {
            return Err(DashboardError::EmptyChart);
        }

        let fallback;
        let course = if course.is_empty() {
            fallback = self.course_select.selected_value();
            debug!(course = %fallback, "course empty, using selector value");
            fallback.as_str()
        } else {
            course
        };

        let url = self.endpoint.chart_url(chart, course);
        debug!(%url, "refreshing chart frame");
        self.frame.set_src(&url);
        Ok(url)
    }
}
