//! Page inventory shared by the host and wasm builds.
//!
//! Keeping the chart categories out of the wasm-only `web` module lets the
//! selector naming be unit-tested on the host.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartCategory {
    Demographic,
    Enrolment,
    Activity,
    Comments,
    QuestionResponse,
}

impl ChartCategory {
    /// Suffix used in the selector id, e.g. `chart_select_questionResponse`.
    pub fn label(self) -> &'static str {
        match self {
            ChartCategory::Demographic => "demographic",
            ChartCategory::Enrolment => "enrolment",
            ChartCategory::Activity => "activity",
            ChartCategory::Comments => "comments",
            ChartCategory::QuestionResponse => "questionResponse",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ChartCategory::Demographic => "Demographics",
            ChartCategory::Enrolment => "Enrolment",
            ChartCategory::Activity => "Activity",
            ChartCategory::Comments => "Comments",
            ChartCategory::QuestionResponse => "Question Responses",
        }
    }

    pub fn selector_id(self, prefix: &str) -> String {
        format!("{}{}", prefix, self.label())
    }

    pub fn all() -> &'static [ChartCategory] {
        &[
            ChartCategory::Demographic,
            ChartCategory::Enrolment,
            ChartCategory::Activity,
            ChartCategory::Comments,
            ChartCategory::QuestionResponse,
        ]
    }
}

/// Course and chart last picked in the dropdowns. Lives for one page session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub course: String,
    pub chart: String,
}
