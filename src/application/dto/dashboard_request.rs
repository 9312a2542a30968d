/// DashboardRequest - what to show once the dashboard has loaded
///
/// Both fields are optional. Blank values are dropped, so an empty
/// `--model ""` behaves like no model at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardRequest {
    /// Model to select (matched case-insensitively)
    pub model: Option<String>,
    /// Code search text, applied after the model selection
    pub code: Option<String>,
}

impl DashboardRequest {
    pub fn new(model: Option<String>, code: Option<String>) -> Self {
        Self {
            model: non_blank(model),
            code: non_blank(code),
        }
    }

    /// True when nothing beyond the plain overview was asked for
    pub fn is_overview(&self) -> bool {
        self.model.is_none() && self.code.is_none()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
