#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Critical,
}

impl RenderableSeverity {
    pub fn label(self) -> &'static str {
        match self {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARNING",
            RenderableSeverity::Critical => "CRITICAL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Clear,
    Flagged,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub item_index: Option<usize>,
    pub hscode: Option<String>,
    pub check_id: String,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
    pub resolved: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableData {
    pub items_scanned: u32,
    pub estimated_tax: f64,
    pub critical: u32,
    pub warning: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub status: RenderableStatus,
    pub shipment_id: Option<String>,
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
