use crate::ledger::ResolutionLedger;
use crate::report::to_renderable;
use logishield_types::LogishieldReport;

pub fn render_markdown(report: &LogishieldReport, ledger: Option<&ResolutionLedger>) -> String {
    logishield_render::render_markdown(&to_renderable(report, ledger))
}

pub fn render_csv(report: &LogishieldReport, ledger: Option<&ResolutionLedger>) -> String {
    logishield_render::render_csv(&to_renderable(report, ledger))
}
