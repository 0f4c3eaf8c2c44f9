use crate::{RenderableFinding, RenderableReport};

pub const CSV_HEADER: &str = "index,hscode,severity,check_id,code,issue,remedy,resolved";

/// Render findings as an RFC 4180 CSV document (LF line endings, header row first).
pub fn render_csv(report: &RenderableReport) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for f in &report.findings {
        out.push_str(&csv_row(f));
        out.push('\n');
    }

    out
}

fn csv_row(f: &RenderableFinding) -> String {
    let index = f.item_index.map(|i| i.to_string()).unwrap_or_default();
    let fields = [
        index.as_str(),
        f.hscode.as_deref().unwrap_or(""),
        f.severity.label(),
        f.check_id.as_str(),
        f.code.as_str(),
        f.message.as_str(),
        f.help.as_deref().unwrap_or(""),
        if f.resolved { "true" } else { "false" },
    ];

    fields
        .iter()
        .map(|field| escape_field(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
