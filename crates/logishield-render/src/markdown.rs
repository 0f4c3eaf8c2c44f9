use crate::{RenderableReport, RenderableSeverity, RenderableStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# LogiShield compliance summary\n\n");
    let status = match report.status {
        RenderableStatus::Clear => "CLEAR",
        RenderableStatus::Flagged => "FLAGGED",
    };
    out.push_str(&format!("- Status: **{}**\n", status));
    if let Some(id) = &report.shipment_id {
        out.push_str(&format!("- Shipment: `{}`\n", id));
    }
    out.push_str(&format!(
        "- Total items: {}\n- Critical risks: {}\n- Warnings: {}\n- Estimated duties: ${}\n\n",
        report.data.items_scanned,
        report.data.critical,
        report.data.warning,
        format_amount(report.data.estimated_tax)
    ));

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    let outstanding = report.findings.iter().filter(|f| !f.resolved).count();
    out.push_str("## Detailed risk analysis\n\n");
    out.push_str(&format!(
        "{} of {} findings outstanding.\n\n",
        outstanding,
        report.findings.len()
    ));

    for f in &report.findings {
        let icon = match f.severity {
            RenderableSeverity::Critical => "🚩",
            _ => "⚠️",
        };
        let row = f
            .item_index
            .map(|i| format!("Row {}", i + 1))
            .unwrap_or_else(|| "Manifest".to_string());
        let code = f.hscode.as_deref().unwrap_or("-");

        out.push_str(&format!(
            "- {} {}: `{}` - {}: {} (`{}`)\n",
            icon,
            row,
            code,
            f.severity.label(),
            f.message,
            f.code
        ));
        if let Some(help) = &f.help {
            out.push_str(&format!("  - recommended action: {}\n", help));
        }
        if f.resolved {
            out.push_str("  - resolved\n");
        }
    }

    out
}

/// Two decimals with thousands separators, e.g. `12,450.00`.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
