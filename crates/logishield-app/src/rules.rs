use logishield_domain::model::RegulationTable;

/// Tabular listing of a resolved regulation table, one rule per line.
pub fn format_rules(table: &RegulationTable) -> String {
    let mut out = format!("profile: {} ({} rules)\n", table.profile(), table.len());
    if table.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&format!(
        "{:<10} {:<24} {:<10} {:>8} {}\n",
        "code", "name", "restrict", "tax", "license"
    ));
    for (code, rule) in table.iter() {
        let tax = rule
            .tax_rate
            .map(|r| format!("{:.1}%", r * 100.0))
            .unwrap_or_else(|| "-".to_string());
        let license = match rule.license_required {
            Some(true) => "required",
            Some(false) => "no",
            None => "-",
        };
        out.push_str(&format!(
            "{:<10} {:<24} {:<10} {:>8} {}\n",
            code,
            rule.name,
            rule.restriction.as_str(),
            tax,
            license
        ));
    }

    out
}
