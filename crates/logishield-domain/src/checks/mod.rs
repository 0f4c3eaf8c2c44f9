use crate::model::RegulationTable;
use crate::validate::ValidItem;
use logishield_types::Finding;

mod export_license;
mod unknown_code;
mod utils;

pub fn run_all(items: &[ValidItem<'_>], rules: &RegulationTable, out: &mut Vec<Finding>) {
    unknown_code::run(items, rules, out);
    export_license::run(items, rules, out);
}

#[cfg(test)]
mod tests;
