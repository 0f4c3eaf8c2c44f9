use crate::error::EvaluateError;
use crate::model::RegulationTable;
use crate::validate::ValidItem;

/// Sum of `value * rate` over items whose rule defines a tax rate, in manifest order.
///
/// Fails when the total overflows `f64`; reports carry the estimate as a JSON number.
pub fn estimate(items: &[ValidItem<'_>], rules: &RegulationTable) -> Result<f64, EvaluateError> {
    // Explicit +0.0 seed: an empty sum must serialize as 0.0, not -0.0.
    let total = items
        .iter()
        .filter_map(|item| {
            let rate = rules.get(item.hscode)?.tax_rate?;
            Some(item.value * rate)
        })
        .fold(0.0, |total, tax| total + tax);

    if !total.is_finite() {
        return Err(EvaluateError::TaxOverflow);
    }
    Ok(total)
}
