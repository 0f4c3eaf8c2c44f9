//! Manifest validation. Every item must pass before any check runs.

use crate::error::{EvaluateError, ItemField, MalformedReason};
use crate::model::{DeclaredCode, DeclaredFlag, DeclaredValue, ManifestItem};

/// A line item with its required fields present and well-formed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidItem<'a> {
    pub index: usize,
    pub hscode: &'a str,
    pub value: f64,
    pub has_license: bool,
}

/// Validate all items, failing on the first malformed one (manifest order).
pub fn validate_items(items: &[ManifestItem]) -> Result<Vec<ValidItem<'_>>, EvaluateError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_item(index, item))
        .collect()
}

pub fn validate_item(index: usize, item: &ManifestItem) -> Result<ValidItem<'_>, EvaluateError> {
    let malformed = |field, reason| EvaluateError::MalformedItem {
        index,
        field,
        reason,
    };

    let hscode = match &item.hscode {
        None => return Err(malformed(ItemField::Hscode, MalformedReason::Missing)),
        Some(DeclaredCode::Other(other)) => {
            return Err(malformed(
                ItemField::Hscode,
                MalformedReason::NotACode(other.to_string()),
            ));
        }
        Some(DeclaredCode::Text(code)) => match code.trim() {
            "" => return Err(malformed(ItemField::Hscode, MalformedReason::Empty)),
            code => code,
        },
    };

    let value = match &item.value {
        None => return Err(malformed(ItemField::Value, MalformedReason::Missing)),
        Some(v) => declared_amount(v).map_err(|reason| malformed(ItemField::Value, reason))?,
    };

    let has_license = match &item.has_license {
        None => false,
        Some(DeclaredFlag::Bool(flag)) => *flag,
        Some(DeclaredFlag::Other(other)) => {
            return Err(malformed(
                ItemField::HasLicense,
                MalformedReason::NotABoolean(other.to_string()),
            ));
        }
    };

    Ok(ValidItem {
        index,
        hscode,
        value,
        has_license,
    })
}

fn declared_amount(value: &DeclaredValue) -> Result<f64, MalformedReason> {
    let amount = match value {
        DeclaredValue::Number(n) => *n,
        DeclaredValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(MalformedReason::Empty);
            }
            trimmed
                .parse::<f64>()
                .map_err(|_| MalformedReason::NotANumber(text.clone()))?
        }
        DeclaredValue::Other(other) => return Err(MalformedReason::NotANumber(other.to_string())),
    };

    if !amount.is_finite() {
        return Err(MalformedReason::NotFinite);
    }
    if amount < 0.0 {
        return Err(MalformedReason::Negative(amount));
    }
    Ok(amount)
}
