use std::fmt;
use thiserror::Error;

/// Failure of a whole evaluation call. No partial report is produced.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvaluateError {
    #[error("manifest item {index}: field `{field}` {reason}")]
    MalformedItem {
        index: usize,
        field: ItemField,
        reason: MalformedReason,
    },
    #[error("estimated tax is not finite; declared values are too large to total")]
    TaxOverflow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemField {
    Hscode,
    Value,
    HasLicense,
}

impl ItemField {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemField::Hscode => "hscode",
            ItemField::Value => "value",
            ItemField::HasLicense => "has_license",
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum MalformedReason {
    #[error("is missing")]
    Missing,
    #[error("is empty")]
    Empty,
    #[error("is not a number: {0:?}")]
    NotANumber(String),
    #[error("is negative: {0}")]
    Negative(f64),
    #[error("is not finite")]
    NotFinite,
    #[error("is not a classification code: {0}")]
    NotACode(String),
    #[error("is not a boolean: {0}")]
    NotABoolean(String),
}
