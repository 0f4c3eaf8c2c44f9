//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_REGULATION_CLASSIFICATION: &str = "regulation.classification";
pub const CHECK_REGULATION_EXPORT_LICENSE: &str = "regulation.export_license";

// Codes: regulation.classification
pub const CODE_UNKNOWN_CODE: &str = "unknown_code";

// Codes: regulation.export_license
pub const CODE_MISSING_EXPORT_LICENSE: &str = "missing_export_license";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
