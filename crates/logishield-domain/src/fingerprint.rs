use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a line-item finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - item index (manifest position)
/// - classification code
pub fn fingerprint_for_item(check_id: &str, code: &str, item_index: usize, hscode: &str) -> String {
    let index = item_index.to_string();
    let canonical = [check_id, code, index.as_str(), hscode].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
