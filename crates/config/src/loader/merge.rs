//! Layered merge of config namespaces.

use crate::source::Entries;

/// Merge `overlay` on top of `base`.
///
/// Keys present in both take the overlay's value. Either layer may be absent.
pub fn merge_layers(base: Option<Entries>, overlay: Option<Entries>) -> Entries {
    let mut merged = base.unwrap_or_default();
    if let Some(overlay) = overlay {
        merged.extend(overlay);
    }
    merged
}
