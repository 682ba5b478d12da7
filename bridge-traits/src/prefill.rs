//! Prefill read seam for the SDK's form-population callback.

use core_model::PrefillForm;

/// Source of the last-set contact form prefill snapshot.
///
/// The vendor SDK decides when to populate its contact form; platform
/// adapters wire their form-population callback to a `PrefillSource` and read
/// the snapshot at that moment. `None` means no values should be overridden.
pub trait PrefillSource: Send + Sync {
    fn current_prefill(&self) -> Option<PrefillForm>;
}
