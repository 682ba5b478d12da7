//! Process-wide prefill snapshot slot.

use std::sync::{Mutex, PoisonError};

use bridge_traits::PrefillSource;
use core_model::PrefillForm;

/// One-slot store for the last-set contact form prefill snapshot.
///
/// Written by `prefill_contact_form`, cleared by either reset operation, and
/// read through [`PrefillSource`] whenever the vendor SDK fires its
/// form-population callback. The mutex covers hosts whose SDK callback
/// arrives on a thread other than the scheduler task.
#[derive(Default)]
pub struct PrefillSlot {
    inner: Mutex<Option<PrefillForm>>,
}

impl PrefillSlot {
    pub fn new() -> PrefillSlot {
        PrefillSlot::default()
    }

    pub fn set(&self, form: PrefillForm) {
        *self.lock() = Some(form);
    }

    pub fn clear(&self) {
        *self.lock() = None;
    }

    pub fn get(&self) -> Option<PrefillForm> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<PrefillForm>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PrefillSource for PrefillSlot {
    fn current_prefill(&self) -> Option<PrefillForm> {
        self.get()
    }
}
