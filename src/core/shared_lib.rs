//! Shared component, built on top of the static component.

use crate::core::static_lib::compute_base;
use std::sync::atomic::{AtomicI32, Ordering};

/// Process-wide counter. Nothing in the harness writes it.
#[cfg_attr(feature = "ffi", export_name = "nshared_lib")]
pub static SHARED_COUNTER: AtomicI32 = AtomicI32::new(0);

/// Base value doubled, recomputed on every call.
pub fn compute_derived() -> i32 {
    let value = compute_base();
    value * 2
}

pub fn shared_counter() -> i32 {
    SHARED_COUNTER.load(Ordering::Relaxed)
}

pub fn set_shared_counter(value: i32) {
    SHARED_COUNTER.store(value, Ordering::Relaxed);
}

/// Handle type exported alongside the functions. Construction has no effects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SharedLib;

impl SharedLib {
    pub fn new() -> Self {
        Self
    }
}
