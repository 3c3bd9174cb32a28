//! C ABI exports for building the crate as a shared library.
//!
//! Symbol names match the C interface the components have always exposed:
//! `static_lib_func`, `fnshared_lib` and the `nshared_lib` integer (exported
//! from [`crate::core::shared_lib::SHARED_COUNTER`], which has the layout of `int`).

use crate::core::shared_lib::compute_derived;
use crate::core::static_lib::compute_base;
use std::os::raw::c_int;

#[no_mangle]
pub extern "C" fn static_lib_func() -> c_int {
    compute_base()
}

#[no_mangle]
pub extern "C" fn fnshared_lib() -> c_int {
    compute_derived()
}
