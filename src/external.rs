//! A C API for encoding names.

use super::Nysiis;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

/// Encodes a NUL-terminated name, returning a newly-allocated key that the
/// caller must release with `nysiis_free_string`. Returns null if the input
/// is not valid UTF-8.
///
/// `max_output_length` of zero or below means unlimited.
#[no_mangle]
pub unsafe extern "C" fn nysiis_encode(
    input: *const c_char,
    max_output_length: i64,
) -> *const c_char {
    let name = match CStr::from_ptr(input).to_str() {
        Ok(name) => name,
        Err(_) => return ptr::null(),
    };

    let key = Nysiis::new(max_output_length).encode(name);
    // Keys never contain NUL bytes
    let key = CString::new(key).unwrap();
    key.into_raw()
}

#[no_mangle]
pub unsafe extern "C" fn nysiis_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}
