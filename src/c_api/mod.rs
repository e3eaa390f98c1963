//! C API for jxlsig
//!
//! This module provides a stable C ABI for use from C, C++ and any language
//! with a C FFI (P/Invoke, ctypes, ...). `SignatureCheck` is the only symbol
//! exported besides the loader entry point; it is stateless and safe to call
//! concurrently from any thread.
//!
//! It keeps the exact name, parameters and return codes of the original
//! loader export so existing callers resolve it unchanged. The tri-state
//! encoding is available to Rust callers as [`crate::Probe::as_raw`].

use crate::signature::check_signature;
use std::slice;

// ============================================================================
// RESULT CODES
// ============================================================================

/// Not enough bytes to decide (libjxl `JXL_SIG_NOT_ENOUGH_BYTES`)
pub const JXLSIG_SIG_NOT_ENOUGH_BYTES: i32 = 0;
/// Not a JPEG XL file (libjxl `JXL_SIG_INVALID`)
pub const JXLSIG_SIG_INVALID: i32 = 1;
/// Bare JPEG XL codestream (libjxl `JXL_SIG_CODESTREAM`)
pub const JXLSIG_SIG_CODESTREAM: i32 = 2;
/// JPEG XL container (libjxl `JXL_SIG_CONTAINER`)
pub const JXLSIG_SIG_CONTAINER: i32 = 3;

/// Borrow the caller's buffer for the duration of one call
///
/// A null pointer is the empty view regardless of `len`.
///
/// # Safety
/// A non-null `buf` must be valid for reads of `len` bytes.
#[inline]
unsafe fn borrow_input<'a>(buf: *const u8, len: libc::size_t) -> &'a [u8] {
    if buf.is_null() || len == 0 {
        &[]
    } else {
        slice::from_raw_parts(buf, len)
    }
}

/// Check whether a buffer starts with a JPEG XL signature
///
/// Drop-in replacement for libjxl's `JxlSignatureCheck`. Only the first
/// twelve bytes at most are inspected.
///
/// # Parameters
/// * `buf` - Start of the caller's buffer (may be NULL if `len` is 0)
/// * `len` - Number of readable bytes at `buf`
///
/// # Returns
/// * `JXLSIG_SIG_NOT_ENOUGH_BYTES` (0) - buffer is a prefix of a signature, or empty
/// * `JXLSIG_SIG_INVALID` (1) - not JPEG XL
/// * `JXLSIG_SIG_CODESTREAM` (2) - bare codestream
/// * `JXLSIG_SIG_CONTAINER` (3) - ISOBMFF container
///
/// # Safety
/// * `buf` must be NULL or valid for reads of `len` bytes
///
/// # Example
/// ```c
/// uint8_t head[12];
/// size_t n = fread(head, 1, sizeof head, fp);
/// if (SignatureCheck(head, n) >= JXLSIG_SIG_CODESTREAM) {
///     printf("JPEG XL\n");
/// }
/// ```
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn SignatureCheck(buf: *const u8, len: libc::size_t) -> i32 {
    check_signature(borrow_input(buf, len)).as_raw()
}
