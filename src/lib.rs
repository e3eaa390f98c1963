//! jxlsig - JPEG XL Signature Probe
//!
//! jxlsig is a small loadable library that tells callers whether a byte
//! buffer starts like a JPEG XL image, without decoding anything. It exports
//! `SignatureCheck`, a drop-in for libjxl's `JxlSignatureCheck`, so hosts
//! that only need format sniffing do not have to ship the whole codec.
//!
//! # Quick Start
//!
//! ```rust
//! use jxlsig::{check_signature, Probe, Signature, CONTAINER_SIGNATURE};
//!
//! // Full container signature
//! assert_eq!(check_signature(&CONTAINER_SIGNATURE), Signature::Container);
//!
//! // Two bytes of a twelve byte signature: ask for more
//! assert_eq!(check_signature(&CONTAINER_SIGNATURE[..2]).probe(), Probe::Inconclusive);
//!
//! // PNG
//! assert_eq!(check_signature(b"\x89PNG\r\n\x1a\n").probe(), Probe::NoMatch);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │  Host process (C / C# / ...)         │
//! └──────────────────────────────────────┘
//!          ↓ LoadLibrary / dlopen
//! ┌──────────────────────────────────────┐
//! │  lifecycle   DllMain (no-op)         │
//! │  c_api       SignatureCheck          │
//! │                ↓                     │
//! │  signature   check_signature()       │
//! └──────────────────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Error types for file helpers
pub mod error;
/// Signature checks over files and readers
pub mod file_probe;
/// Loader lifecycle entry point (`DllMain`)
pub mod lifecycle;
/// JPEG XL signature detection
pub mod signature;

/// Public C API (`SignatureCheck`)
pub mod c_api;

// Re-exports for Rust consumers

pub use crate::error::{JxlsigError, Result};
pub use crate::file_probe::FileReport;
pub use crate::signature::{
    check_signature, probe, Probe, Signature, CODESTREAM_SIGNATURE, CONTAINER_SIGNATURE,
    MAX_SIGNATURE_LEN,
};
