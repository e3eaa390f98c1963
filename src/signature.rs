//! JPEG XL signature detection
//!
//! Classifies the leading bytes of a buffer the same way libjxl's
//! `JxlSignatureCheck` does. Two signatures exist:
//!
//! ```text
//! Codestream:  FF 0A
//! Container:   00 00 00 0C 4A 58 4C 20 0D 0A 87 0A   ("....JXL ....")
//! ```
//!
//! The container form is the first ISOBMFF box (`size = 12`, `type = "JXL "`).
//! At most [`MAX_SIGNATURE_LEN`] bytes are ever inspected.
//!
//! # Example
//!
//! ```rust
//! use jxlsig::{check_signature, Probe, Signature};
//!
//! assert_eq!(check_signature(&[0xFF, 0x0A]), Signature::Codestream);
//! assert_eq!(check_signature(&[0x00, 0x00]).probe(), Probe::Inconclusive);
//! assert_eq!(check_signature(b"\x89PNG\r\n\x1a\n").probe(), Probe::NoMatch);
//! ```

use std::fmt;

/// Bare codestream signature (`SOI` marker `0xFF` followed by `0x0A`)
pub const CODESTREAM_SIGNATURE: [u8; 2] = [0xFF, 0x0A];

/// Container signature: the 12-byte `JXL ` signature box
pub const CONTAINER_SIGNATURE: [u8; 12] = [
    0x00, 0x00, 0x00, 0x0C, b'J', b'X', b'L', b' ', 0x0D, 0x0A, 0x87, 0x0A,
];

/// Longest prefix the detector ever looks at
pub const MAX_SIGNATURE_LEN: usize = CONTAINER_SIGNATURE.len();

/// Result of a signature check
///
/// Discriminants are libjxl's `JxlSignature` values and cross the C ABI
/// unchanged.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Signature {
    /// Not enough bytes were supplied to decide
    NotEnoughBytes = 0,
    /// Not a JPEG XL file
    Invalid = 1,
    /// Bare JPEG XL codestream
    Codestream = 2,
    /// JPEG XL inside an ISOBMFF container
    Container = 3,
}

impl Signature {
    /// Collapse to the tri-state match result
    pub fn probe(self) -> Probe {
        match self {
            Signature::NotEnoughBytes => Probe::Inconclusive,
            Signature::Invalid => Probe::NoMatch,
            Signature::Codestream | Signature::Container => Probe::Match,
        }
    }

    /// True for either JPEG XL form
    pub fn is_jxl(self) -> bool {
        self.probe() == Probe::Match
    }

    /// Number of bytes the signature occupies at the start of the buffer
    ///
    /// Zero unless the buffer matched.
    pub fn header_len(self) -> usize {
        match self {
            Signature::Codestream => CODESTREAM_SIGNATURE.len(),
            Signature::Container => CONTAINER_SIGNATURE.len(),
            Signature::NotEnoughBytes | Signature::Invalid => 0,
        }
    }

    /// Integer code as returned by `SignatureCheck`
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Inverse of [`Signature::as_raw`]
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Signature::NotEnoughBytes),
            1 => Some(Signature::Invalid),
            2 => Some(Signature::Codestream),
            3 => Some(Signature::Container),
            _ => None,
        }
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Signature::NotEnoughBytes => "not_enough_bytes",
            Signature::Invalid => "invalid",
            Signature::Codestream => "codestream",
            Signature::Container => "container",
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tri-state match result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Probe {
    /// Buffer starts with a JPEG XL signature
    Match,
    /// Buffer is a proper prefix of a signature; supply more bytes
    Inconclusive,
    /// Buffer cannot be JPEG XL
    NoMatch,
}

impl Probe {
    /// Tri-state integer code: 1 match, 0 inconclusive, -1 no match
    pub fn as_raw(self) -> i32 {
        match self {
            Probe::Match => 1,
            Probe::Inconclusive => 0,
            Probe::NoMatch => -1,
        }
    }

    /// Stable lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Probe::Match => "match",
            Probe::Inconclusive => "inconclusive",
            Probe::NoMatch => "no_match",
        }
    }
}

impl fmt::Display for Probe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify the leading bytes of `buf`
///
/// The first byte selects the candidate form. A buffer that starts like the
/// container box but is shorter than twelve bytes is reported as
/// [`Signature::NotEnoughBytes`] even if the bytes after the first already
/// diverge; libjxl behaves the same way and callers rely on it.
#[inline]
pub fn check_signature(buf: &[u8]) -> Signature {
    match buf {
        [] => Signature::NotEnoughBytes,
        [0xFF] => Signature::NotEnoughBytes,
        [0xFF, second, ..] => {
            if *second == CODESTREAM_SIGNATURE[1] {
                Signature::Codestream
            } else {
                Signature::Invalid
            }
        }
        [0x00, ..] => {
            if buf.len() < CONTAINER_SIGNATURE.len() {
                Signature::NotEnoughBytes
            } else if buf[..CONTAINER_SIGNATURE.len()] == CONTAINER_SIGNATURE {
                Signature::Container
            } else {
                Signature::Invalid
            }
        }
        _ => Signature::Invalid,
    }
}

/// Convenience wrapper returning the tri-state result directly
#[inline]
pub fn probe(buf: &[u8]) -> Probe {
    check_signature(buf).probe()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_not_enough_bytes() {
        assert_eq!(check_signature(&[]), Signature::NotEnoughBytes);
        assert_eq!(probe(&[]), Probe::Inconclusive);
    }

    #[test]
    fn test_codestream() {
        assert_eq!(check_signature(&[0xFF]), Signature::NotEnoughBytes);
        assert_eq!(check_signature(&CODESTREAM_SIGNATURE), Signature::Codestream);
        assert_eq!(check_signature(&[0xFF, 0x0A, 0xFA, 0x7F]), Signature::Codestream);
        // JPEG SOI
        assert_eq!(check_signature(&[0xFF, 0xD8, 0xFF, 0xE0]), Signature::Invalid);
    }

    #[test]
    fn test_container() {
        assert_eq!(check_signature(&CONTAINER_SIGNATURE), Signature::Container);

        let mut with_ftyp = CONTAINER_SIGNATURE.to_vec();
        with_ftyp.extend_from_slice(&[0x00, 0x00, 0x00, 0x14, b'f', b't', b'y', b'p']);
        assert_eq!(check_signature(&with_ftyp), Signature::Container);

        for len in 1..CONTAINER_SIGNATURE.len() {
            assert_eq!(
                check_signature(&CONTAINER_SIGNATURE[..len]),
                Signature::NotEnoughBytes,
                "prefix of length {} should be inconclusive",
                len
            );
        }
    }

    #[test]
    fn test_container_divergence() {
        for i in 1..CONTAINER_SIGNATURE.len() {
            let mut buf = CONTAINER_SIGNATURE;
            buf[i] ^= 0x01;
            assert_eq!(check_signature(&buf), Signature::Invalid, "byte {} flipped", i);
        }
    }

    #[test]
    fn test_short_container_lookalike_waits_for_twelve_bytes() {
        assert_eq!(check_signature(&[0x00, 0x42, 0x42]), Signature::NotEnoughBytes);
    }

    #[test]
    fn test_other_formats() {
        assert_eq!(check_signature(b"\x89PNG\r\n\x1a\n"), Signature::Invalid);
        assert_eq!(check_signature(b"GIF89a"), Signature::Invalid);
        assert_eq!(check_signature(b"R"), Signature::Invalid);
        assert_eq!(check_signature(b"PK\x03\x04"), Signature::Invalid);
    }

    #[test]
    fn test_codes_match_libjxl() {
        assert_eq!(Signature::NotEnoughBytes.as_raw(), 0);
        assert_eq!(Signature::Invalid.as_raw(), 1);
        assert_eq!(Signature::Codestream.as_raw(), 2);
        assert_eq!(Signature::Container.as_raw(), 3);

        for code in 0..4 {
            assert_eq!(Signature::from_raw(code).map(Signature::as_raw), Some(code));
        }
        assert_eq!(Signature::from_raw(-1), None);
        assert_eq!(Signature::from_raw(4), None);
    }

    #[test]
    fn test_probe_codes() {
        assert_eq!(Probe::Match.as_raw(), 1);
        assert_eq!(Probe::Inconclusive.as_raw(), 0);
        assert_eq!(Probe::NoMatch.as_raw(), -1);
    }

    #[test]
    fn test_header_len() {
        assert_eq!(Signature::Codestream.header_len(), 2);
        assert_eq!(Signature::Container.header_len(), 12);
        assert_eq!(Signature::Invalid.header_len(), 0);
        assert_eq!(Signature::NotEnoughBytes.header_len(), 0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialized_names_match_display() {
        for sig in [
            Signature::NotEnoughBytes,
            Signature::Invalid,
            Signature::Codestream,
            Signature::Container,
        ] {
            assert_eq!(serde_json::to_value(sig).unwrap(), sig.name());
            assert_eq!(serde_json::to_value(sig.probe()).unwrap(), sig.probe().name());
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Signature::Container.to_string(), "container");
        assert_eq!(Probe::NoMatch.to_string(), "no_match");
    }
}
