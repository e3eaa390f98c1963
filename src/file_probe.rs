//! Signature checks over files and readers
//!
//! Only the first [`MAX_SIGNATURE_LEN`] bytes are read; the rest of the file
//! is never touched.
//!
//! # Example
//!
//! ```rust,no_run
//! use jxlsig::file_probe;
//!
//! let report = file_probe::check_file("image.jxl")?;
//! if report.signature.is_jxl() {
//!     println!("{} is JPEG XL ({})", report.path, report.signature);
//! }
//! # Ok::<(), jxlsig::JxlsigError>(())
//! ```

use crate::error::{JxlsigError, Result};
use crate::signature::{check_signature, Probe, Signature, MAX_SIGNATURE_LEN};
use std::fs::File;
use std::io::{self, stdin, ErrorKind, Read};
use std::path::Path;

/// Outcome of checking one input
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FileReport {
    /// Input path as given ("-" for stdin)
    pub path: String,
    /// libjxl-compatible classification
    pub signature: Signature,
    /// Tri-state classification
    pub probe: Probe,
    /// Bytes actually read (at most twelve)
    pub bytes_inspected: usize,
    /// Length of the matched signature, 0 if none
    pub header_len: usize,
    /// The inspected bytes
    #[cfg_attr(feature = "serde", serde(skip))]
    pub prefix: Vec<u8>,
}

/// Fill `buf` from `reader` until it is full or the reader hits EOF
///
/// Returns the number of bytes read. Short reads and `Interrupted` are retried.
pub fn read_prefix<R: Read>(mut reader: R, buf: &mut [u8; MAX_SIGNATURE_LEN]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Classify whatever `reader` yields first
pub fn check_reader<R: Read>(reader: R) -> Result<Signature> {
    let mut buf = [0u8; MAX_SIGNATURE_LEN];
    let n = read_prefix(reader, &mut buf)?;
    Ok(check_signature(&buf[..n]))
}

/// Classify a file by its leading bytes
///
/// Special case: path "-" reads from stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read, or if the path
/// names a directory.
pub fn check_file<P: AsRef<Path>>(path: P) -> Result<FileReport> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let mut buf = [0u8; MAX_SIGNATURE_LEN];
    let n = if path.to_str() == Some("-") {
        read_prefix(stdin().lock(), &mut buf)?
    } else {
        if path.is_dir() {
            return Err(JxlsigError::InvalidArgument(format!(
                "{} is a directory",
                display
            )));
        }
        read_prefix(File::open(path)?, &mut buf)?
    };

    let signature = check_signature(&buf[..n]);
    Ok(FileReport {
        path: display,
        signature,
        probe: signature.probe(),
        bytes_inspected: n,
        header_len: signature.header_len(),
        prefix: buf[..n].to_vec(),
    })
}
