use anyhow::{Context, Result};
use jxlsig::{CONTAINER_SIGNATURE, MAX_SIGNATURE_LEN};

/// Parse a `--threads` value; "auto" or "0" means all cores
pub fn parse_threads(threads: Option<&str>) -> Result<usize> {
    match threads {
        None => Ok(1),
        Some("auto") | Some("0") => Ok(std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)),
        Some(s) => s.parse::<usize>().with_context(|| {
            format!("Invalid thread count '{}', expected a number or 'auto'", s)
        }),
    }
}

/// Space-separated uppercase hex, e.g. "FF 0A"
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimum number of additional bytes before the prefix can be classified
///
/// Zero once the result is decided.
pub fn bytes_needed(prefix: &[u8]) -> usize {
    match prefix {
        [] | [0xFF] => 1,
        [0x00, ..] if prefix.len() < MAX_SIGNATURE_LEN => CONTAINER_SIGNATURE.len() - prefix.len(),
        _ => 0,
    }
}
