use anyhow::{Context, Result};
use jxlsig::file_probe::check_file;
use serde_json::json;
use std::path::PathBuf;

use crate::cli_utils::{bytes_needed, hex_bytes};

pub fn cmd_inspect(input: PathBuf, json_output: bool) -> Result<()> {
    let report = check_file(&input)
        .with_context(|| format!("Failed to read input: {}", input.display()))?;

    let needed = bytes_needed(&report.prefix);

    if json_output {
        let output = json!({
            "file": report.path,
            "bytes_inspected": report.bytes_inspected,
            "prefix_hex": hex_bytes(&report.prefix),
            "signature": report.signature,
            "signature_code": report.signature.as_raw(),
            "probe": report.probe,
            "probe_code": report.probe.as_raw(),
            "header_len": report.header_len,
            "bytes_needed": needed,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("File:       {}", report.path);
        println!("Inspected:  {} byte(s)", report.bytes_inspected);
        println!("Prefix:     {}", hex_bytes(&report.prefix));
        println!(
            "Signature:  {} (SignatureCheck = {})",
            report.signature,
            report.signature.as_raw()
        );
        println!("Probe:      {} ({})", report.probe, report.probe.as_raw());
        if report.header_len > 0 {
            println!("Header:     {} byte(s)", report.header_len);
        }
        if needed > 0 {
            println!("Need:       at least {} more byte(s)", needed);
        }
    }

    Ok(())
}
