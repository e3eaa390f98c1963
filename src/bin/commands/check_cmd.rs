use anyhow::{Context, Result};
use jxlsig::file_probe::{check_file, FileReport};
use jxlsig::JxlsigError;
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::cli_utils::parse_threads;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => anyhow::bail!("Invalid format '{}', expected: text, json, or csv", s),
        }
    }
}

pub fn cmd_check(
    inputs: Vec<PathBuf>,
    format: String,
    quiet: bool,
    threads: Option<String>,
    verbose: bool,
) -> Result<()> {
    let output_format = OutputFormat::from_str(&format)?;
    let num_threads = parse_threads(threads.as_deref())?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to create thread pool")?;

    let start = Instant::now();
    // par_iter + collect keeps input order
    let results: Vec<(std::result::Result<FileReport, JxlsigError>, Duration)> =
        pool.install(|| {
            inputs
                .par_iter()
                .map(|path| {
                    let t = Instant::now();
                    (check_file(path), t.elapsed())
                })
                .collect()
        });
    let total = start.elapsed();

    let mut reports = Vec::with_capacity(inputs.len());
    let mut jxl_count = 0usize;
    let mut error_count = 0usize;

    for (path, (result, elapsed)) in inputs.iter().zip(results) {
        let report = match result {
            Ok(report) => report,
            Err(e) => {
                error_count += 1;
                if !quiet {
                    eprintln!("[ERROR] {}: {}", path.display(), e);
                }
                continue;
            }
        };

        if report.signature.is_jxl() {
            jxl_count += 1;
        }
        if verbose {
            eprintln!(
                "[INFO] {}: {} bytes in {:.3}ms",
                report.path,
                report.bytes_inspected,
                elapsed.as_secs_f64() * 1000.0
            );
        }
        reports.push(report);
    }

    if !quiet {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        write_reports(&mut out, output_format, &reports)?;
        out.flush()?;
    }

    if verbose {
        eprintln!(
            "[INFO] {} input(s), {} JPEG XL, {} error(s), {:.2}ms on {} thread(s)",
            inputs.len(),
            jxl_count,
            error_count,
            total.as_secs_f64() * 1000.0,
            num_threads
        );
    }

    if error_count == 0 && jxl_count == inputs.len() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

/// Write reports to `out` in the requested format, in order
fn write_reports<W: Write>(out: &mut W, format: OutputFormat, reports: &[FileReport]) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}: {} ({})", report.path, report.signature, report.probe)?;
            }
        }
        OutputFormat::Json => {
            for report in reports {
                writeln!(out, "{}", serde_json::to_string(report)?)?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for report in reports {
                writer.serialize(report)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jxlsig::file_probe::check_reader;
    use jxlsig::{Signature, CONTAINER_SIGNATURE};

    fn report(path: &str, bytes: &[u8]) -> FileReport {
        let signature = check_reader(bytes).unwrap();
        FileReport {
            path: path.to_string(),
            signature,
            probe: signature.probe(),
            bytes_inspected: bytes.len(),
            header_len: signature.header_len(),
            prefix: bytes.to_vec(),
        }
    }

    fn render(format: OutputFormat, reports: &[FileReport]) -> String {
        let mut out = Vec::new();
        write_reports(&mut out, format, reports).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_csv_goes_through_the_given_writer() {
        let reports = [
            report("a.jxl", &CONTAINER_SIGNATURE),
            report("b.png", b"\x89PNG\r\n\x1a\n"),
        ];
        assert_eq!(reports[0].signature, Signature::Container);
        assert_eq!(
            render(OutputFormat::Csv, &reports),
            "path,signature,probe,bytes_inspected,header_len\n\
             a.jxl,container,match,12,12\n\
             b.png,invalid,no_match,8,0\n"
        );
    }

    #[test]
    fn test_text_and_json_keep_order() {
        let reports = [report("x", &[0xFF, 0x0A]), report("y", &[])];
        assert_eq!(
            render(OutputFormat::Text, &reports),
            "x: codestream (match)\ny: not_enough_bytes (inconclusive)\n"
        );

        let json = render(OutputFormat::Json, &reports);
        let lines: Vec<serde_json::Value> =
            json.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
        assert_eq!(lines[0]["path"], "x");
        assert_eq!(lines[1]["probe"], "inconclusive");
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert!(OutputFormat::from_str("xml").is_err());
    }
}
