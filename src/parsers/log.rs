//! Idefix log file field extraction
//!
//! An Idefix run log echoes its input configuration between two long dashed
//! rules, then reports derived run parameters on `Input: ...` lines. This
//! parser recovers the echoed configuration through the ini grammar and
//! extracts the run parameters with anchored captures.

use crate::constants::{
    LOG_COMPONENTS_MARKER, LOG_DIMENSIONS_MARKER, LOG_GRAVITY_MARKER, LOG_INPUT_PARAMS_MARKER,
    is_rule_line,
};
use crate::models::LogReport;
use crate::parsers::{LINES_SOURCE_NAME, ini::parse_ini_lines};
use crate::{Error, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Extract the echoed configuration and run parameters from an Idefix log
pub fn parse_log_file(path: &Path) -> Result<LogReport> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let lines: Vec<&str> = text.lines().collect();
    let report = parse_log_lines(&lines).map_err(|e| e.in_file(path))?;
    debug!(
        "Parsed log {} (input file '{}', {} sections)",
        path.display(),
        report.ini_filename,
        report.config.sections.len()
    );
    Ok(report)
}

/// Extract a log report from already-split log lines
pub fn parse_log_lines<S: AsRef<str>>(lines: &[S]) -> Result<LogReport> {
    let Some(banner) = lines
        .iter()
        .position(|line| line.as_ref().trim().starts_with(LOG_INPUT_PARAMS_MARKER))
    else {
        return Err(eof_error(lines.len(), LOG_INPUT_PARAMS_MARKER));
    };

    let ini_filename = lines[banner]
        .as_ref()
        .split_whitespace()
        .last()
        .map(|token| token.trim_end_matches(':').to_string())
        .unwrap_or_default();

    // The banner is directly followed by a dashed rule; the parameter block
    // runs from the line after that rule to the closing rule.
    let block_start = (banner + 2).min(lines.len());
    let mut block_end = block_start;
    while block_end < lines.len() && !is_rule_line(lines[block_end].as_ref()) {
        block_end += 1;
    }
    if block_end == lines.len() {
        return Err(eof_error(lines.len(), "the closing parameter-block rule"));
    }

    let block: Vec<&str> = lines[block_start..block_end]
        .iter()
        .map(|line| line.as_ref().trim())
        .collect();
    let config = parse_ini_lines(&block).map_err(|e| match e {
        // Re-anchor block-relative line numbers to the whole log
        Error::Parse { line, reason, .. } => {
            Error::parse(LINES_SOURCE_NAME, block_start + line, reason)
        }
        other => other,
    })?;

    let dimensions_re = marker_capture(LOG_DIMENSIONS_MARKER, r"(\d+)");
    let components_re = marker_capture(LOG_COMPONENTS_MARKER, r"(\d+)");
    let gravity_re = marker_capture(LOG_GRAVITY_MARKER, r"\s*([-+.\deE]+)");

    let mut cursor = block_end;
    let dimensions = extract_required(lines, &mut cursor, &dimensions_re, "DIMENSIONS")?;
    let components = extract_required(lines, &mut cursor, &components_re, "COMPONENTS")?;
    let gravity_constant = extract_gravity(lines, cursor, &gravity_re)?;

    Ok(LogReport {
        ini_filename,
        config,
        dimensions,
        components,
        gravity_constant,
    })
}

fn marker_capture(marker: &str, capture: &str) -> Regex {
    Regex::new(&format!("{}{}", regex::escape(marker), capture)).expect("valid regex pattern")
}

fn eof_error(total_lines: usize, looking_for: &str) -> Error {
    Error::parse(
        LINES_SOURCE_NAME,
        total_lines,
        format!("reached end of input while looking for '{}'", looking_for),
    )
}

/// Scan forward for a required integer run parameter, leaving the cursor on
/// the matching line
fn extract_required<S: AsRef<str>>(
    lines: &[S],
    cursor: &mut usize,
    re: &Regex,
    what: &str,
) -> Result<i64> {
    for (offset, line) in lines[*cursor..].iter().enumerate() {
        if let Some(captures) = re.captures(line.as_ref()) {
            let index = *cursor + offset;
            *cursor = index;
            let text = &captures[1];
            return text.parse::<i64>().map_err(|_| {
                Error::parse(
                    LINES_SOURCE_NAME,
                    index + 1,
                    format!("invalid {} value '{}'", what, text),
                )
            });
        }
    }
    Err(eof_error(lines.len(), what))
}

/// Scan forward for the gravity line; absent gravity is not an error
fn extract_gravity<S: AsRef<str>>(lines: &[S], from: usize, re: &Regex) -> Result<Option<f64>> {
    for (offset, line) in lines[from..].iter().enumerate() {
        if let Some(captures) = re.captures(line.as_ref()) {
            let text = &captures[1];
            return text.parse::<f64>().map(Some).map_err(|_| {
                Error::parse(
                    LINES_SOURCE_NAME,
                    from + offset + 1,
                    format!("invalid gravity constant '{}'", text),
                )
            });
        }
    }
    Ok(None)
}
