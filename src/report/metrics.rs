// src/report/metrics.rs

use crate::extractors::field::{fold, resolve};
use crate::extractors::table::Record;

/// Candidate column names for the lead status field, tried in order.
pub const STATUS_FIELDS: &[&str] = &["Estado", "Status", "State"];
/// Candidate column names for the intent score field, tried in order.
pub const SCORE_FIELDS: &[&str] = &["Intent Score", "Score", "Puntaje"];

/// Summary figures for one report run. Computed once, read-only after.
/// `ReportOutput` carries the scalars flat, so this stays a plain struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LeadMetrics {
    pub total: usize,
    pub hot: usize,
    pub warm: usize,
    pub avg_score: u32,
}

/// Computes the KPI strip figures over all parsed records.
///
/// Hot/warm are case-insensitive substring tests on the resolved status.
/// The average only covers records whose resolved score parses to a
/// positive leading integer; unparsable scores are excluded from the
/// denominator, and no valid score at all averages to zero.
pub fn compute(records: &[Record]) -> LeadMetrics {
    let hot = records
        .iter()
        .filter(|r| fold(resolve(r, STATUS_FIELDS)).contains("hot"))
        .count();
    let warm = records
        .iter()
        .filter(|r| fold(resolve(r, STATUS_FIELDS)).contains("warm"))
        .count();

    let scores: Vec<i64> = records
        .iter()
        .filter_map(|r| leading_int(resolve(r, SCORE_FIELDS)))
        .filter(|&n| n > 0)
        .collect();
    let avg_score = if scores.is_empty() {
        0
    } else {
        (scores.iter().sum::<i64>() as f64 / scores.len() as f64).round() as u32
    };

    let metrics = LeadMetrics {
        total: records.len(),
        hot,
        warm,
        avg_score,
    };
    tracing::debug!(
        "metrics: total={} hot={} warm={} avg_score={}",
        metrics.total,
        metrics.hot,
        metrics.warm,
        metrics.avg_score
    );
    metrics
}

/// Parses the leading integer of a string the way `parseInt` does:
/// leading whitespace skipped, optional sign, then a digit prefix.
/// `"80 pts"` -> 80, `"abc"` -> None.
pub(crate) fn leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<i64>().ok().map(|n| sign * n)
}
