// src/report/config.rs

use chrono::{DateTime, Datelike, FixedOffset};
use clap::ValueEnum;

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];
const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Locale used for the date labels embedded in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    Es,
    En,
}

impl Locale {
    fn month_abbr(&self, month: u32) -> &'static str {
        let idx = (month.saturating_sub(1) as usize).min(11);
        match self {
            Locale::Es => MONTHS_ES[idx],
            Locale::En => MONTHS_EN[idx],
        }
    }
}

/// Explicit replacement for the ambient date/locale/branding globals of
/// the low-code host this report generator used to run in.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Brand name shown in the header and footer.
    pub brand: String,
    /// Subtitle line under the report title.
    pub tagline: String,
    /// Length of the reporting period, counted back from `now`.
    pub lookback_days: i64,
    pub locale: Locale,
    /// Offset from UTC in minutes (e.g. -300 for Panama).
    pub utc_offset_minutes: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            brand: "Gaby & Beauty".to_string(),
            tagline: "Analisis de Conversaciones".to_string(),
            lookback_days: 7,
            locale: Locale::Es,
            utc_offset_minutes: -300,
        }
    }
}

impl ReportConfig {
    /// Fixed offset for the configured timezone. `None` when the offset in
    /// minutes overflows or falls outside the +/-24h range chrono accepts.
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
    }

    /// `02 ago 2026` / `02 Aug 2026` depending on the locale.
    pub fn format_date(&self, date: DateTime<FixedOffset>) -> String {
        format!(
            "{:02} {} {}",
            date.day(),
            self.locale.month_abbr(date.month()),
            date.year()
        )
    }

    /// Human-readable label for the reporting period ending at `now`.
    pub fn period_label(&self, now: DateTime<FixedOffset>) -> String {
        let start = now - chrono::Duration::days(self.lookback_days);
        format!("{} - {}", self.format_date(start), self.format_date(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(offset_minutes: i32, y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(offset_minutes * 60)
            .unwrap()
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .unwrap()
    }

    #[test]
    fn spanish_date_format() {
        let cfg = ReportConfig::default();
        assert_eq!(cfg.format_date(at(-300, 2026, 8, 2)), "02 ago 2026");
    }

    #[test]
    fn english_date_format() {
        let cfg = ReportConfig {
            locale: Locale::En,
            ..ReportConfig::default()
        };
        assert_eq!(cfg.format_date(at(0, 2026, 12, 25)), "25 Dec 2026");
    }

    #[test]
    fn utc_offset_accepts_sane_values() {
        let cfg = ReportConfig::default();
        assert_eq!(
            cfg.utc_offset(),
            Some(FixedOffset::east_opt(-300 * 60).unwrap())
        );
    }

    #[test]
    fn utc_offset_rejects_out_of_range_and_overflowing_values() {
        let out_of_range = ReportConfig {
            utc_offset_minutes: 24 * 60,
            ..ReportConfig::default()
        };
        assert_eq!(out_of_range.utc_offset(), None);

        // would overflow i32 if multiplied into seconds unchecked
        let overflowing = ReportConfig {
            utc_offset_minutes: i32::MAX,
            ..ReportConfig::default()
        };
        assert_eq!(overflowing.utc_offset(), None);
    }

    #[test]
    fn period_label_spans_lookback_days() {
        let cfg = ReportConfig::default();
        let label = cfg.period_label(at(-300, 2026, 8, 25));
        assert_eq!(label, "18 ago 2026 - 25 ago 2026");
    }
}
