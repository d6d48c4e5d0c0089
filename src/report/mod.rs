// src/report/mod.rs
pub mod config;
pub mod html;
pub mod metrics;

pub use config::{Locale, ReportConfig};
pub use metrics::LeadMetrics;

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::extractors::{bullets, parse_tables, script_snippet, section};

/// Free-text findings pulled out of the combined markdown: the insight
/// bullet lists plus the suggested message script per lead temperature.
#[derive(Debug, Clone, Default)]
pub struct Insights {
    pub objections: Vec<String>,
    pub courses: Vec<String>,
    pub drop_offs: Vec<String>,
    pub recommendations: Vec<String>,
    pub questions: Vec<String>,
    pub script_hot: String,
    pub script_warm: String,
    pub script_cold: String,
}

impl Insights {
    /// Extracts every insight from the combined markdown of all documents.
    /// Missing sections simply come back empty.
    pub fn extract(md: &str) -> Self {
        Self {
            objections: bullets(&section(md, &["Objeciones"])),
            courses: bullets(&section(md, &["Cursos"])),
            drop_offs: bullets(&section(md, &["Puntos", "caen", "caida"])),
            recommendations: bullets(&section(md, &["Recomendaci"])),
            questions: bullets(&section(md, &["Preguntas"])),
            script_hot: script_snippet(md, "Hot"),
            script_warm: script_snippet(md, "Warm"),
            script_cold: script_snippet(md, "Cold|Frio|Frío"),
        }
    }
}

/// Everything one invocation produces: the rendered document, the metric
/// scalars, and two counters for debugging upstream wiring.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput {
    pub html: String,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
    pub total_leads: usize,
    pub hot_leads: usize,
    pub warm_leads: usize,
    pub avg_score: u32,
    /// Human-readable date range label, e.g. `18 ago 2026 - 25 ago 2026`.
    pub period: String,
    pub docs_received: usize,
    pub leads_parsed: usize,
}

/// Builds the full report from the markdown documents: parses every table
/// in every document into one record sequence, extracts insights from the
/// joined text, computes metrics, and renders the themed HTML document.
///
/// `now` is passed in explicitly so callers control clock and timezone;
/// the period runs from `now - config.lookback_days` to `now`.
pub fn build_report(
    docs: &[String],
    config: &ReportConfig,
    now: DateTime<FixedOffset>,
) -> ReportOutput {
    tracing::info!("building report from {} document(s)", docs.len());

    let records: Vec<_> = docs.iter().flat_map(|md| parse_tables(md)).collect();
    let full_md = docs.join("\n\n");
    let insights = Insights::extract(&full_md);
    let lead_metrics = metrics::compute(&records);
    let period = config.period_label(now);

    let html = html::render_document(&records, &insights, &lead_metrics, &period, config);
    tracing::info!(
        "report rendered: {} leads, {} bytes of HTML",
        lead_metrics.total,
        html.len()
    );

    ReportOutput {
        html,
        generated_at: now.to_rfc3339(),
        total_leads: lead_metrics.total,
        hot_leads: lead_metrics.hot,
        warm_leads: lead_metrics.warm,
        avg_score: lead_metrics.avg_score,
        period,
        docs_received: docs.len(),
        leads_parsed: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(-5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2026, 8, 25, 9, 30, 0)
            .unwrap()
    }

    const SAMPLE_MD: &str = "\
# Analisis Semanal

| Lead ID | Estado | Intent Score | Curso | Prioridad |
|---------|--------|--------------|-------|-----------|
| L-001   | HOT    | 85           | Uñas  | P1        |
| L-002   | Warm   | 60           | Pestañas | P2     |

## Objeciones Frecuentes
- Precio muy alto
- No tiene tiempo

## Guiones
**Hot — cierre directo:**
> Hola! Vi que estas lista para inscribirte, te ayudo con el cupo?

## Preguntas de Calificacion
- Que presupuesto manejas?
";

    #[test]
    fn end_to_end_report_from_one_document() {
        let docs = vec![SAMPLE_MD.to_string()];
        let out = build_report(&docs, &ReportConfig::default(), test_now());

        assert_eq!(out.total_leads, 2);
        assert_eq!(out.hot_leads, 1);
        assert_eq!(out.warm_leads, 1);
        assert_eq!(out.avg_score, 73); // round((85 + 60) / 2)
        assert_eq!(out.docs_received, 1);
        assert_eq!(out.leads_parsed, 2);
        assert_eq!(out.period, "18 ago 2026 - 25 ago 2026");
        assert!(out.generated_at.starts_with("2026-08-25T09:30:00"));

        assert!(out.html.contains("L-001"));
        assert!(out.html.contains("Precio muy alto"));
        assert!(out.html.contains("te ayudo con el cupo"));
        assert!(out.html.contains(r#"data-n="01""#));
    }

    #[test]
    fn records_accumulate_across_documents() {
        let docs = vec![
            "| A | Estado |\n|---|---|\n| 1 | hot |".to_string(),
            "| B | Estado |\n|---|---|\n| 2 | warm |".to_string(),
        ];
        let out = build_report(&docs, &ReportConfig::default(), test_now());
        assert_eq!(out.total_leads, 2);
        assert_eq!(out.hot_leads, 1);
        assert_eq!(out.warm_leads, 1);
        assert_eq!(out.docs_received, 2);
    }

    #[test]
    fn sections_are_found_across_document_boundaries() {
        let docs = vec![
            "intro only, no sections".to_string(),
            "## Recomendaciones\n- Responder mas rapido".to_string(),
        ];
        let out = build_report(&docs, &ReportConfig::default(), test_now());
        assert!(out.html.contains("Responder mas rapido"));
    }

    #[test]
    fn zero_documents_produce_empty_report_with_placeholder() {
        let out = build_report(&[], &ReportConfig::default(), test_now());
        assert_eq!(out.total_leads, 0);
        assert_eq!(out.hot_leads, 0);
        assert_eq!(out.warm_leads, 0);
        assert_eq!(out.avg_score, 0);
        assert_eq!(out.docs_received, 0);
        assert_eq!(out.leads_parsed, 0);
        assert!(out.html.contains("No se pudieron parsear leads"));
        assert!(out.html.contains("Sin datos"));
    }

    #[test]
    fn output_serializes_to_json() {
        let out = build_report(&[], &ReportConfig::default(), test_now());
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["total_leads"], 0);
        assert!(json["html"].as_str().unwrap().starts_with("<!DOCTYPE html>"));
    }
}
