// src/main.rs
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;

use lead_report::input::AggregatePayload;
use lead_report::report::{build_report, Locale, ReportConfig};
use lead_report::utils::{self, AppError};

/// Command Line Interface for the markdown lead report generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input files: JSON aggregate payloads, or raw markdown with --markdown
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Treat inputs as raw markdown documents instead of JSON payloads
    #[arg(long)]
    markdown: bool,

    /// Path of the rendered HTML document
    #[arg(short, long, default_value = "report.html")]
    output: PathBuf,

    /// Write the metrics payload to this file instead of stdout
    #[arg(long)]
    metrics: Option<PathBuf>,

    /// Brand name shown in the report header and footer
    #[arg(long, default_value = "Gaby & Beauty")]
    brand: String,

    /// Subtitle line under the report title
    #[arg(long, default_value = "Analisis de Conversaciones")]
    tagline: String,

    /// Length of the reporting period in days
    #[arg(long, default_value_t = 7)]
    lookback_days: i64,

    /// Locale for date labels
    #[arg(long, value_enum, default_value = "es")]
    locale: Locale,

    /// Offset from UTC in minutes for the report timezone (default: Panama)
    #[arg(long, default_value_t = -300, allow_hyphen_values = true)]
    utc_offset_minutes: i32,
}

fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting report generation for args: {:?}", args);

    let config = ReportConfig {
        brand: args.brand,
        tagline: args.tagline,
        lookback_days: args.lookback_days,
        locale: args.locale,
        utc_offset_minutes: args.utc_offset_minutes,
    };

    let offset = config.utc_offset().ok_or_else(|| {
        AppError::Config(format!(
            "UTC offset out of range: {} minutes",
            config.utc_offset_minutes
        ))
    })?;
    let now = Utc::now().with_timezone(&offset);

    // 3. Collect the markdown documents from the input files
    let mut docs = Vec::new();
    for path in &args.input {
        tracing::info!("Reading input file: {}", path.display());
        let content = fs::read_to_string(path)?;
        if args.markdown {
            if !content.trim().is_empty() {
                docs.push(content);
            }
        } else {
            let payload: AggregatePayload = serde_json::from_str(&content)?;
            docs.extend(payload.documents());
        }
    }
    tracing::info!("Collected {} markdown document(s)", docs.len());
    if docs.is_empty() {
        tracing::warn!("No markdown documents found; report will show zero leads");
    }

    // 4. Build the report
    let output = build_report(&docs, &config, now);
    tracing::info!(
        "Report built: {} leads ({} hot, {} warm), avg score {}",
        output.total_leads,
        output.hot_leads,
        output.warm_leads,
        output.avg_score
    );

    // 5. Write the HTML document
    fs::write(&args.output, &output.html)?;
    tracing::info!("Saved HTML report to: {}", args.output.display());

    // 6. Emit the metrics payload (HTML excluded; it already went to disk)
    let mut metrics_json = serde_json::to_value(&output)?;
    if let Some(obj) = metrics_json.as_object_mut() {
        obj.remove("html");
    }
    let rendered = serde_json::to_string_pretty(&metrics_json)?;
    match &args.metrics {
        Some(path) => {
            fs::write(path, &rendered)?;
            tracing::info!("Saved metrics payload to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
