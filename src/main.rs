use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{presets::UTF8_FULL, Table};
use core_types::{AnalysisResult, Category, StrategicReport};
use engine::Orchestrator;
use std::net::SocketAddr;
use std::path::PathBuf;

/// The main entry point for the FODA strategic analysis tool.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine, the variables may come from the environment.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let settings = configuration::load_settings(cli.config.as_deref())?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args, &settings).await,
        Commands::Serve(args) => {
            let addr = match args.addr {
                Some(addr) => addr,
                None => settings.server.address().parse().with_context(|| {
                    format!("invalid listen address '{}'", settings.server.address())
                })?,
            };
            web_server::run_server(&settings, addr).await
        }
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Quantitative FODA (SWOT) analysis of higher-education indicators.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the analysis once and print the report.
    Analyze(AnalyzeArgs),
    /// Serve the analysis over HTTP.
    Serve(ServeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Only show the details of one quadrant (e.g., "strengths").
    #[arg(long)]
    aspect: Option<Category>,

    /// Print the report as JSON instead of tables.
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
struct ServeArgs {
    /// Socket address to listen on (e.g., "127.0.0.1:3000").
    #[arg(long)]
    addr: Option<SocketAddr>,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

async fn handle_analyze(
    args: AnalyzeArgs,
    settings: &configuration::settings::Settings,
) -> anyhow::Result<()> {
    tracing::debug!(overrides = settings.series.len(), "Running a one-shot analysis.");
    let orchestrator = Orchestrator::with_overrides(&settings.series)?;
    let mut report = orchestrator.run_full_analysis().await?;
    if let Some(category) = args.aspect {
        report = report.filter_by(category);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &StrategicReport) {
    let summary = &report.summary;

    println!("\nFODA Strategic Report ({})", report.timestamp.format("%Y-%m-%d %H:%M:%S UTC"));

    let mut scores = Table::new();
    scores
        .load_preset(UTF8_FULL)
        .set_header(vec!["Category", "Score", "Indicators", "Trend"]);
    for category in Category::ALL {
        let score = summary.score(category);
        scores.add_row(vec![
            category.to_string(),
            format!("{:.4}", score.score),
            score.count.to_string(),
            score.trend.to_string(),
        ]);
    }
    println!("{scores}");
    println!(
        "Competitiveness ratio: {:.4} ({})",
        summary.competitiveness_ratio, summary.overall_health
    );

    for category in Category::ALL {
        if let Some(results) = report.details.get(category) {
            println!("\n{}", category);
            println!("{}", results_table(results));
        }
    }

    let strategies = &report.strategies;
    for (label, lines) in [
        ("FO (strengths x opportunities)", &strategies.fo),
        ("FA (strengths x threats)", &strategies.fa),
        ("DO (weaknesses x opportunities)", &strategies.do_),
        ("DA (weaknesses x threats)", &strategies.da),
    ] {
        println!("\n{label}");
        for line in lines {
            println!("  - {line}");
        }
    }
}

fn results_table(results: &[AnalysisResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Indicator",
        "Value",
        "Trend",
        "Short",
        "Medium",
        "Long",
        "Confidence",
    ]);
    for result in results {
        table.add_row(vec![
            result.indicator.clone(),
            format!("{:.4}", result.value),
            result.trend.to_string(),
            format!("{:.4}", result.projection.short_term),
            format!("{:.4}", result.projection.medium_term),
            format!("{:.4}", result.projection.long_term),
            format!("{:.2}", result.confidence),
        ]);
    }
    table
}
