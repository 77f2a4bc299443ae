//! Command-line entry point for the impact analyzer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use impactmate::{
    default_reference, extract_parameters, load_reference, read_toolpath, ImpactAssessment,
    ImpactLog, LogRecord, ResistanceModel,
};

#[derive(Parser)]
#[command(name = "impactmate")]
#[command(about = "3D Print Impact Resistance Analyzer")]
#[command(version)]
struct Cli {
    /// Path to the G-code file to analyze
    #[arg(long)]
    file: PathBuf,

    /// Printing material (e.g. PLA, PETG, ABS, TPU)
    #[arg(long)]
    material: String,

    /// Impact force level to assess against
    #[arg(long, default_value = "MEDIUM (STRIKE)")]
    impact: String,

    /// Custom reference tables (TOML) replacing the built-in ones
    #[arg(long)]
    tables: Option<PathBuf>,

    /// History log location
    #[arg(long, default_value = "impact_log.csv")]
    log: PathBuf,

    /// Skip writing the history log
    #[arg(long)]
    no_log: bool,

    /// Emit the result as pretty JSON instead of the report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let reference = match &cli.tables {
        Some(path) => load_reference(path)
            .with_context(|| format!("Failed to load reference tables from {:?}", path))?,
        None => default_reference(),
    };
    let model = ResistanceModel::new(reference);

    let content = read_toolpath(&cli.file)?;
    let params = extract_parameters(&content);
    let assessment = model.assess(&params, &cli.material, &cli.impact)?;

    // Log rows carry the bare file name, matching the on-screen report.
    let file_name = cli
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.file.display().to_string());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_report(&cli.file, &assessment);
    }

    if !cli.no_log {
        let log = ImpactLog::new(&cli.log)?;
        log.append(&LogRecord::from_assessment(&file_name, &assessment))?;
        if !cli.json {
            println!("Results logged to {}", log.path().display());
            println!("---------------------------------");
        }
    }

    if !cli.json {
        println!();
        println!(
            "Disclaimer: This is a simplified model and not a substitute for \
             real-world testing or professional engineering analysis (FEA)."
        );
    }

    Ok(())
}

fn print_report(file: &std::path::Path, assessment: &ImpactAssessment) {
    println!("--- 3D Print Impact Analyzer ---");
    println!("Analyzing file: {}", file.display());
    println!("Material: {}", assessment.material);
    println!("Assessing for impact level: {}", assessment.impact);
    println!("---------------------------------");
    println!("G-Code Parameters Found:");
    println!(
        "  - Infill Density: {}",
        assessment.parameters.infill_density_percent()
    );
    println!("  - Wall Count: {}", assessment.parameters.wall_count);
    println!("  - Layer Height: {}mm", assessment.parameters.layer_height);
    println!("  - Infill Pattern: {}", assessment.parameters.infill_pattern);
    println!("---------------------------------");
    println!(
        "Calculated Resistance Score: {:.2}",
        assessment.resistance_score
    );
    println!("Impact Force to Resist: {}", assessment.impact_force);
    println!("---------------------------------");
    println!("Verdict: {}", assessment.verdict.summary());
    println!("---------------------------------");
}
