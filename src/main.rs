use std::path::PathBuf;
use std::time::Instant;

use ancestree::utils::logging::init_logging;
use ancestree::{
    AncestryConfig, DataSources, HighlightMode, PatientSummary, RecordStore, RiskEvaluator,
    TreeView, ViewSelection, summary_table, write_table,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "ancestree")]
#[command(about = "Family trees and hereditary disease risk from patient tables")]
#[command(version)]
struct Args {
    /// Directory holding patients, child, disease and patient_disease tables
    data_dir: PathBuf,

    /// JSON configuration file (age gap, unknown name, risk rules)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the tree view as JSON
    View {
        /// Focus on this patient's family
        #[arg(short, long)]
        patient: Option<String>,

        /// Mark carriers of this disease
        #[arg(short, long)]
        disease: Option<String>,

        /// Diseases to highlight, comma separated
        #[arg(long, value_delimiter = ',')]
        highlight: Vec<String>,

        /// Match any or all highlighted diseases
        #[arg(short, long, default_value = "any")]
        mode: HighlightMode,
    },

    /// Assess hereditary risk of a disease for a patient
    Risk { patient: String, disease: String },

    /// List the patients matching a set of diseases
    Highlight {
        /// Match any or all of the diseases
        #[arg(short, long, default_value = "any")]
        mode: HighlightMode,

        /// Disease identifiers
        #[arg(value_delimiter = ',')]
        diseases: Vec<String>,
    },

    /// Print the patient summary table, or write it to a file
    Summary {
        /// Output .csv or .parquet file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the patients that could be recorded as parents of a child
    EligibleParents { child: String },
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AncestryConfig::from_json_file(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?,
        None => AncestryConfig::default(),
    };

    let start = Instant::now();
    let sources = DataSources::detect(&args.data_dir);
    let store = RecordStore::load(sources, config)
        .with_context(|| format!("Failed to load tables from {}", args.data_dir.display()))?;
    info!("Store ready in {:?}", start.elapsed());

    match args.command {
        Command::View {
            patient,
            disease,
            highlight,
            mode,
        } => {
            let selection = ViewSelection {
                patient,
                disease,
                highlighted: highlight,
                mode,
            };
            let view = TreeView::build(&store, &selection)?;
            println!("{}", view.to_json()?);
        }
        Command::Risk { patient, disease } => {
            let report = RiskEvaluator::new(&store)
                .assess(&patient, &disease)
                .with_context(|| format!("Failed to assess {disease} for {patient}"))?;
            print_json(&report)?;
        }
        Command::Highlight { mode, diseases } => {
            let matches = RiskEvaluator::new(&store).matching_patients(&diseases, mode)?;
            info!("{} patients match ({})", matches.len(), mode.label());
            print_json(&matches)?;
        }
        Command::Summary { output } => {
            let rows: Vec<PatientSummary> = summary_table(&store)?;
            match output {
                Some(path) => write_table(&path, &rows)
                    .with_context(|| format!("Failed to write summary to {}", path.display()))?,
                None => print_json(&rows)?,
            }
        }
        Command::EligibleParents { child } => {
            let ids: Vec<&str> = store
                .eligible_parents(&child)?
                .into_iter()
                .map(|patient| patient.id.as_str())
                .collect();
            print_json(&ids)?;
        }
    }

    Ok(())
}
