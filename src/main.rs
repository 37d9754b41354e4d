use clap::Parser;
use color_eyre::Result;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use workstation_manager::config::{DeletePolicy, StoreConfig, UnassignMode};
use workstation_manager::export::{
    export_assignments_csv, export_branches_csv, export_json, export_report_csv,
    export_workstations_csv,
};
use workstation_manager::seed::SeedData;
use workstation_manager::store::Store;
use workstation_manager::ui::App;

#[derive(Parser, Debug)]
#[command(name = "workstation-manager")]
#[command(about = "Workstation Manager - assign desks, browse offices and floor plans")]
#[command(version)]
struct Args {
    /// JSON seed file (built-in demo data when omitted)
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Administrator name recorded on new assignments
    #[arg(long, value_name = "NAME")]
    admin: Option<String>,

    /// Drop released assignment records or keep them as inactive
    #[arg(long, value_enum)]
    unassign_mode: Option<UnassignMode>,

    /// Refuse deletions with dependents or cascade them
    #[arg(long, value_enum)]
    delete_policy: Option<DeletePolicy>,

    /// Write logs to this file (RUST_LOG controls the level)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,

    /// Print consistency problems in the seed and exit
    #[arg(long)]
    audit: bool,

    /// Export a JSON snapshot of all records
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Export workstations to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export assignment records to CSV
    #[arg(long, value_name = "FILE")]
    assignments_csv: Option<PathBuf>,

    /// Export the office premises report to CSV
    #[arg(long, value_name = "FILE")]
    report_csv: Option<PathBuf>,

    /// Export the per-branch area breakdown to CSV
    #[arg(long, value_name = "FILE")]
    branches_csv: Option<PathBuf>,
}

impl Args {
    fn store_config(&self) -> Result<StoreConfig> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)?,
            None => StoreConfig::default(),
        };
        if let Some(admin) = &self.admin {
            config.administrator.clone_from(admin);
        }
        if let Some(mode) = self.unassign_mode {
            config.unassign_mode = mode;
        }
        if let Some(policy) = self.delete_policy {
            config.delete_policy = policy;
        }
        Ok(config)
    }

    fn is_batch(&self) -> bool {
        self.audit
            || self.json.is_some()
            || self.csv.is_some()
            || self.assignments_csv.is_some()
            || self.report_csv.is_some()
            || self.branches_csv.is_some()
    }
}

/// The terminal belongs to the dashboard, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
    }

    let config = args.store_config()?;
    let seed = match &args.seed {
        Some(path) => SeedData::load(path)?,
        None => SeedData::builtin(),
    };
    let store = Store::from_seed(seed, config);
    tracing::info!(
        properties = store.properties().len(),
        workstations = store.workstations().len(),
        employees = store.employees().len(),
        "store loaded"
    );

    if args.audit {
        let issues = store.audit();
        for issue in &issues {
            println!("{issue}");
        }
        println!("{} inconsistencies found", issues.len());
    }

    if let Some(json_path) = &args.json {
        export_json(&store, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if let Some(csv_path) = &args.csv {
        export_workstations_csv(&store, csv_path)?;
        println!("Exported workstations to CSV: {}", csv_path.display());
    }

    if let Some(csv_path) = &args.assignments_csv {
        export_assignments_csv(&store, csv_path)?;
        println!("Exported assignments to CSV: {}", csv_path.display());
    }

    if let Some(csv_path) = &args.report_csv {
        export_report_csv(&store, csv_path)?;
        println!("Exported report to CSV: {}", csv_path.display());
    }

    if let Some(csv_path) = &args.branches_csv {
        export_branches_csv(&store, csv_path)?;
        println!("Exported branch breakdown to CSV: {}", csv_path.display());
    }

    if args.is_batch() {
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = App::new(store).run(terminal);
    ratatui::restore();
    result
}
