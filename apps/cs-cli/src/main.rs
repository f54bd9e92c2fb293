mod messages;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cs_core::units::{amps, celsius, m, mm2, volts};
use cs_engine::{
    AmpacityEstimate, SizeCatalog, SizeRow, SizingRequest, SizingResult, ValidationError,
    compute_sizing, resolve_material, size_table,
};
use cs_study::{CaseReport, StudyError, StudyReport};
use cs_tables::filter_material_catalog;
use messages::Lang;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Study(#[from] StudyError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "cablesize")]
#[command(about = "Cable cross-section sizing and thermal derating", long_about = None)]
struct Cli {
    /// Log engine decisions at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one candidate size and recommend the minimum safe size
    Size {
        #[command(flatten)]
        request: RequestArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Evaluate every catalog size for one cable run
    Table {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// List conductor materials
    Materials {
        /// Filter by name, symbol or alias
        #[arg(short, long)]
        query: Option<String>,
    },
    /// List the standard cross-sections
    Sizes,
    /// Validate a study file (YAML or JSON)
    Validate {
        /// Path to the study file
        study_path: PathBuf,
    },
    /// Evaluate every case in a study file
    Study {
        /// Path to the study file
        study_path: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Calculator inputs; defaults are the calculator's reset state.
#[derive(Args)]
struct RequestArgs {
    /// Load current in amperes
    #[arg(long, default_value_t = 10.0)]
    current: f64,
    /// One-way distance in metres
    #[arg(long, default_value_t = 10.0)]
    distance: f64,
    /// Supply voltage in volts
    #[arg(long, default_value_t = 12.0)]
    voltage: f64,
    /// Conductor material (copper, aluminum, or an alias)
    #[arg(long, default_value = "copper")]
    material: String,
    /// Maximum voltage drop in percent
    #[arg(long, default_value_t = 3.0)]
    max_drop: f64,
    /// Ambient temperature in °C
    #[arg(long, default_value_t = 25.0, allow_negative_numbers = true)]
    ambient: f64,
    /// Candidate cross-section in mm²
    #[arg(long, default_value_t = 2.5)]
    size: f64,
}

impl RequestArgs {
    fn to_request(&self) -> CliResult<SizingRequest> {
        Ok(SizingRequest {
            current: amps(self.current),
            distance: m(self.distance),
            voltage: volts(self.voltage),
            material: resolve_material(&self.material)?,
            max_voltage_drop_percent: self.max_drop,
            ambient: celsius(self.ambient),
            cross_section: mm2(self.size),
        })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            ExitCode::FAILURE
        }
    }
}

fn error_line(err: &CliError) -> String {
    format!("Error: {err}")
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Size { request, output } => cmd_size(&request, &output),
        Commands::Table { request } => cmd_table(&request),
        Commands::Materials { query } => {
            cmd_materials(query.as_deref().unwrap_or(""));
            Ok(())
        }
        Commands::Sizes => {
            cmd_sizes();
            Ok(())
        }
        Commands::Validate { study_path } => cmd_validate(&study_path),
        Commands::Study { study_path, output } => cmd_study(&study_path, &output),
    }
}

fn cmd_size(args: &RequestArgs, output: &OutputArgs) -> CliResult<()> {
    let request = args.to_request()?;
    let result = compute_sizing(&request)?;

    match output.format {
        Format::Json => {
            let report = CaseReport::from_result("cli", "command line", &result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Text => print_result(&result, request.max_voltage_drop_percent, output.lang),
    }
    Ok(())
}

fn print_result(result: &SizingResult, limit_percent: f64, lang: Lang) {
    println!("{}", messages::status_headline(result.status, lang));
    println!(
        "  Candidate size:     {} ({})",
        result.candidate,
        messages::material_name(result.material, lang)
    );
    println!("  Recommended size:   {}", result.recommended_size);
    println!(
        "  Minimum area:       {:.2} mm²",
        result.minimum_cross_section_mm2
    );
    println!("  Resistance:         {:.4} Ω", result.resistance_ohm());
    println!(
        "  Voltage drop:       {:.2} V ({:.2}%)",
        result.voltage_drop_v(),
        result.voltage_drop_percent
    );
    println!("  Power loss:         {:.2} W", result.power_loss_w());
    println!("  Cable temperature:  {:.1} °C", result.temperature_c());
    match result.ampacity {
        AmpacityEstimate::Computed { amps } => {
            println!("  Max current:        {:.1} A", amps);
            println!("  Load:               {:.0}%", result.load_ratio() * 100.0);
        }
        AmpacityEstimate::Fallback { amps } => println!(
            "  Max current:        {:.1} A ({})",
            amps,
            messages::ampacity_fallback(lang)
        ),
    }

    if !result.recommendation_meets_limit {
        println!("\n! {}", messages::no_size_meets_limit(limit_percent, lang));
    }

    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  • {}", messages::warning(warning, lang));
        }
    }
}

fn cmd_table(args: &RequestArgs) -> CliResult<()> {
    let request = args.to_request()?;
    let rows = size_table(&request)?;

    println!(
        "{:>8}  {:>10}  {:>9}  {:>8}  {:>10}  {:>8}  {:>9}",
        "mm²", "R [Ω]", "ΔV [V]", "ΔV [%]", "P [W]", "T [°C]", "Imax [A]"
    );
    for row in &rows {
        print_row(row);
    }
    Ok(())
}

fn print_row(row: &SizeRow) {
    let marker = match (row.within_drop_limit, row.within_temperature_limit) {
        (true, true) => "ok",
        (false, true) => "drop",
        (true, false) => "hot",
        (false, false) => "drop+hot",
    };
    let ampacity = match row.ampacity {
        AmpacityEstimate::Computed { amps } => format!("{:.1}", amps),
        AmpacityEstimate::Fallback { amps } => format!("~{:.0}", amps),
    };
    println!(
        "{:>8}  {:>10.4}  {:>9.3}  {:>8.2}  {:>10.2}  {:>8.1}  {:>9}  {}",
        row.size.mm2(),
        row.resistance_ohm,
        row.voltage_drop_v,
        row.voltage_drop_percent,
        row.power_loss_w,
        row.temperature_c,
        ampacity,
        marker
    );
}

fn cmd_materials(query: &str) {
    let entries = filter_material_catalog(query);
    if entries.is_empty() {
        println!("No materials match '{}'", query);
        return;
    }
    for entry in entries {
        let props = entry.material.properties();
        println!(
            "{:<9} {:<3} {} / {}",
            entry.canonical_id, entry.symbol, entry.display_name, entry.display_name_tr
        );
        println!(
            "          ρ = {} Ω·mm²/m, α = {} /°C, max {} °C, ampacity ×{:.2}",
            props.resistivity_ohm_mm2_per_m,
            props.temp_coefficient_per_c,
            props.max_temperature_c,
            props.ampacity_factor
        );
    }
}

fn cmd_sizes() {
    let sizes: Vec<String> = SizeCatalog::standard()
        .iter()
        .map(|size| size.mm2().to_string())
        .collect();
    println!("Standard cross-sections (mm²): {}", sizes.join(", "));
}

fn cmd_validate(study_path: &Path) -> CliResult<()> {
    println!("Validating study: {}", study_path.display());
    let study = cs_study::load(study_path)?;
    println!("✓ Study is valid ({} cases)", study.cases.len());
    Ok(())
}

fn cmd_study(study_path: &Path, output: &OutputArgs) -> CliResult<()> {
    let study = cs_study::load(study_path)?;
    tracing::debug!(path = %study_path.display(), cases = study.cases.len(), "study loaded");
    let report = cs_study::evaluate_study(&study)?;

    match output.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Text => print_study(&report, output.lang),
    }
    Ok(())
}

fn print_study(report: &StudyReport, lang: Lang) {
    println!("Study: {}", report.name);
    for case in &report.cases {
        println!(
            "  [{:<7}] {}  {} mm² -> {} mm²  {:.2}%  {:.1} °C",
            case.status.label().to_uppercase(),
            case.name,
            case.cross_section_mm2,
            case.recommended_mm2,
            case.voltage_drop_percent,
            case.temperature_c
        );
        for warning in &case.warnings {
            println!("      • {}", messages::warning(warning, lang));
        }
    }
    println!(
        "\n{} safe, {} warning, {} danger (worst: {})",
        report.counts.safe,
        report.counts.warning,
        report.counts.danger,
        report.counts.worst()
    );
}
