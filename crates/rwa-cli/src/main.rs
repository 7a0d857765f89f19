use clap::{Parser, Subcommand, ValueEnum};
use rwa_codegen::{ContractConfig, SnapshotItem, StudioConfig};
use serde::Serialize;
use std::path::Path;

#[derive(Parser)]
#[command(name = "rwa-studio")]
#[command(about = "RWA Studio: Solidity contract generator and highlighter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Highlight a Solidity file
    Highlight {
        /// Input .sol file
        path: String,

        /// Substring to mark as active (repeatable)
        #[arg(long = "active", value_name = "TEXT")]
        active: Vec<String>,

        #[arg(long, value_enum, default_value_t = HighlightFormat::Html)]
        format: HighlightFormat,

        /// Studio config file (theme)
        #[arg(long)]
        config: Option<String>,
    },

    /// Generate the interest-note contract
    Generate {
        /// Studio config file (contract values and theme)
        #[arg(long)]
        config: Option<String>,

        #[arg(long)]
        asset_name: Option<String>,

        #[arg(long)]
        coupon_bps: Option<u64>,

        #[arg(long)]
        max_supply: Option<u64>,

        #[arg(long)]
        admin: Option<String>,

        /// Governance row shown in the snapshot
        #[arg(long)]
        governance_model: Option<String>,

        /// Extra line appended to the governance checklist
        #[arg(long)]
        governance_notes: Option<String>,

        #[arg(long, value_enum, default_value_t = GenerateFormat::Solidity)]
        format: GenerateFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<String>,
    },

    /// Validate a studio config file
    Check {
        #[arg(long)]
        config: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum HighlightFormat {
    Html,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GenerateFormat {
    Solidity,
    Html,
    Json,
}

/// Contract values given on the command line.
#[derive(Debug, Default)]
struct Overrides {
    asset_name: Option<String>,
    coupon_bps: Option<u64>,
    max_supply: Option<u64>,
    admin: Option<String>,
    governance_model: Option<String>,
    governance_notes: Option<String>,
}

#[derive(Serialize)]
struct GenerateOutput<'a> {
    source: &'a str,
    changed: &'a [String],
    snapshot: Vec<SnapshotItem>,
    checklist: Vec<String>,
    segments: Vec<rwa_highlight::StyledSegment>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Highlight {
            path,
            active,
            format,
            config,
        } => cmd_highlight(&path, &active, format, config.as_deref()),
        Command::Generate {
            config,
            asset_name,
            coupon_bps,
            max_supply,
            admin,
            governance_model,
            governance_notes,
            format,
            out,
        } => {
            let overrides = Overrides {
                asset_name,
                coupon_bps,
                max_supply,
                admin,
                governance_model,
                governance_notes,
            };
            cmd_generate(config.as_deref(), overrides, format, out.as_deref());
        }
        Command::Check { config } => cmd_check(config.as_deref()),
    }
}

/// Install a tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        fail(format!("file not found: {path}"));
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => fail(format!("reading {path}: {e}")),
    }
}

fn load_config(path: Option<&str>) -> StudioConfig {
    match path {
        Some(path) => StudioConfig::load(Path::new(path)).unwrap_or_else(|e| fail(e)),
        None => StudioConfig::default(),
    }
}

fn write_output(out: Option<&str>, text: &str) {
    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(path, text) {
                fail(format!("writing {path}: {e}"));
            }
            eprintln!("Wrote: {path}");
        }
        None => println!("{text}"),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| fail(e))
}

fn cmd_highlight(path: &str, active: &[String], format: HighlightFormat, config: Option<&str>) {
    let source = read_source(path);
    let config = load_config(config);

    let text = match format {
        HighlightFormat::Html => rwa_codegen::html::render_source(&source, active, &config.theme),
        HighlightFormat::Json => to_json(&rwa_highlight::highlight(&source, active)),
    };
    write_output(None, &text);
}

fn cmd_generate(
    config: Option<&str>,
    overrides: Overrides,
    format: GenerateFormat,
    out: Option<&str>,
) {
    let studio = load_config(config);
    let contract = apply_overrides(&studio.contract, overrides);
    let changed = rwa_codegen::changed_values(&studio.contract, &contract);
    tracing::debug!(changed = ?changed, "applied command-line overrides");

    let source = rwa_codegen::generate(&contract).unwrap_or_else(|e| fail(e));

    let text = match format {
        GenerateFormat::Solidity => source,
        GenerateFormat::Html => rwa_codegen::html::render_source(&source, &changed, &studio.theme),
        GenerateFormat::Json => to_json(&GenerateOutput {
            source: &source,
            changed: &changed,
            snapshot: contract.snapshot(),
            checklist: contract.governance_checklist(),
            segments: rwa_highlight::highlight(&source, &changed),
        }),
    };
    write_output(out, &text);
}

fn cmd_check(config: Option<&str>) {
    let studio = load_config(config);
    if let Err(e) = studio.contract.validate() {
        fail(e);
    }
    eprintln!("OK: {}", config.unwrap_or("<defaults>"));
}

fn apply_overrides(base: &ContractConfig, overrides: Overrides) -> ContractConfig {
    ContractConfig {
        asset_name: overrides
            .asset_name
            .unwrap_or_else(|| base.asset_name.clone()),
        coupon_bps: overrides.coupon_bps.unwrap_or(base.coupon_bps),
        max_supply: overrides.max_supply.unwrap_or(base.max_supply),
        admin: overrides.admin.unwrap_or_else(|| base.admin.clone()),
        governance_model: overrides
            .governance_model
            .unwrap_or_else(|| base.governance_model.clone()),
        governance_notes: overrides
            .governance_notes
            .unwrap_or_else(|| base.governance_notes.clone()),
    }
}
