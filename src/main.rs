// src/main.rs

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use mission_convert::mission::{tie, xvt, xwa};
use mission_convert::{ConversionOptions, LossReport, MissionConverter, NameTable, Platform};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "mission-convert")]
#[command(author, version, about = "Downgrade space-combat missions between TIE, XvT/BoP and XWA", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a JSON mission graph to a simpler platform
    Convert {
        /// Path to the source mission (JSON)
        input: PathBuf,
        /// Source platform (detected from the mission if omitted)
        #[arg(short, long)]
        from: Option<Platform>,
        /// Destination platform
        #[arg(short, long)]
        to: Platform,
        /// Produce BoP instead of XvT
        #[arg(long)]
        bop: bool,
        /// TOML file overriding display names
        #[arg(long, value_name = "FILE")]
        names: Option<PathBuf>,
        /// Output path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the capability constants of a platform
    Limits {
        /// Platform name (TIE, XvT, BoP or XWA)
        platform: Platform,
    },
}

/// Detect the platform of a JSON mission graph from its shape
fn detect_platform(value: &serde_json::Value) -> Result<Platform> {
    let Some(object) = value.as_object() else {
        bail!("Mission file does not contain a JSON object");
    };
    if object.contains_key("region_names") {
        return Ok(Platform::Xwa);
    }
    if let Some(platform) = object.get("platform") {
        let platform: Platform = serde_json::from_value(platform.clone())
            .context("Invalid platform tag in mission")?;
        return Ok(platform);
    }
    if object.contains_key("questions") {
        return Ok(Platform::Tie);
    }
    bail!("Unable to detect mission platform")
}

fn parse_mission<M: DeserializeOwned>(value: serde_json::Value, platform: Platform) -> Result<M> {
    serde_json::from_value(value).with_context(|| format!("Failed to parse {} mission", platform))
}

fn write_mission<M: Serialize>(mission: &M, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(mission)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn report_loss(report: &LossReport, target: Platform, output: Option<&Path>) {
    if output.is_some() {
        report.print_summary(&target.to_string());
    } else if !report.is_empty() {
        // stdout carries the mission
        eprintln!("  Conversion notes for {}:", target);
        eprint!("{}", report);
    }
}

fn convert(
    input: &Path,
    from: Option<Platform>,
    to: Platform,
    bop: bool,
    names: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", input.display()))?;
    let from = match from {
        Some(platform) => platform,
        None => detect_platform(&value)?,
    };
    let to = if bop && to == Platform::Xvt { Platform::Bop } else { to };
    info!("Converting {} from {} to {}", input.display(), from, to);

    let names = match names {
        Some(path) => NameTable::load(path)
            .with_context(|| format!("Failed to load name table {}", path.display()))?,
        None => NameTable::default(),
    };
    let converter = MissionConverter::new(ConversionOptions {
        names,
        xvt_variant: if to.is_xvt_family() { to } else { Platform::Xvt },
    });

    match (from, to) {
        (Platform::Xwa, Platform::Xvt | Platform::Bop) => {
            let src: xwa::Mission = parse_mission(value, from)?;
            let converted = converter.xwa_to_xvt(&src)?;
            write_mission::<xvt::Mission>(&converted.mission, output)?;
            report_loss(&converted.loss_report, to, output);
        }
        (Platform::Xwa, Platform::Tie) => {
            let src: xwa::Mission = parse_mission(value, from)?;
            let converted = converter.xwa_to_tie(&src)?;
            write_mission::<tie::Mission>(&converted.mission, output)?;
            report_loss(&converted.loss_report, to, output);
        }
        (Platform::Xvt | Platform::Bop, Platform::Tie) => {
            let src: xvt::Mission = parse_mission(value, from)?;
            let converted = converter.xvt_to_tie(&src)?;
            write_mission::<tie::Mission>(&converted.mission, output)?;
            report_loss(&converted.loss_report, to, output);
        }
        _ => bail!(
            "Cannot convert {} to {}: only downgrades to a simpler platform are supported",
            from,
            to
        ),
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Convert {
            input,
            from,
            to,
            bop,
            names,
            output,
        }) => convert(&input, from, to, bop, names.as_deref(), output.as_deref()),
        Some(Commands::Limits { platform }) => {
            let limits = toml::to_string_pretty(platform.limits())?;
            println!("# {}", platform);
            print!("{}", limits);
            Ok(())
        }
        None => {
            println!("mission-convert v{}", env!("CARGO_PKG_VERSION"));
            println!("Run 'mission-convert --help' for usage information");
            Ok(())
        }
    }
}
