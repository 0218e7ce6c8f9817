use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "shotplan", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a shot list and print the full report.
    Report(ReportArgs),
    /// Print only the camera plan suggestions for each shot.
    Plans(PlansArgs),
    /// Print the built-in sample shot list as JSON.
    Sample,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Text,
    Json,
}

impl From<FormatChoice> for shotplan::ReportFormat {
    fn from(value: FormatChoice) -> Self {
        match value {
            FormatChoice::Text => Self::Text,
            FormatChoice::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
struct ReportArgs {
    /// Input shot list JSON (defaults to the built-in sample).
    #[arg(long)]
    shots: Option<PathBuf>,

    /// Project config TOML.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the report format from the config.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlansArgs {
    /// Input shot list JSON (defaults to the built-in sample).
    #[arg(long)]
    shots: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Report(args) => cmd_report(args),
        Command::Plans(args) => cmd_plans(args),
        Command::Sample => cmd_sample(),
    }
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<shotplan::ShotRegistry> {
    match path {
        Some(p) => shotplan::ShotRegistry::from_path(p)
            .with_context(|| format!("load shot list '{}'", p.display())),
        None => Ok(shotplan::sample_registry()?),
    }
}

fn cmd_report(args: ReportArgs) -> anyhow::Result<()> {
    let registry = load_registry(args.shots.as_deref())?;
    let mut config = match &args.config {
        Some(p) => shotplan::ProjectConfig::from_path(p)
            .with_context(|| format!("load project config '{}'", p.display()))?,
        None => shotplan::ProjectConfig::default(),
    };
    if let Some(format) = args.format {
        config.export.format = format.into();
    }

    let analysis = shotplan::analyze(&registry, &config)?;
    let mut report = shotplan::render(&analysis, &config.export)?;
    if !report.ends_with('\n') {
        report.push('\n');
    }

    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, report)
                .with_context(|| format!("write report '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}

fn cmd_plans(args: PlansArgs) -> anyhow::Result<()> {
    let registry = load_registry(args.shots.as_deref())?;
    for shot in &registry {
        println!("Shot {} ({})", shot.index(), shot.action_category());
        let plans = shotplan::suggest_plans(shot);
        if plans.is_empty() {
            println!("  (no plans)");
        }
        for plan in plans {
            println!(
                "  - {} / {} / {} ({:.1} s, {})",
                plan.shot_type,
                plan.movement,
                plan.angle,
                plan.duration_seconds,
                plan.technical_difficulty
            );
        }
    }
    Ok(())
}

fn cmd_sample() -> anyhow::Result<()> {
    let registry = shotplan::sample_registry()?;
    let json = serde_json::to_string_pretty(&registry).context("encode sample shot list")?;
    println!("{json}");
    Ok(())
}
