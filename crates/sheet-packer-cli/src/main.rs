use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use serde::Deserialize;
use sheet_packer_core::{pack, to_json_string, to_json_string_pretty, DesignSpec, SheetConfig};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "sheet-packer",
    about = "Lay out print-job design specs on roll media",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a job file and export the layout as JSON
    Pack(PackArgs),
    /// Simple timing bench (packs a generated job once, prints time + occupancy)
    Bench(BenchArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Job file (JSON or YAML): optional sheet parameters plus an items list
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file for the layout JSON (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// Pretty-print the layout JSON
    #[arg(long, default_value_t = true, action=ArgAction::Set, help_heading = "Input/Output")]
    pretty: bool,

    // Layout
    /// Sheet width (overrides the job file)
    #[arg(long, help_heading = "Layout")]
    sheet_width: Option<f64>,
    /// Spacing kept between placed units (overrides the job file)
    #[arg(long, help_heading = "Layout")]
    spacing: Option<f64>,

    // Export
    /// Export layout stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Dry run: compute layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

#[derive(Parser, Debug, Clone)]
struct BenchArgs {
    /// Number of generated units
    #[arg(long, default_value_t = 200)]
    count: usize,
    /// Sheet width for the generated job
    #[arg(long, default_value_t = 1000.0)]
    sheet_width: f64,
    /// Spacing between placed units
    #[arg(long, default_value_t = 0.0)]
    spacing: f64,
    /// RNG seed for the generated job
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(b) => run_bench(b),
    }
}

/// Job file shape. CLI flags take precedence over file values.
#[derive(Debug, Deserialize, Default)]
struct JobFile {
    sheet_width: Option<f64>,
    spacing: Option<f64>,
    #[serde(default)]
    items: Vec<DesignSpec>,
}

fn load_job(path: &Path) -> anyhow::Result<JobFile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase());
    match ext.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("parse YAML job file {}", path.display())),
        _ => serde_json::from_str(&text)
            .with_context(|| format!("parse JSON job file {}", path.display())),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let job = load_job(&args.input)?;

    let sheet_width = args.sheet_width.or(job.sheet_width).context(
        "sheet width not set: add `sheet_width` to the job file or pass --sheet-width",
    )?;
    let mut cfg = SheetConfig::new(sheet_width);
    if let Some(s) = args.spacing.or(job.spacing) {
        cfg.spacing = s;
    }
    cfg.validate()?;
    for item in &job.items {
        item.validate()
            .with_context(|| format!("job file {}", args.input.display()))?;
    }
    info!(
        items = job.items.len(),
        sheet_width = cfg.sheet_width,
        spacing = cfg.spacing,
        "loaded job"
    );

    let result = pack(&job.items, &cfg);
    if !result.unplaced.is_empty() {
        warn!(ids = ?result.unplaced, "some specs could not be placed and are missing from the layout");
    }

    let stats = result.stats(cfg.sheet_width);
    info!(
        placed = stats.num_placed,
        rotated = stats.num_rotated,
        length = format!("{:.2}", stats.total_length),
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "layout computed"
    );

    let json = if args.pretty {
        to_json_string_pretty(&result)?
    } else {
        to_json_string(&result)?
    };
    match &args.out {
        Some(path) if !args.dry_run => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(?path, "layout written");
        }
        _ => println!("{}", json),
    }

    if let Some(stats_path) = &args.export_stats {
        let value = serde_json::json!({
            "placed": stats.num_placed,
            "rotated": stats.num_rotated,
            "unplaced": stats.num_unplaced,
            "total_length": stats.total_length,
            "total_area_used": stats.total_area_used,
            "occupancy": stats.occupancy,
        });
        if !args.dry_run {
            fs::write(stats_path, serde_json::to_string_pretty(&value)?)
                .with_context(|| format!("write {}", stats_path.display()))?;
            info!(?stats_path, "stats exported");
        } else {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

fn run_bench(b: &BenchArgs) -> anyhow::Result<()> {
    use rand::{Rng, SeedableRng};
    // Minimal bench: generate a reproducible job, pack once, print time + occupancy
    let mut rng = rand::rngs::StdRng::seed_from_u64(b.seed);
    let items: Vec<DesignSpec> = (0..b.count)
        .map(|i| {
            let w = rng.gen_range(20.0..=240.0);
            let h = rng.gen_range(20.0..=240.0);
            DesignSpec::new(format!("gen_{}", i), format!("generated {}", i), w, h, 1)
        })
        .collect();
    let cfg = SheetConfig {
        sheet_width: b.sheet_width,
        spacing: b.spacing,
    };
    cfg.validate()?;

    let start = Instant::now();
    let result = pack(&items, &cfg);
    let dur = start.elapsed();
    let stats = result.stats(cfg.sheet_width);
    println!(
        "placed={} length={:.1} occupancy={:.2}% time={}",
        stats.num_placed,
        stats.total_length,
        stats.occupancy * 100.0,
        bench_fmt_dur(dur)
    );
    Ok(())
}

fn bench_fmt_dur(d: Duration) -> String {
    let ms = d.as_secs_f64() * 1000.0;
    if ms >= 1.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{}us", d.as_micros())
    }
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
