use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "masonry", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a gallery once at a fixed container width.
    Layout(LayoutArgs),
    /// Replay a sequence of container resizes on a virtual clock.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct EngineArgs {
    /// Input gallery manifest JSON.
    #[arg(long)]
    gallery: PathBuf,

    /// Engine config JSON; replaces the container/width/column flags.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Container identifier.
    #[arg(long, default_value = "#gallery")]
    container: String,

    /// Reference width at which the layout has `--columns` columns.
    #[arg(long, default_value_t = 300.0)]
    perfect_width: f64,

    /// Column count at the reference width.
    #[arg(long, default_value_t = 2)]
    columns: u32,

    /// Shuffle the packing order on every invocation after the first.
    #[arg(long, default_value_t = false)]
    randomize: bool,

    /// Shuffle seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Height of a caption line below captioned media.
    #[arg(long, default_value_t = 24.0)]
    caption_height: f64,

    /// Write the JSON report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Container width in pixels.
    #[arg(long)]
    container_width: f64,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    engine: EngineArgs,

    /// Container widths; the first is the mount width, each further one is a resize.
    #[arg(long, value_delimiter = ',', required = true)]
    widths: Vec<f64>,

    /// Virtual time between consecutive resizes.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Keep every scheduled pass instead of cancelling superseded ones.
    #[arg(long, default_value_t = false)]
    no_coalesce: bool,
}

#[derive(serde::Serialize)]
struct SimulationOutput<'a> {
    passes_run: u64,
    report: &'a masonry::PassReport,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_config(args: &EngineArgs) -> anyhow::Result<masonry::MasonryConfig> {
    let mut cfg = match &args.config {
        Some(path) => masonry::MasonryConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => masonry::MasonryConfig::new(&args.container, args.perfect_width, args.columns),
    };
    cfg.randomize_order |= args.randomize;
    if args.seed != 0 {
        cfg.seed = args.seed;
    }
    cfg.validate()?;
    Ok(cfg)
}

fn build_surface(
    args: &EngineArgs,
    cfg: &masonry::MasonryConfig,
    width: f64,
) -> anyhow::Result<masonry::MemorySurface> {
    let gallery = masonry::Gallery::from_path(&args.gallery)
        .with_context(|| format!("load gallery '{}'", args.gallery.display()))?;
    let metrics = masonry::GalleryMetrics {
        caption_height_px: args.caption_height,
        ..masonry::GalleryMetrics::default()
    };
    Ok(gallery.build_surface(&cfg.container, width, &metrics)?)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.engine)?;
    let surface = build_surface(&args.engine, &cfg, args.container_width)?;
    let mut engine = masonry::MasonryEngine::init(surface, cfg)?;
    let report = engine.reflow_now()?;
    write_json(args.engine.out.as_deref(), &report)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let Some((&first, rest)) = args.widths.split_first() else {
        anyhow::bail!("--widths needs at least one value");
    };
    let mut cfg = load_config(&args.engine)?;
    if args.no_coalesce {
        cfg.coalesce = false;
    }
    let settle = cfg.settle_delay();
    let surface = build_surface(&args.engine, &cfg, first)?;

    let t0 = Instant::now();
    let mut engine = masonry::MasonryEngine::mount(surface, cfg, t0)?;
    let container = engine.state().container();
    let step = Duration::from_millis(args.interval_ms);

    let mut now = t0;
    for &width in rest {
        now += step;
        engine.poll(now)?;
        engine.surface_mut().set_container_width(container, width)?;
        engine.on_resize(now)?;
    }
    engine.poll(now + settle)?;

    let report = engine
        .last_report()
        .context("no layout pass completed")?;
    let out = SimulationOutput {
        passes_run: engine.passes_completed(),
        report,
    };
    write_json(args.engine.out.as_deref(), &out)
}

fn write_json<T: serde::Serialize>(out: Option<&Path>, value: &T) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            serde_json::to_writer_pretty(f, value).with_context(|| "write report JSON")?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let s = serde_json::to_string_pretty(value).with_context(|| "encode report JSON")?;
            println!("{s}");
        }
    }
    Ok(())
}
