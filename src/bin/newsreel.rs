use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "newsreel", version)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `newsreel=debug`).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered compositions.
    Compositions,
    /// Build a props JSON file from an SRT file and a narration audio file.
    Props(PropsArgs),
    /// Print the description of a single frame as JSON.
    Frame(FrameArgs),
    /// Write one JSON line per frame for a frame range.
    Timeline(TimelineArgs),
    /// Report precondition violations in a props file.
    Check(CheckArgs),
}

#[derive(Parser, Debug)]
struct PropsArgs {
    /// Input SRT subtitle file.
    #[arg(long)]
    srt: PathBuf,

    /// Input narration audio file.
    #[arg(long)]
    audio: PathBuf,

    /// Optional JSON array of scenes (`[{ "timestamp": 0, "imagePath": "a.png" }]`).
    #[arg(long)]
    scenes: Option<PathBuf>,

    /// Output props JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CompositionArgs {
    /// Input props JSON.
    #[arg(long)]
    props: PathBuf,

    /// Composition id.
    #[arg(long, default_value = newsreel::NEWS_VIDEO_ID)]
    composition: String,

    /// Optional style JSON overriding the composition's style.
    #[arg(long)]
    style: Option<PathBuf>,

    /// Stretch the composition so every subtitle and scene fits.
    #[arg(long, default_value_t = false)]
    fit_duration: bool,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompositionArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    comp: CompositionArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the composition duration.
    #[arg(long)]
    end: Option<u64>,

    /// Output JSON-lines path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input props JSON.
    #[arg(long)]
    props: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);
    match cli.cmd {
        Command::Compositions => cmd_compositions(),
        Command::Props(args) => cmd_props(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Check(args) => cmd_check(args),
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn cmd_compositions() -> anyhow::Result<()> {
    let registry = newsreel::CompositionRegistry::with_defaults();
    for spec in registry.iter() {
        println!(
            "{}\t{} frames\t{}/{} fps\t{}x{}",
            spec.id,
            spec.duration_in_frames,
            spec.fps.num,
            spec.fps.den,
            spec.canvas.width,
            spec.canvas.height
        );
    }
    Ok(())
}

fn cmd_props(args: PropsArgs) -> anyhow::Result<()> {
    let scenes = match &args.scenes {
        Some(path) => newsreel::load_scenes(path)?,
        None => Vec::new(),
    };
    let props = newsreel::prepare_props(&args.srt, &args.audio, scenes)?;
    warn_issues(&props);
    props.write_to_path(&args.out)?;

    tracing::info!(
        subtitles = props.subtitles.len(),
        scenes = props.scenes.len(),
        "wrote {}",
        args.out.display()
    );
    Ok(())
}

fn load_composition(
    args: &CompositionArgs,
) -> anyhow::Result<(newsreel::CompositionSpec, newsreel::RenderProps)> {
    let registry = newsreel::CompositionRegistry::with_defaults();
    let mut spec = registry.get(&args.composition)?.clone();
    if let Some(path) = &args.style {
        spec.style = newsreel::Style::from_path(path)?;
    }

    let props = newsreel::RenderProps::from_path(&args.props)?;
    warn_issues(&props);

    if args.fit_duration {
        let frames = spec.fitted_duration_frames(&props);
        spec = spec.with_duration_frames(frames);
    }
    Ok((spec, props))
}

fn warn_issues(props: &newsreel::RenderProps) {
    for issue in props.validate() {
        tracing::warn!("{issue}");
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (spec, props) = load_composition(&args.comp)?;
    let frame = newsreel::render_frame(&spec, &props, newsreel::FrameIndex(args.frame))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &frame).context("write frame JSON")?;
    writeln!(out)?;
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let (spec, props) = load_composition(&args.comp)?;
    let end = args.end.unwrap_or(spec.duration_in_frames);
    let range =
        newsreel::FrameRange::new(newsreel::FrameIndex(args.start), newsreel::FrameIndex(end))?;
    let threading = newsreel::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let mut out: Box<dyn std::io::Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(create_output(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let stats = newsreel::render_frames_with(&spec, &props, range, &threading, |frame| {
        serde_json::to_writer(&mut out, &frame)?;
        out.write_all(b"\n")
            .context("write timeline line")
            .map_err(newsreel::NewsreelError::from)
    })?;
    out.flush().context("flush timeline output")?;

    tracing::info!(
        frames = stats.frames_total,
        with_subtitle = stats.frames_with_subtitle,
        with_scene = stats.frames_with_scene,
        "timeline complete"
    );
    Ok(())
}

fn create_output(path: &Path) -> anyhow::Result<File> {
    newsreel::ensure_parent_dir(path)?;
    File::create(path).with_context(|| format!("create '{}'", path.display()))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let props = newsreel::RenderProps::from_path(&args.props)?;
    let issues = props.validate();
    if issues.is_empty() {
        println!(
            "ok: {} subtitles, {} scenes",
            props.subtitles.len(),
            props.scenes.len()
        );
        return Ok(());
    }
    for issue in &issues {
        println!("{issue}");
    }
    anyhow::bail!("{} issue(s) found in '{}'", issues.len(), args.props.display())
}
