use std::{cell::RefCell, io::Write as _, path::PathBuf, rc::Rc};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pathdraw::{
    AnimateOptions, DrawOptions, OFFSET_KEY, PathController, RenderSurface, StrokePath,
    TickOutcome, ValueTree,
};

#[derive(Parser, Debug)]
#[command(name = "pathdraw", version)]
struct Cli {
    /// Log run lifecycle events to stderr.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sample a draw animation and print one JSON object per frame.
    Frames(FramesArgs),
    /// Print the total length of a path.
    Length(PathArgs),
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Input SVG document.
    #[arg(long)]
    svg: PathBuf,

    /// Id of the `<path>` element to draw.
    #[arg(long)]
    id: String,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    path: PathArgs,

    /// Target progress.
    #[arg(long)]
    to: f64,

    /// Progress to jump to before animating.
    #[arg(long, default_value_t = 0.0)]
    from_progress: f64,

    /// Default options as JSON (delay, duration, easing, from, to).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Override run duration in milliseconds.
    #[arg(long)]
    duration: Option<f64>,

    /// Override run delay in milliseconds.
    #[arg(long)]
    delay: Option<f64>,

    /// Override easing (curve name or alias).
    #[arg(long)]
    easing: Option<String>,

    /// Sampling rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Frames(args) => cmd_frames(args),
        Command::Length(args) => cmd_length(args),
    }
}

fn load_path(args: &PathArgs) -> anyhow::Result<StrokePath> {
    let svg = std::fs::read(&args.svg)
        .with_context(|| format!("read svg '{}'", args.svg.display()))?;
    let path = StrokePath::from_svg_document(&svg, &args.id)
        .with_context(|| format!("bind path '{}'", args.id))?;
    Ok(path)
}

fn cmd_length(args: PathArgs) -> anyhow::Result<()> {
    let path = load_path(&args)?;
    println!("{}", path.total_length());
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be positive");

    let surface = load_path(&args.path)?;
    let options = match &args.options {
        Some(p) => {
            let s = std::fs::read_to_string(p)
                .with_context(|| format!("read options '{}'", p.display()))?;
            DrawOptions::from_json(&s)?
        }
        None => DrawOptions::default(),
    };

    let last = Rc::new(RefCell::new(None::<ValueTree>));
    let sink = last.clone();
    let options = options.with_step(move |values, _, _| {
        *sink.borrow_mut() = Some(values.clone());
        Ok(())
    });

    let mut controller = PathController::new(surface, options)?;
    controller.set(args.from_progress)?;

    let mut overrides = AnimateOptions::new();
    overrides.duration = args.duration;
    overrides.delay = args.delay;
    overrides.easing = args.easing;
    let total_ms = overrides
        .duration
        .unwrap_or(controller.options().duration)
        + overrides.delay.unwrap_or(controller.options().delay);
    controller.animate(args.to, overrides, None)?;

    let frame_ms = 1_000.0 / f64::from(args.fps);
    let max_frames = (total_ms.max(0.0) / frame_ms).ceil() as u64 + 2;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    for i in 0..max_frames {
        let t_ms = i as f64 * frame_ms;
        let outcome = controller.tick(t_ms)?;
        if matches!(outcome, TickOutcome::Frame | TickOutcome::Completed) {
            let values = last.borrow_mut().take().unwrap_or_default();
            let line = serde_json::json!({
                "t_ms": t_ms,
                "progress": controller.value(),
                "offset": values.number(OFFSET_KEY),
                "values": values,
            });
            writeln!(out, "{line}").context("write frame")?;
        }
        if matches!(outcome, TickOutcome::Completed | TickOutcome::Idle) {
            break;
        }
    }
    Ok(())
}
