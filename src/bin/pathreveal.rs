use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use pathreveal::{
    AnimationConfig, CpuRenderer, FrameRGBA, IconSpec, ManualClock, PlaybackHandle,
    RenderSettings, Renderer, Rgba8, TriggerMode,
};

#[derive(Parser, Debug)]
#[command(name = "pathreveal", version)]
struct Cli {
    /// Log engine events to stderr (`-v` debug, `-vv` trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the icon at one point in time as a PNG.
    Frame(FrameArgs),
    /// Print per-frame path states as JSON lines.
    Timeline(TimelineArgs),
    /// Render the whole reveal as a numbered PNG sequence.
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct IconArgs {
    /// Icon file: JSON icon definition or SVG document (by extension).
    #[arg(long)]
    icon: PathBuf,

    /// Animation config JSON. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override seconds per normalized length unit.
    #[arg(long)]
    draw_speed: Option<f64>,

    /// Override seconds between path starts.
    #[arg(long)]
    stagger: Option<f64>,

    /// Skip the fill phase.
    #[arg(long, default_value_t = false)]
    no_fill: bool,
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Output size in pixels (square).
    #[arg(long, default_value_t = 256)]
    size: u32,

    /// Background color as `#RRGGBB[AA]`; transparent when omitted.
    #[arg(long)]
    background: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    icon: IconArgs,
    #[command(flatten)]
    output: OutputArgs,

    /// Seconds since playback start.
    #[arg(long)]
    time: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    #[command(flatten)]
    icon: IconArgs,

    /// Samples per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Seconds to sample; defaults to the full reveal.
    #[arg(long)]
    duration: Option<f64>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    icon: IconArgs,
    #[command(flatten)]
    output: OutputArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Output directory for `frame_NNNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Offline playback: a manual handle started at clock time 0.
struct Offline {
    handle: PlaybackHandle,
    clock: ManualClock,
}

impl Offline {
    fn open(args: &IconArgs) -> anyhow::Result<Self> {
        let icon = load_icon(&args.icon)?;
        let mut config = match &args.config {
            Some(p) => AnimationConfig::from_path(p)?,
            None => AnimationConfig::default(),
        };
        if let Some(v) = args.draw_speed {
            config.draw_speed = v;
        }
        if let Some(v) = args.stagger {
            config.stagger_delay = v;
        }
        if args.no_fill {
            config.fill_after_stroke = false;
        }
        // Sampling drives playback explicitly; looping would restart mid-sequence.
        config.trigger_mode = TriggerMode::Manual;
        config.looping = false;

        let clock = ManualClock::starting_at(0.0);
        let mut handle = PlaybackHandle::with_clock(icon, config, clock.clone())?;
        if let Some(err) = handle.geometry_fallback() {
            eprintln!("warning: {err}; rendering statically");
        }
        handle.play();
        Ok(Self { handle, clock })
    }

    fn seek(&mut self, t: f64) {
        self.clock.set(t);
        self.handle.tick();
    }

    fn total_duration(&self) -> f64 {
        self.handle.schedule().total_duration()
    }
}

fn load_icon(path: &Path) -> anyhow::Result<IconSpec> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    let icon = if is_svg {
        IconSpec::from_svg_path(path)?
    } else {
        IconSpec::from_path(path)?
    };
    Ok(icon)
}

fn renderer(output: &OutputArgs) -> anyhow::Result<CpuRenderer> {
    let background = output
        .background
        .as_deref()
        .map(Rgba8::from_hex)
        .transpose()
        .map_err(|e| anyhow::anyhow!("invalid --background: {e}"))?;
    Ok(CpuRenderer::new(RenderSettings {
        width: output.size,
        height: output.size,
        background,
    }))
}

/// Upper bound on frames sampled by `timeline` and `render`.
const MAX_FRAMES: u64 = 1_000_000;

fn frame_count(duration: f64, fps: f64) -> anyhow::Result<u64> {
    if !fps.is_finite() || fps <= 0.0 {
        anyhow::bail!("--fps must be > 0 (got {fps})");
    }
    if !duration.is_finite() || duration < 0.0 {
        anyhow::bail!("duration must be >= 0 (got {duration})");
    }
    // Inclusive of the final, fully revealed frame.
    let frames = (duration * fps).ceil() + 1.0;
    if !frames.is_finite() || frames > MAX_FRAMES as f64 {
        anyhow::bail!("{duration} s at {fps} fps exceeds {MAX_FRAMES} frames");
    }
    Ok(frames as u64)
}

/// Sample time of frame `i`; the last frame never lands short of `duration`.
fn frame_time(i: u64, frames: u64, fps: f64, duration: f64) -> f64 {
    let t = i as f64 / fps;
    if i + 1 == frames { t.max(duration) } else { t }
}

fn write_png(path: &Path, mut frame: FrameRGBA) -> anyhow::Result<()> {
    frame.unpremultiply();
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    if !args.time.is_finite() || args.time < 0.0 {
        anyhow::bail!("--time must be >= 0 (got {})", args.time);
    }
    let mut offline = Offline::open(&args.icon)?;
    let mut r = renderer(&args.output)?;
    offline.seek(args.time);
    let frame = r.render(offline.handle.icon(), &offline.handle.snapshot())?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let mut offline = Offline::open(&args.icon)?;
    let duration = args.duration.unwrap_or_else(|| offline.total_duration());
    let frames = frame_count(duration, args.fps)?;

    let stdout = std::io::stdout();
    let mut out = std::io::BufWriter::new(stdout.lock());
    for i in 0..frames {
        offline.seek(frame_time(i, frames, args.fps, duration));
        serde_json::to_writer(&mut out, &offline.handle.snapshot()).context("encode snapshot")?;
        out.write_all(b"\n").context("write stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut offline = Offline::open(&args.icon)?;
    let mut r = renderer(&args.output)?;
    let duration = offline.total_duration();
    let frames = frame_count(duration, args.fps)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for i in 0..frames {
        offline.seek(frame_time(i, frames, args.fps, duration));
        let frame = r.render(offline.handle.icon(), &offline.handle.snapshot())?;
        write_png(&args.out_dir.join(format!("frame_{i:05}.png")), frame)?;
    }

    eprintln!("wrote {frames} frames to {}", args.out_dir.display());
    Ok(())
}
