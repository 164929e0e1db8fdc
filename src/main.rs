// What you SEE:
// • A circle with its bindings marked, threads strung between the snapped points.
// • An optional backdrop image behind it.
// • ESC or closing the window quits.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};

use threadcircle::draw::Drawer;
use threadcircle::raster::sample;
use threadcircle::{Config, Error, Pattern, PixelBuffer, backdrop};

#[derive(Parser, Debug)]
#[command(name = "threadcircle")]
#[command(version, about = "String-art pattern over a circle of bindings")]
struct Args {
    /// Config file path (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<usize>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<usize>,

    /// Circle radius in pixels
    #[arg(short, long)]
    radius: Option<f64>,

    /// Number of bindings around the circle
    #[arg(short, long)]
    bindings: Option<usize>,

    /// Number of lines in the anchor fan
    #[arg(short, long)]
    lines: Option<usize>,

    /// Tie each point to the one this many places further along
    #[arg(short, long)]
    skip: Option<usize>,

    /// Image to draw underneath the pattern
    #[arg(long)]
    backdrop: Option<PathBuf>,
}

/// Command-line flags win over the config file.
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(w) = args.width {
        config.canvas.width = w;
    }
    if let Some(h) = args.height {
        config.canvas.height = h;
    }
    if let Some(r) = args.radius {
        config.circle.radius = r;
    }
    if let Some(n) = args.bindings {
        config.circle.bindings = n;
    }
    if let Some(n) = args.lines {
        config.fan.lines = n;
    }
    if let Some(s) = args.skip {
        config.pattern.skip = s;
    }
    if let Some(path) = &args.backdrop {
        config.backdrop = Some(path.clone());
    }
}

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("threadcircle=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    apply_args(&mut config, &args);
    config.validate()?;

    let (w, h) = (config.canvas.width, config.canvas.height);

    /* --- Base image ---
       The backdrop has to be decoded before anything is drawn on top. */
    let mut screen = match &config.backdrop {
        Some(path) => backdrop::load_backdrop(path, w, h)?,
        None => {
            let mut buf = PixelBuffer::new(w, h);
            buf.fill(config.colors.background.into());
            buf
        }
    };

    /* --- Pattern --- */
    let pattern = Pattern::build(&config)?;
    pattern.render(&mut screen, &config.colors, config.pattern.line_width)?;

    if let Some(s) = pattern.bindings.first().and_then(|b| sample(&screen, b.point.x, b.point.y)) {
        debug!(color = ?s.color, saturation = s.saturation, "binding 0 pixel");
    }

    /* --- Window ---
       The picture is static; keep presenting it until the user leaves. */
    let mut drawer = Drawer::new("threadcircle", w, h)?;
    drawer.set_target_fps(30);
    info!(width = w, height = h, "window open, ESC to quit");

    while drawer.is_open() && !drawer.esc_pressed() {
        drawer.present(&screen)?;
    }

    Ok(())
}
