//! Pinkboard CLI - Run the heart particle effect headlessly

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::config::ConfigArgs;
use commands::run::{parse_click, parse_resize, ScriptedEvent};
use commands::{config, run, sprite};

#[derive(Parser)]
#[command(name = "pinkboard")]
#[command(about = "Heart-shaped particle effect renderer", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the animation on a software canvas and save the final frame
    Run {
        #[command(flatten)]
        settings: ConfigArgs,

        /// Canvas width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Canvas height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Number of frames to run
        #[arg(long, default_value = "240", value_parser = clap::value_parser!(u64).range(1..))]
        frames: u64,

        /// Frames per second
        #[arg(long, default_value = "60", value_parser = parse_fps)]
        fps: f64,

        /// Pace frames with the wall clock instead of simulated time
        #[arg(long)]
        realtime: bool,

        /// Random seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Click at X,Y before frame FRAME (repeatable), e.g. 120,80@30
        #[arg(long = "click", value_parser = parse_click)]
        clicks: Vec<ScriptedEvent>,

        /// Resize the canvas before frame FRAME (repeatable), e.g. 1024x768@60
        #[arg(long = "resize", value_parser = parse_resize)]
        resizes: Vec<ScriptedEvent>,

        /// Output image path for the final frame
        #[arg(short, long, default_value = "frame.png")]
        output: String,

        /// Directory to write intermediate frames to
        #[arg(long)]
        frames_dir: Option<String>,

        /// Write every Nth frame to --frames-dir
        #[arg(long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..))]
        every: u64,

        /// Canvas background: #rrggbb, #rrggbbaa, or transparent
        #[arg(long, default_value = "#000000")]
        background: String,

        /// Heart fill color
        #[arg(long, default_value = "#ea80b0")]
        color: String,
    },

    /// Write the particle sprite to a PNG
    Sprite {
        /// Sprite size in pixels
        #[arg(long, default_value = "30")]
        size: u32,

        /// Heart fill color
        #[arg(long, default_value = "#ea80b0")]
        color: String,

        /// Output image path
        #[arg(short, long, default_value = "heart.png")]
        output: String,
    },

    /// Print the effective settings as TOML
    Config {
        #[command(flatten)]
        settings: ConfigArgs,
    },
}

fn parse_fps(s: &str) -> Result<f64, String> {
    let fps: f64 = s.parse().map_err(|e| format!("invalid fps: {}", e))?;
    if !(fps.is_finite() && fps > 0.0) {
        return Err(format!("fps must be positive, got {}", s));
    }
    Ok(fps)
}

/// Log level selected by `-v` / `-q`; `-v` wins over `-q`
fn log_level(verbose: u8, quiet: bool) -> log::LevelFilter {
    match verbose {
        0 if quiet => log::LevelFilter::Error,
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, refines the level picked on the command line
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose, cli.quiet))
        .parse_default_env()
        .init();

    match cli.command {
        Commands::Run {
            settings,
            width,
            height,
            frames,
            fps,
            realtime,
            seed,
            clicks,
            resizes,
            output,
            frames_dir,
            every,
            background,
            color,
        } => {
            let mut events = clicks;
            events.extend(resizes);
            run::run(run::RunArgs {
                settings,
                width,
                height,
                frames,
                fps,
                realtime,
                seed,
                events,
                output,
                frames_dir,
                every,
                background,
                color,
            })
        }
        Commands::Sprite {
            size,
            color,
            output,
        } => sprite::run(sprite::SpriteArgs {
            size,
            color,
            output,
        }),
        Commands::Config { settings } => config::run(&settings),
    }
}
