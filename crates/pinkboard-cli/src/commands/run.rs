//! Run command - drives the animation on a software canvas and writes PNG frames

use super::config::{load_settings, ConfigArgs};
use anyhow::{Context, Result};
use pinkboard_particles::AnimationDriver;
use pinkboard_raster::{heart_sprite, parse_color, Canvas};
use pinkboard_runtime::{
    EventQueue, FrameScheduler, HostEvent, RealtimeScheduler, SimulatedScheduler,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

/// A host event injected before a given frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedEvent {
    /// Zero-based frame index the event is delivered before
    pub frame: u64,
    pub event: HostEvent,
}

pub struct RunArgs {
    pub settings: ConfigArgs,
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub fps: f64,
    pub realtime: bool,
    pub seed: Option<u64>,
    pub events: Vec<ScriptedEvent>,
    pub output: String,
    pub frames_dir: Option<String>,
    pub every: u64,
    pub background: String,
    pub color: String,
}

/// Summary of a finished run
#[derive(Debug)]
pub struct RunReport {
    pub frames: u64,
    pub live_particles: usize,
}

pub fn run(args: RunArgs) -> Result<()> {
    let report = if args.realtime {
        execute(&args, &mut RealtimeScheduler::new(args.fps))?
    } else {
        execute(&args, &mut SimulatedScheduler::new(args.fps))?
    };
    println!(
        "Rendered {} frames, {} live particles",
        report.frames, report.live_particles
    );
    println!("Saved final frame to {}", args.output);
    Ok(())
}

/// Run the frame loop until `args.frames` frames have been handled
pub fn execute<S: FrameScheduler>(args: &RunArgs, scheduler: &mut S) -> Result<RunReport> {
    let settings = load_settings(&args.settings)?;
    let config = settings.particles;

    let background = parse_color(&args.background).context("Invalid --background")?;
    let fill = parse_color(&args.color).context("Invalid --color")?;
    let sprite = heart_sprite(config.size, fill).context("Failed to rasterize sprite")?;
    let mut canvas = Canvas::new(args.width, args.height, background);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut driver = AnimationDriver::new(config, rng)?;

    let frames_dir = match &args.frames_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir))?;
            Some(PathBuf::from(dir))
        }
        None => None,
    };

    let mut queue: EventQueue = args.events.iter().map(|e| (e.frame, e.event)).collect();
    driver.start(scheduler)?;

    while let Some(frame) = scheduler.next_frame() {
        let index = driver.frame_count();
        for event in queue.drain_due(index) {
            driver.handle_event(event, &mut canvas)?;
        }

        driver
            .on_frame(frame, &mut canvas, &sprite, scheduler)
            .with_context(|| format!("Frame {} failed", index))?;

        if let Some(dir) = &frames_dir {
            if (index + 1) % args.every.max(1) == 0 {
                save_frame(&canvas, dir, index)?;
            }
        }

        if driver.frame_count() >= args.frames {
            driver.stop(scheduler);
        }
    }

    if !queue.is_empty() {
        log::warn!(
            "{} scripted events were due after the last frame and never delivered",
            queue.len()
        );
    }

    canvas.save_png(&args.output)?;

    Ok(RunReport {
        frames: driver.frame_count(),
        live_particles: driver.pool().len(),
    })
}

fn save_frame(canvas: &Canvas, dir: &Path, index: u64) -> Result<()> {
    let path = dir.join(format!("frame_{:05}.png", index));
    log::debug!("writing {}", path.display());
    canvas.save_png(&path)?;
    Ok(())
}

/// Parse `X,Y@FRAME`
pub fn parse_click(s: &str) -> Result<ScriptedEvent, String> {
    let (pos, frame) = split_at_frame(s)?;
    let (x, y) = pos
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y@FRAME, got '{}'", s))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("invalid x: {}", e))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("invalid y: {}", e))?;
    Ok(ScriptedEvent {
        frame,
        event: HostEvent::PointerDown { x, y },
    })
}

/// Parse `WIDTHxHEIGHT@FRAME`
pub fn parse_resize(s: &str) -> Result<ScriptedEvent, String> {
    let (size, frame) = split_at_frame(s)?;
    let (w, h) = size
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT@FRAME, got '{}'", s))?;
    let width: u32 = w.trim().parse().map_err(|e| format!("invalid width: {}", e))?;
    let height: u32 = h.trim().parse().map_err(|e| format!("invalid height: {}", e))?;
    Ok(ScriptedEvent {
        frame,
        event: HostEvent::Resize { width, height },
    })
}

fn split_at_frame(s: &str) -> Result<(&str, u64), String> {
    let (value, frame) = s
        .rsplit_once('@')
        .ok_or_else(|| format!("missing @FRAME in '{}'", s))?;
    let frame = frame
        .trim()
        .parse()
        .map_err(|e| format!("invalid frame: {}", e))?;
    Ok((value, frame))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(output: &Path) -> RunArgs {
        RunArgs {
            settings: ConfigArgs::default(),
            width: 200,
            height: 160,
            frames: 30,
            fps: 60.0,
            realtime: false,
            seed: Some(1),
            events: Vec::new(),
            output: output.to_string_lossy().into_owned(),
            frames_dir: None,
            every: 1,
            background: "transparent".to_string(),
            color: "#ea80b0".to_string(),
        }
    }

    #[test]
    fn parse_click_and_resize() {
        assert_eq!(
            parse_click("10.5, 20@3").unwrap(),
            ScriptedEvent {
                frame: 3,
                event: HostEvent::PointerDown { x: 10.5, y: 20.0 }
            }
        );
        assert_eq!(
            parse_resize("640x480@0").unwrap(),
            ScriptedEvent {
                frame: 0,
                event: HostEvent::Resize {
                    width: 640,
                    height: 480
                }
            }
        );
        assert!(parse_click("10,20").is_err());
        assert!(parse_click("10@2").is_err());
        assert!(parse_resize("640@2").is_err());
    }

    #[test]
    fn simulated_run_writes_final_frame() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("final.png");
        let args = args(&output);

        let report = execute(&args, &mut SimulatedScheduler::new(args.fps)).unwrap();
        assert_eq!(report.frames, 30);
        // 29 frames of 1/60s at 250 particles/s
        assert!(report.live_particles >= 115 && report.live_particles <= 125);

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (200, 160));
        assert!(img.pixels().any(|p| p[3] > 0));
    }

    #[test]
    fn same_seed_same_image() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.png");
        let b = dir.path().join("b.png");
        execute(&args(&a), &mut SimulatedScheduler::new(60.0)).unwrap();
        execute(&args(&b), &mut SimulatedScheduler::new(60.0)).unwrap();

        let a = image::open(&a).unwrap().to_rgba8();
        let b = image::open(&b).unwrap().to_rgba8();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn scripted_events_are_applied() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("final.png");
        let mut args = args(&output);
        args.frames = 3;
        args.events = vec![
            parse_resize("320x240@1").unwrap(),
            parse_click("5,5@2").unwrap(),
        ];

        let report = execute(&args, &mut SimulatedScheduler::new(60.0)).unwrap();
        assert_eq!(report.frames, 3);
        // 2 frames of spawning at 250/s plus one click
        assert_eq!(report.live_particles, 8 + 1);

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (320, 240));
    }

    #[test]
    fn events_past_the_last_frame_are_not_applied() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("final.png");
        let mut args = args(&output);
        args.frames = 3;
        args.events = vec![parse_click("5,5@3").unwrap(), parse_resize("64x64@9").unwrap()];

        let report = execute(&args, &mut SimulatedScheduler::new(60.0)).unwrap();
        assert_eq!(report.live_particles, 8);

        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (200, 160));
    }

    #[test]
    fn frames_dir_receives_every_kth_frame() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("final.png");
        let frames = dir.path().join("frames");
        let mut args = args(&output);
        args.frames = 6;
        args.every = 2;
        args.frames_dir = Some(frames.to_string_lossy().into_owned());

        execute(&args, &mut SimulatedScheduler::new(60.0)).unwrap();

        let mut names: Vec<String> = std::fs::read_dir(&frames)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(
            names,
            vec!["frame_00001.png", "frame_00003.png", "frame_00005.png"]
        );
    }

    #[test]
    fn invalid_settings_fail_before_running() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args(&dir.path().join("final.png"));
        args.settings.length = Some(0);
        let mut scheduler = SimulatedScheduler::new(60.0);
        assert!(execute(&args, &mut scheduler).is_err());
        assert!(!scheduler.has_pending());
    }
}
