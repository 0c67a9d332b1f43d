//! Headless N-body gravity sandbox
//!
//! Drives the simulation engine the way the interactive view does: one fixed
//! step per frame while running, with the renderer re-reading every body each
//! frame. Instead of a window the frames go to an in-memory renderer and
//! progress is logged.
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=debug`.

mod bridge;

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use bridge::HeadlessRenderer;
use clap::Parser;
use log::{error, info, warn};
use orbit_core::{Preset, SimError, SimulationConfig, SimulationEngine, StepOutcome};

#[derive(Parser, Debug)]
#[command(about = "Run the N-body gravity sandbox without a window")]
struct Args {
    /// Scene to load: empty, binary or solar
    #[arg(short, long, default_value = "solar")]
    preset: Preset,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Simulated time per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    time_step: f64,

    /// Gravitational constant
    #[arg(short = 'g', long, default_value_t = 1.0)]
    gravity: f64,

    /// Positions kept per trail
    #[arg(long, default_value_t = 1000)]
    trail_capacity: usize,

    /// Seed for randomised presets
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Log diagnostics every N frames (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Pace frames to wall-clock time instead of running flat out
    #[arg(long)]
    realtime: bool,
}

struct App {
    engine: SimulationEngine,
    renderer: HeadlessRenderer,
    initial_energy: f64,
    report_every: u64,
    /// Wall-clock length of a frame when pacing is on
    frame_time: Option<Duration>,
}

/// Wall-clock frame duration for `--realtime`, `None` when running flat out
fn frame_pacing(time_step: f64, realtime: bool) -> Result<Option<Duration>> {
    if !realtime {
        return Ok(None);
    }
    let frame_time = Duration::try_from_secs_f64(time_step)
        .with_context(|| format!("time step {time_step} cannot be paced in real time"))?;
    Ok(Some(frame_time))
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let config = SimulationConfig::new()
            .with_time_step(args.time_step)
            .with_gravitational_constant(args.gravity)
            .with_trail_capacity(args.trail_capacity);
        let mut engine = SimulationEngine::new(config).context("invalid simulation settings")?;
        let frame_time = frame_pacing(args.time_step, args.realtime)?;

        let ids = args
            .preset
            .load(&mut engine, args.seed)
            .with_context(|| format!("failed to load preset {}", args.preset))?;
        info!("loaded {} preset with {} bodies", args.preset, ids.len());

        Ok(Self {
            initial_energy: engine.total_energy(),
            engine,
            renderer: HeadlessRenderer::new(),
            report_every: args.report_every,
            frame_time,
        })
    }

    fn update(&mut self) {
        match self.engine.step() {
            Ok(StepOutcome::Advanced | StepOutcome::Paused) => {}
            Err(SimError::NumericDivergence { bodies }) => {
                error!(
                    "step {}: state of {:?} is no longer finite",
                    self.engine.steps_taken(),
                    bodies
                );
            }
            Err(e) => warn!("step failed: {e}"),
        }
    }

    fn render(&mut self) {
        self.engine.present(&mut self.renderer);
    }

    fn report(&self, frame: u64) {
        if self.report_every == 0 || frame % self.report_every != 0 {
            return;
        }

        let energy = self.engine.total_energy();
        let drift = if self.initial_energy != 0.0 {
            (energy - self.initial_energy) / self.initial_energy.abs()
        } else {
            0.0
        };
        let com = self.engine.center_of_mass();
        info!(
            "frame {:>6} t={:>8.3} bodies={} energy={:.6} drift={:+.3e} com=({:.3}, {:.3}, {:.3}) trail vertices={}",
            frame,
            self.engine.elapsed(),
            self.engine.len(),
            energy,
            drift,
            com.x,
            com.y,
            com.z,
            self.renderer.trail_vertex_count()
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut app = App::new(&args)?;
    app.engine.toggle_running();

    let started = Instant::now();

    for frame in 1..=args.frames {
        let frame_start = Instant::now();

        app.update();
        app.render();
        app.report(frame);

        if let Some(rest) = app
            .frame_time
            .and_then(|frame_time| frame_time.checked_sub(frame_start.elapsed()))
        {
            std::thread::sleep(rest);
        }
    }

    info!(
        "ran {} frames ({} steps, {} rendered) in {:.2?}; {} meshes, {} instances, {} trail lines",
        args.frames,
        app.engine.steps_taken(),
        app.renderer.frames(),
        started.elapsed(),
        app.renderer.mesh_count(),
        app.renderer.instances().len(),
        app.renderer.trail_ranges().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["gravity_sim"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_pacing_off_without_realtime() {
        assert_eq!(frame_pacing(1e20, false).unwrap(), None);
    }

    #[test]
    fn test_pacing_uses_time_step() {
        assert_eq!(
            frame_pacing(0.25, true).unwrap(),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn test_pacing_rejects_unrepresentable_step() {
        assert!(frame_pacing(1e20, true).is_err());
    }

    #[test]
    fn test_app_rejects_huge_realtime_step() {
        assert!(App::new(&args(&["--time-step", "1e20", "--realtime"])).is_err());
    }

    #[test]
    fn test_app_accepts_huge_step_without_pacing() {
        let app = App::new(&args(&["--time-step", "1e20", "--preset", "empty"])).unwrap();
        assert_eq!(app.frame_time, None);
    }
}
