use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser as _;
use geo_core::{
    Cartographic, FrameOutcome, FrameState, SessionConfig, SimulatedReality, TelemetrySession,
    TextSink, Variant,
};
use glam::DVec3;
use rand::prelude::*;

/// Walk a simulated device toward the geo-anchored sphere and print the
/// telemetry block whenever it changes.
#[derive(Debug, clap::Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Anchor/sphere preset (`rotundan` or `rotundan-small`).
    #[arg(long, default_value_t = Variant::Rotundan)]
    variant: Variant,

    /// Override the anchor longitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    longitude: Option<f64>,

    /// Override the anchor latitude in degrees.
    #[arg(long, allow_hyphen_values = true)]
    latitude: Option<f64>,

    /// Override the sphere radius.
    #[arg(long)]
    radius: Option<f64>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 30.0)]
    fps: f64,

    /// Sleep between frames instead of running as fast as possible.
    #[arg(long)]
    realtime: bool,

    /// Frames delivered before the first reality change.
    #[arg(long, default_value_t = 3)]
    reality_after: u64,

    /// Device starting longitude in degrees.
    #[arg(long, default_value_t = 11.5, allow_hyphen_values = true)]
    start_longitude: f64,

    /// Device starting latitude in degrees.
    #[arg(long, default_value_t = 55.6, allow_hyphen_values = true)]
    start_latitude: f64,

    /// Walking speed toward the anchor, metres per second.
    #[arg(long, default_value_t = 1.4)]
    walk_speed: f64,

    /// Horizontal GPS noise amplitude in metres.
    #[arg(long, default_value_t = 0.0)]
    jitter: f64,

    /// Seed for the GPS noise.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Report no geolocation on every n-th frame.
    #[arg(long)]
    drop_gps_every: Option<u64>,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let mut config = self.variant.config();
        if let Some(lon) = self.longitude {
            config.longitude = lon;
        }
        if let Some(lat) = self.latitude {
            config.latitude = lat;
        }
        if let Some(r) = self.radius {
            config.radius = r;
        }
        config
    }

    fn frame_dt(&self) -> f64 {
        1.0 / self.fps.max(1.0)
    }
}

/// Prints each status block to stdout, separated by a blank line.
#[derive(Default)]
struct StdoutSink {
    writes: usize,
}

impl TextSink for StdoutSink {
    fn write(&mut self, text: &str) {
        self.writes += 1;
        let mut out = std::io::stdout().lock();
        if let Err(e) = writeln!(out, "{text}\n") {
            log::warn!("stdout write failed: {e}");
        }
    }
}

/// Device walking in the local frame, stopping at the sphere's surface.
struct Walker {
    position: DVec3,
    speed: f64,
    stop_distance: f64,
}

impl Walker {
    fn step(&mut self, target: DVec3, dt: f64) {
        let mut to_target = target - self.position;
        to_target.y = 0.0;
        let remaining = to_target.length() - self.stop_distance;
        if remaining <= 0.0 {
            return;
        }
        let step = (self.speed * dt).min(remaining);
        self.position += to_target.normalize_or_zero() * step;
    }
}

fn noisy(position: DVec3, jitter: f64, rng: &mut StdRng) -> DVec3 {
    if jitter <= 0.0 {
        return position;
    }
    position
        + DVec3::new(
            rng.gen_range(-jitter..=jitter),
            0.0,
            rng.gen_range(-jitter..=jitter),
        )
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.session_config();
    log::info!("variant={} frames={}", args.variant, args.frames);

    let mut session =
        TelemetrySession::new(&config, SimulatedReality::new(), StdoutSink::default())
            .context("building scene")?;

    let start = Cartographic::from_degrees(args.start_longitude, args.start_latitude);
    if !start.is_finite() {
        anyhow::bail!("invalid start position {:?}", start);
    }
    session.backend_mut().set_device_fix(start);
    let frame = session
        .backend()
        .local_frame()
        .cloned()
        .context("simulated reality has no origin")?;
    let target = frame.to_local(&session.anchor().position());

    let mut walker = Walker {
        position: DVec3::ZERO,
        speed: args.walk_speed,
        stop_distance: session.marker().radius,
    };
    let mut rng = StdRng::seed_from_u64(args.seed);
    let dt = args.frame_dt();
    let started = Instant::now();
    let mut written = 0u64;

    for n in 0..args.frames {
        if n == args.reality_after {
            session.on_reality_change();
        }

        walker.step(target, dt);
        let fix = frame.to_cartographic(noisy(walker.position, args.jitter, &mut rng));
        session.backend_mut().set_device_fix(fix);

        let gps_dropped = args
            .drop_gps_every
            .is_some_and(|every| every > 0 && n % every == 0);
        let state = FrameState {
            frame_number: Some(n),
            cartographic_degrees: (!gps_dropped).then_some(fix),
        };
        if session.on_frame(&state) == FrameOutcome::Written {
            written += 1;
        }

        if args.realtime {
            thread::sleep(Duration::from_secs_f64(dt));
        }
    }

    let distance = session
        .last_telemetry()
        .map(|t| t.distance)
        .unwrap_or(f64::NAN);
    log::info!(
        "done: frames={} status_writes={} sink_writes={} final_distance={:.1} elapsed={:?}",
        args.frames,
        written,
        session.sink().writes,
        distance,
        started.elapsed()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn walker_stops_at_sphere_surface() {
        let mut w = Walker {
            position: DVec3::ZERO,
            speed: 100.0,
            stop_distance: 10.0,
        };
        let target = DVec3::new(0.0, 5.0, -50.0);
        for _ in 0..10 {
            w.step(target, 1.0);
        }
        let mut flat = target - w.position;
        flat.y = 0.0;
        assert!((flat.length() - 10.0).abs() < 1e-9);
        assert_eq!(w.position.y, 0.0);
    }

    #[test]
    fn overrides_apply_on_top_of_variant() {
        let args = Args::parse_from([
            "rotundan-sim",
            "--variant",
            "rotundan-small",
            "--latitude",
            "-33.5",
        ]);
        let cfg = args.session_config();
        assert_eq!(cfg.radius, 500.0);
        assert_eq!(cfg.latitude, -33.5);
    }

    #[test]
    fn zero_jitter_leaves_position_untouched() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(noisy(p, 0.0, &mut rng), p);
    }
}
