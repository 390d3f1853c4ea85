//! Scripted end-to-end run: sweeps a full turn of raw rotation readings
//! through a session, printing the face caption and active zone at each
//! step, then captures against a synthetic frame.

use clap::Parser;

use vastucompass::compass::{ZoneCount, classify};
use vastucompass::config::{Mode, SessionConfig};
use vastucompass::session::CompassSession;
use vastucompass::simulation::{ScriptedOrientation, StaticFrameSource, sweep_readings};
use vastucompass::store::MemoryStore;

#[derive(Parser, Debug)]
#[command(name = "simulate_session")]
#[command(about = "Drive a compass session with a scripted orientation sweep", long_about = None)]
struct Args {
    /// Face mode for the sweep
    #[arg(short, long, value_enum, default_value = "thirty-two")]
    mode: Mode,

    /// Sweep step in degrees
    #[arg(short, long, default_value = "22.5")]
    step: f32,

    /// Synthetic frame width
    #[arg(long, default_value = "720")]
    width: u32,

    /// Synthetic frame height
    #[arg(long, default_value = "1280")]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut session =
        CompassSession::new(SessionConfig::default(), Box::new(MemoryStore::new()))?;
    session.set_mode(args.mode)?;

    println!("=== Vastu Compass - scripted sweep ===");
    println!("Mode: {}   step: {}\u{b0}", args.mode, args.step);
    println!();

    for reading in ScriptedOrientation::new(sweep_readings(args.step)) {
        session.on_orientation(reading);
        let descriptor = session.descriptor();
        let zone = classify(session.heading(), ZoneCount::ThirtyTwo)
            .map(|z| z.label)
            .unwrap_or("-");
        println!(
            "raw {:>6.1}\u{b0} -> heading {:>6.1}\u{b0}  zone {:<5} {}",
            reading.raw_rotation_degrees.unwrap_or(0.0),
            session.heading().degrees().unwrap_or(0.0),
            zone,
            descriptor.caption
        );
    }

    session.set_camera(Box::new(StaticFrameSource::with_dimensions(
        args.width,
        args.height,
    )));
    session.capture()?;
    let artifact = session
        .last_capture()
        .expect("capture succeeded but no artifact retained");
    let path = artifact.save_to(".")?;
    println!();
    println!("Captured {} ({} bytes)", path.display(), artifact.png_bytes().len());

    Ok(())
}
