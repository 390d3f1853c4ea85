use std::path::PathBuf;

use clap::Parser;

use vastucompass::capture::ImageFileSource;
use vastucompass::config::{Mode, SessionConfig};
use vastucompass::sensors::OrientationReading;
use vastucompass::session::{CaptureOutcome, CompassSession};
use vastucompass::store::{FileStore, KeyValueStore, MemoryStore};

#[derive(Parser, Debug)]
#[command(name = "vastucompass")]
#[command(about = "Render a Vastu compass face and composite it over a camera frame", long_about = None)]
struct Args {
    /// Face mode: normal, sixteen, thirty-two, chakra
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// North-referenced compass heading in degrees
    #[arg(long, conflicts_with = "raw_rotation")]
    heading: Option<f32>,

    /// Raw counterclockwise rotation angle in degrees (normalized to a
    /// compass heading)
    #[arg(long)]
    raw_rotation: Option<f32>,

    /// Image file standing in for the live camera frame; enables capture
    #[arg(short, long)]
    frame: Option<PathBuf>,

    /// Directory the captured PNG is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Directory for persisted session state (mode, last capture);
    /// volatile when omitted
    #[arg(long)]
    store_dir: Option<PathBuf>,

    /// Print the capture's data URL (the copy-as-text form)
    #[arg(long)]
    data_url: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let store: Box<dyn KeyValueStore> = match &args.store_dir {
        Some(dir) => Box::new(FileStore::new(dir.clone())?),
        None => Box::new(MemoryStore::new()),
    };
    let mut session = CompassSession::new(SessionConfig::default(), store)?;

    if let Some(mode) = args.mode {
        session.set_mode(mode)?;
    }

    session.on_orientation(OrientationReading {
        compass_heading_degrees: args.heading,
        raw_rotation_degrees: args.raw_rotation,
    });

    let descriptor = session.descriptor();
    println!("Mode:    {}", session.mode());
    match session.heading().degrees() {
        Some(deg) => println!("Heading: {:>6.1}\u{b0}", deg),
        None => println!("Heading: unknown"),
    }
    println!("Face:    {}", descriptor.caption);
    println!(
        "Ticks:   {} ({} emphasized)",
        descriptor.ticks.len(),
        descriptor.ticks.iter().filter(|t| t.emphasized).count()
    );

    if let Some(frame_path) = &args.frame {
        session.set_camera(Box::new(ImageFileSource::new(frame_path)?));
        match session.capture()? {
            CaptureOutcome::Captured => {
                let artifact = session
                    .last_capture()
                    .expect("capture succeeded but no artifact retained");
                let path = artifact.save_to(&args.output_dir)?;
                println!("Capture: {}", path.display());
                if args.data_url {
                    println!("{}", artifact.data_url());
                }
            }
            CaptureOutcome::NoFrame => println!("Capture: no frame available"),
        }
        session.disable_camera();
    }

    Ok(())
}
