use dash_manifest::{
    args::{get_log_level_filter, parse_args},
    generate_manifest, VideoDescriptor,
};
use std::io::Write;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, Layer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args();

    // stdout is reserved for the manifest
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(get_log_level_filter(&args));
    let subscriber = tracing_subscriber::registry().with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)?;

    info!("{:?}", args);

    let video = if args.input == "-" {
        VideoDescriptor::from_reader(std::io::stdin().lock())
    } else {
        std::fs::File::open(&args.input)
            .map_err(Into::into)
            .and_then(|file| VideoDescriptor::from_reader(std::io::BufReader::new(file)))
    };
    let video = match video {
        Ok(video) => video,
        Err(e) => {
            error!("Failed to read video info from {}: {}", args.input, e);
            return Err(e.into());
        }
    };
    info!(
        "Loaded {} streams, duration {}s",
        video.streams.len(),
        video.duration_seconds
    );

    let mpd = generate_manifest(&video, &args.manifest_options())?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &mpd)?;
            info!("Wrote MPD to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(mpd.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
