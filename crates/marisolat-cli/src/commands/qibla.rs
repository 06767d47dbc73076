use std::io::{BufRead, IsTerminal};

use clap::Args;
use marisolat_core::qibla::{HeadingSource, QiblaTracker, RawHeading};
use marisolat_core::{Config, Coordinates, Event};
use tracing::warn;

#[derive(Args, Debug)]
pub struct QiblaArgs {
    /// Observer latitude (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    /// Observer longitude (defaults to config)
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,
    /// Treat stdin samples as device-orientation alpha instead of compass degrees
    #[arg(long)]
    pub alpha: bool,
}

/// Heading samples read one per line. Unparsable lines are skipped.
pub struct StdinHeadingSource<R> {
    lines: std::io::Lines<R>,
    alpha: bool,
}

impl<R: BufRead> StdinHeadingSource<R> {
    pub fn new(reader: R, alpha: bool) -> Self {
        Self {
            lines: reader.lines(),
            alpha,
        }
    }
}

impl<R: BufRead> HeadingSource for StdinHeadingSource<R> {
    fn next_sample(&mut self) -> Option<RawHeading> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    warn!(error = %e, "heading stream closed");
                    return None;
                }
            };
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed.parse::<f64>() {
                Ok(degrees) if self.alpha => return Some(RawHeading::Alpha(degrees)),
                Ok(degrees) => return Some(RawHeading::Compass(degrees)),
                Err(_) => warn!(line = trimmed, "skipping unreadable heading"),
            }
        }
    }
}

pub fn run(args: QiblaArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let observer = Coordinates::new(
        args.lat.unwrap_or(config.location.latitude),
        args.lng.unwrap_or(config.location.longitude),
    )?;
    let mut tracker = QiblaTracker::new(observer, config.qibla.alignment_tolerance_deg);
    println!("Kiblat: {:.1}°", tracker.bearing());

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(());
    }

    let mut source = StdinHeadingSource::new(stdin.lock(), args.alpha);
    tracker.follow(&mut source, |reading, event| {
        if let (Some(heading), Some(error), Some(aligned)) =
            (reading.heading, reading.error_deg, reading.aligned)
        {
            println!(
                "heading {heading:.1}  error {error:.1}  {}",
                if aligned { "aligned" } else { "-" }
            );
        }
        if let Some(Event::QiblaAligned { pulse_ms, .. }) = event {
            println!("pulse {pulse_ms}ms");
        }
    });

    if tracker.reading().sensor_heading().is_err() {
        println!("compass: tiada data");
    }
    Ok(())
}
