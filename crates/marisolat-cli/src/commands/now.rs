use clap::Args;
use marisolat_core::prayer::{PrayerSnapshot, SnapshotStatus};
use marisolat_core::Config;

use super::schedule::{parse_instant, ScheduleArgs};

#[derive(Args, Debug)]
pub struct NowArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,
    /// Evaluate at this local instant instead of the wall clock
    #[arg(long, value_parser = parse_instant)]
    pub at: Option<chrono::NaiveDateTime>,
    /// Print the snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let now = args.at.unwrap_or_else(|| config.local_now());
    let engine = args.schedule.engine(&config, now)?;
    let snapshot = engine.snapshot(now, args.schedule.view);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        print!("{}", render(&snapshot));
    }
    Ok(())
}

/// Multi-line text rendering of a snapshot.
pub fn render(snapshot: &PrayerSnapshot) -> String {
    let mut out = format!("{} · {}\n", snapshot.view, snapshot.dates);

    for row in &snapshot.rows {
        let marker = if row.is_current { ">" } else { " " };
        let mut line = format!("{marker} {:<8} {:>8}", row.label.display_name(), row.time);
        if let Some(countdown) = &row.countdown {
            line.push_str(&format!("   lagi {countdown}"));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    match &snapshot.waktu {
        Some(waktu) => {
            out.push_str(&format!(
                "Waktu {}: {} (tamat dalam {})\n",
                waktu.label, waktu.active, waktu.countdown
            ));
            for range in &waktu.ranges {
                let marker = if range.active { "*" } else { " " };
                out.push_str(&format!("  {marker} {:<8} {}\n", range.waktu, range.range));
            }
        }
        None => out.push_str("Waktu: -\n"),
    }

    match &snapshot.night_third {
        Some(night) => out.push_str(&format!(
            "Sepertiga malam: {} ({} minit){}\n",
            night.window,
            night.duration_minutes,
            if night.active { " *" } else { "" }
        )),
        None => out.push_str("Sepertiga malam: -\n"),
    }

    if let SnapshotStatus::Unavailable { reason } = &snapshot.status {
        out.push_str(&format!("unavailable: {reason}\n"));
    }
    out
}

/// One-line summary used by `watch`.
pub fn summary(snapshot: &PrayerSnapshot) -> String {
    match (snapshot.current, snapshot.next, &snapshot.next_countdown) {
        (Some(current), Some(next), Some(countdown)) => {
            let waktu = snapshot
                .waktu
                .as_ref()
                .map(|w| format!(" [{}]", w.active))
                .unwrap_or_default();
            format!(
                "{} {current}{waktu} -> {next} lagi {countdown}",
                snapshot.at.format("%H:%M:%S")
            )
        }
        _ => format!("{} -", snapshot.at.format("%H:%M:%S")),
    }
}
