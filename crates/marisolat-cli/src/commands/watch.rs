use std::path::Path;
use std::time::{Duration, SystemTime};

use clap::Args;
use marisolat_core::{Config, Event, Ticker, Watcher};
use tracing::{info, warn};

use super::now::summary;
use super::schedule::{load_raw, ScheduleArgs};

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,
    /// Stop after this many ticks
    #[arg(long)]
    pub ticks: Option<u64>,
}

pub fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    runtime.block_on(watch(args))
}

fn modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

async fn watch(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let path = args.schedule.schedule.clone();

    let mut engine = args.schedule.engine(&config, config.local_now())?;
    let mut last_modified = modified(&path);
    let mut watcher = Watcher::new(args.schedule.view);
    let mut ticker = Ticker::new(Duration::from_millis(config.clock.tick_interval_ms.max(1)));

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut ticks = 0u64;
    loop {
        if args.ticks.is_some_and(|limit| ticks >= limit) {
            break;
        }
        tokio::select! {
            _ = &mut shutdown => {
                info!("watch interrupted");
                break;
            }
            _ = ticker.tick() => {}
        }
        ticks += 1;

        let now = config.local_now();
        let current = modified(&path);
        if current != last_modified {
            last_modified = current;
            match load_raw(&path) {
                Ok(raw) => {
                    let event = engine.set_schedule(raw, args.schedule.today(now));
                    info!(?event, "schedule reloaded");
                    watcher.reset();
                    ticker.restart();
                }
                Err(e) => warn!(error = %e, "keeping previous schedule"),
            }
        }

        let (snapshot, events) = watcher.tick(&engine, now);
        for event in &events {
            match event {
                Event::PrayerEntered { label, .. } => println!("masuk waktu {label}"),
                Event::WaktuEntered { label, waktu, .. } => println!("{label}: {waktu}"),
                _ => {}
            }
        }
        println!("{}", summary(&snapshot));
    }
    Ok(())
}
