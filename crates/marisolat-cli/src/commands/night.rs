use clap::Args;
use marisolat_core::Config;

use super::schedule::ScheduleArgs;

#[derive(Args, Debug)]
pub struct NightArgs {
    #[command(flatten)]
    pub schedule: ScheduleArgs,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: NightArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let now = config.local_now();
    let engine = args.schedule.engine(&config, now)?;

    let Some(night) = engine.night_third(args.schedule.view) else {
        if args.json {
            println!("null");
        } else {
            println!("Sepertiga malam: -");
        }
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&night)?);
    } else {
        println!("Sepertiga malam: {}", night.display());
        println!("Malam: {} minit", night.night_minutes);
        println!("Tempoh: {} minit", night.duration_minutes);
    }
    Ok(())
}
