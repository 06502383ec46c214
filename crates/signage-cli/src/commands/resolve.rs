use chrono::{NaiveTime, Timelike};
use signage_core::{resolve, Clock, SystemClock};

use super::SourceArgs;

pub fn run(source: SourceArgs, at: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = source.into_source()?.load()?;

    let now = SystemClock.now();
    let instant = match at {
        Some(text) => {
            let time = NaiveTime::parse_from_str(&text, "%H:%M:%S")
                .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M"))
                .map_err(|_| format!("'{text}' is not a HH:MM or HH:MM:SS time"))?;
            now.date().and_time(time)
        }
        None => now,
    };

    let resolution = resolve(&config, instant)?;
    println!(
        "{:02}:{:02}:{:02} event '{}' shows {}",
        instant.hour(),
        instant.minute(),
        instant.second(),
        resolution.event.name,
        serde_json::to_string(resolution.item)?
    );
    Ok(())
}
