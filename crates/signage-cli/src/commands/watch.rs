use std::path::PathBuf;
use std::time::Duration;

use signage_core::{resolve, Clock, ScheduleFeed, Settings, SystemClock};
use tracing::info;

use super::SourceArgs;

pub fn run(
    source: SourceArgs,
    refresh_secs: Option<u64>,
    tick_secs: Option<u64>,
    settings_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = match settings_path {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };

    // Flags override the settings file; the settings file supplies the
    // source when no flags are given.
    let source = if source.json.is_some() || source.root.is_some() {
        source.into_source()?
    } else {
        settings.source()
    };
    let refresh = Duration::from_secs(refresh_secs.unwrap_or(settings.display.refresh_secs).max(1));
    let tick = Duration::from_secs(tick_secs.unwrap_or(settings.display.tick_secs).max(1));

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let (feed, refresh_task) = ScheduleFeed::spawn(source, refresh)?;
        info!("watching; refresh every {refresh:?}, tick every {tick:?}");

        let mut ticker = tokio::time::interval(tick);
        let mut on_screen = None;
        loop {
            ticker.tick().await;
            let config = feed.current();
            match resolve(&config, SystemClock.now()) {
                Ok(resolution) => {
                    // Suppress redundant re-renders: only report changes.
                    let next = Some((resolution.event.name.clone(), resolution.item.clone()));
                    if next != on_screen {
                        println!(
                            "event '{}' shows {}",
                            resolution.event.name,
                            serde_json::to_string(resolution.item)?
                        );
                        on_screen = next;
                    }
                }
                Err(err) => {
                    // Degenerate default rotation: nothing can be shown
                    // until the next usable schedule arrives.
                    eprintln!("nothing to display: {err}");
                    on_screen = None;
                }
            }
            if refresh_task.is_finished() {
                return Err("schedule refresh task stopped".into());
            }
        }
    })
}
