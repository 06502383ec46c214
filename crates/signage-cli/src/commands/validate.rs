use super::SourceArgs;

pub fn run(source: SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = source.into_source()?.load()?;
    println!(
        "configuration OK: default rotation of {} item(s), {} timed event(s)",
        config.default.items.len(),
        config.events.len()
    );
    Ok(())
}
