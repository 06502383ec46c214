use super::SourceArgs;

pub fn run(source: SourceArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = source.into_source()?.load()?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
