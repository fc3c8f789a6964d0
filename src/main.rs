use lipi::{ConversionEngine, LipiError, load_profile_with_rules};
use std::env;
use std::path::Path;

/// A simple CLI to convert text between two font profiles.
fn main() -> Result<(), LipiError> {
    let mut args: Vec<String> = env::args().collect();

    let enable_debug = args.iter().any(|a| a == "--debug");
    args.retain(|a| a != "--debug");

    init_logging(enable_debug);

    if args.len() != 4 {
        eprintln!("Convert text from one font's encoding to another's.");
        eprintln!();
        eprintln!(
            "Usage: {} <source-profile.json> <target-profile.json> <text> [--debug]",
            args.first().map(String::as_str).unwrap_or("lipi")
        );
        std::process::exit(2);
    }

    let (source, mut rules) = load_profile_with_rules(Path::new(&args[1]))?;
    let (target, target_rules) = load_profile_with_rules(Path::new(&args[2]))?;
    let input = &args[3];

    // One table covering both profiles; same-named rules are shared.
    rules.extend(target_rules);

    log::info!(
        "converting '{}' -> '{}'",
        source.font.name,
        target.font.name
    );

    let engine = ConversionEngine::new(source, target, &rules, enable_debug)?;
    let output = engine.convert(input)?;

    println!("INPUT : {}", input);
    println!("OUTPUT: {}", output);
    Ok(())
}

fn init_logging(enable_debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if enable_debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}
