//! Utility to print a feeding plan for one dog
//!
//! Usage: feeding_plan <date_of_birth|-|@profile.json> <weight> [unit]

use pawfeed::config::Config;
use pawfeed::models::{BirthDate, DogProfile};
use pawfeed::tools::feeding;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.len() > 3 {
        eprintln!("Usage: feeding_plan <date_of_birth|-|@profile.json> <weight> [unit]");
        std::process::exit(2);
    }

    let config = Config::from_env()?;

    // "@path" loads a full profile, anything else is just a birth date
    let profile = match args[0].strip_prefix('@') {
        Some(path) => feeding::parse_profile_json(&std::fs::read_to_string(path)?)?,
        None if args[0] == "-" => DogProfile::new(BirthDate::Unknown),
        None => DogProfile::new(BirthDate::parse(&args[0])),
    };

    let weight = args.get(1).and_then(|w| w.parse::<f64>().ok());
    let weight_kg = feeding::resolve_weight(weight, args.get(2).map(String::as_str))?;

    let plan = feeding::build_feeding_plan(&profile, weight_kg, config.today());
    println!("{}", feeding::to_pretty_json(&plan)?);

    Ok(())
}
