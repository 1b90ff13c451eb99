use route_prefix::config::{init_logging, Config, OutputFormat};
use route_prefix::output::{print_text, to_json};
use route_prefix::processing::{compare_pairs, parse_prefixes};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logging(&config)?;
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        return Err("usage: route-prefix <prefix> <prefix> [<prefix>...]".into());
    }

    let prefixes = parse_prefixes(&args)?;
    let reports = compare_pairs(&prefixes);

    match config.output {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => println!("{}", to_json(&reports)?),
    }

    log::info!("#End main() compared {} pairs", reports.len());
    Ok(())
}
