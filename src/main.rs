use std::{process, time::Duration};

use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{error, info};

use crate::{
    config::BenchConfig,
    harness::Harness,
};

const ELEMENTS_KEY: &str = "elements";
const SEED_KEY: &str = "seed";
const COOLDOWN_KEY: &str = "cooldown";
const VERBOSE_KEY: &str = "verbose";

// clap borrows default values as strings - keep them in sync with the config defaults
const DEFAULT_ELEMENTS_ARG: &str = "100000000";
const DEFAULT_COOLDOWN_ARG: &str = "1000";

fn main() {
    let matches = create_cli_options().get_matches();

    let verbose = is_verbose(&matches);
    logger::init(verbose).expect("Logger already initialized");

    let config = config_from_matches(&matches);
    info!("Using {:?}", config);

    let harness = match Harness::setup(&config) {
        Ok(harness) => harness,
        Err(err) => {
            error!("Invalid configuration: {}", err);
            process::exit(1);
        }
    };

    let report = harness.run();
    print!("{}", report);
}

fn create_cli_options() -> Command<'static> {
    Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new(ELEMENTS_KEY)
                .short('n')
                .long("elements")
                .help("Number of elements in each buffer")
                .takes_value(true)
                .default_value(DEFAULT_ELEMENTS_ARG)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new(SEED_KEY)
                .short('s')
                .long("seed")
                .help("Fixed seed for the random indices - seeded by the OS otherwise")
                .takes_value(true)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new(COOLDOWN_KEY)
                .short('c')
                .long("cooldown")
                .help("Pause between the sequential and the random pass in milliseconds")
                .takes_value(true)
                .default_value(DEFAULT_COOLDOWN_ARG)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new(VERBOSE_KEY)
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(ArgAction::SetTrue),
        )
}

fn is_verbose(matches: &ArgMatches) -> bool {
    matches.get_one::<bool>(VERBOSE_KEY).copied().unwrap_or(false)
}

fn config_from_matches(matches: &ArgMatches) -> BenchConfig {
    // unwrap is safe for the values with defaults
    let elements = *matches.get_one::<usize>(ELEMENTS_KEY).unwrap();
    let cooldown = *matches.get_one::<u64>(COOLDOWN_KEY).unwrap();
    let seed = matches.get_one::<u64>(SEED_KEY).copied();

    BenchConfig {
        elements,
        seed,
        cooldown: Duration::from_millis(cooldown),
    }
}

mod buffers;
mod config;
mod harness;
mod logger;
