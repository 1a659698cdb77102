use clap::{CommandFactory, Parser};
use colored::Colorize;
use geoip_csv_converter::cli::Args;
use geoip_csv_converter::convert_file;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;

const LOG_CONFIG: &str = "log4rs.yml";

fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
        return Ok(());
    }
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("{}: initializing logging: {e}", "Warning".yellow());
    }
    log::info!("#Start main()");

    let errors = args.validate();
    if !errors.is_empty() {
        for message in errors {
            eprintln!("{}", message.red());
        }
        eprintln!("{}", Args::command().render_usage());
        return ExitCode::FAILURE;
    }

    let (Some(input), Some(output)) = (&args.block_file, &args.output_file) else {
        return ExitCode::FAILURE;
    };
    match convert_file(input, output, args.representations()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "Error".red());
            ExitCode::FAILURE
        }
    }
}
