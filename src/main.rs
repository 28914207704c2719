//! `main.rs` contains the command-line interface for citator. It collects the
//! values and options, sets up the logger, assembles the configuration, and
//! passes the configuration to the main function.
#[macro_use]
extern crate slog;

use ansi_term::Color;
use citator::config::{CitatorCommand, CitatorConfig, Format, FormatConfig, Output};
use clap::{crate_version, value_parser, App, Arg, SubCommand};
use slog::{debug, Drain, Level};
use std::{fs::OpenOptions, process, sync::Mutex};

fn main() {
    // Get the command-line arguments and options
    let matches = App::new("citator")
        .version(crate_version!())
        .about("Formats Canadian case citations according to the McGill Guide (9th ed)")
        .subcommand_negates_reqs(true)
        .arg(
            Arg::with_name("case")
                .value_name("CASE FILE")
                .help("The case metadata file in CanLII JSON format")
                .index(1)
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT FILE")
                .help("The output file (blank outputs to terminal)")
                .index(2)
                .required(false),
        )
        .arg(
            Arg::with_name("parallel")
                .short('p')
                .long("parallel")
                .value_name("TEXT")
                .help("Parallel citations, separated by long dashes")
                .conflicts_with("parallel_file"),
        )
        .arg(
            Arg::with_name("parallel_file")
                .short('P')
                .long("parallel_file")
                .value_name("FILE")
                .help("A file containing parallel citations"),
        )
        .arg(
            Arg::with_name("pinpoint_type")
                .short('t')
                .long("pinpoint_type")
                .value_name("TYPE")
                .help("The pinpoint type")
                .possible_values(["none", "page", "para"])
                .default_value("none"),
        )
        .arg(
            Arg::with_name("pinpoint")
                .short('n')
                .long("pinpoint")
                .value_name("NUMBER")
                .help("The page or paragraph number of the pinpoint")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::with_name("user_reporters")
                .short('u')
                .long("user_reporters")
                .value_name("REPORTER FILE")
                .help("A RON file containing user-provided reporter tiers"),
        )
        .arg(
            Arg::with_name("markdown")
                .short('m')
                .long("markdown")
                .takes_value(false)
                .help("Outputs Markdown italics instead of HTML")
                .conflicts_with("json"),
        )
        .arg(
            Arg::with_name("json")
                .short('j')
                .long("json")
                .takes_value(false)
                .help("Outputs every sorted citation as JSON"),
        )
        .arg(
            Arg::with_name("debug")
                .short('d')
                .long("debug")
                .takes_value(false)
                .help("Outputs debug log to citator-log.json")
                .hidden_short_help(true)
                .hidden_long_help(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short('v')
                .long("verbose")
                .value_name("NUMBER")
                .help("Verbosity level between 0 and 5")
                .hidden_short_help(true)
                .hidden_long_help(true)
                .default_value("1"),
        )
        .subcommand(
            SubCommand::with_name("ur").about("For creating a blank user-reporters file"),
        )
        .subcommand(
            SubCommand::with_name("url")
                .about("For reading the API request path from a CanLII URL")
                .arg(
                    Arg::with_name("url")
                        .value_name("URL")
                        .help("The long-form canlii.org case URL")
                        .index(1)
                        .required(true),
                ),
        )
        .get_matches();

    // Setup the logger.
    //
    // If the debug flag is set, the log is output to a file `citator-log.json`.
    // Otherwise, all logging goes to the terminal.
    let debug = matches.is_present("debug");
    let min_log_level = match matches.value_of("verbose").unwrap_or("1") {
        "0" => Level::Critical,
        "1" => Level::Error,
        "2" => Level::Warning,
        "3" => Level::Info,
        "4" => Level::Debug,
        "5" => Level::Trace,
        _ => Level::Info,
    };

    let term_decorator = slog_term::TermDecorator::new().build();
    let term_drain = slog_term::CompactFormat::new(term_decorator).build().fuse();
    let term_drain = term_drain.filter_level(min_log_level).fuse();

    let _guard: slog_scope::GlobalLoggerGuard = if debug {
        // Setup the file AND terminal loggers
        let log_file = match OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open("./citator-log.json")
        {
            Ok(f) => f,
            Err(e) => {
                eprintln!(
                    "{} Could not create the log file: {}",
                    Color::Red.paint("ERRO"),
                    e
                );
                process::exit(1);
            }
        };
        let file_drain = slog_json::Json::new(log_file)
            .set_pretty(true)
            .add_default_keys()
            .build()
            .fuse();
        let file_drain = file_drain.filter_level(Level::Trace).fuse();
        let dual_logger = slog::Logger::root(
            Mutex::new(slog::Duplicate(term_drain, file_drain)).fuse(),
            o!("version" => crate_version!()),
        );
        slog_scope::set_global_logger(dual_logger)
    } else {
        // Setup just the terminal logger
        let term_logger = slog::Logger::root(
            Mutex::new(term_drain).fuse(),
            o!("version" => crate_version!()),
        );
        slog_scope::set_global_logger(term_logger)
    };

    debug!(slog_scope::logger(), "Logger setup");

    // Setup the configuration variables.
    //
    // Subcommands
    let command = match matches.subcommand() {
        Some(("ur", _)) => CitatorCommand::NewUserReporterFile,
        Some(("url", sub_matches)) => {
            CitatorCommand::Url(sub_matches.value_of("url").unwrap_or_default())
        }
        _ => CitatorCommand::Main,
    };

    // Files
    let output = match matches.value_of("output") {
        Some(f) => Output::File(f),
        None => Output::StandardOut,
    };

    // Formatter options
    let format = if matches.is_present("json") {
        Format::Json
    } else if matches.is_present("markdown") {
        Format::Markdown
    } else {
        Format::Html
    };
    let pinpoint = matches
        .get_one::<u32>("pinpoint")
        .map(|n| n.to_string());

    // Deal with command-line errors.
    //
    // A page or paragraph pinpoint needs a number.
    let pinpoint_type = matches.value_of("pinpoint_type").unwrap_or("none");
    if pinpoint_type != "none" && pinpoint.is_none() {
        eprintln!(
            "{} A {} pinpoint needs a number. Use {}.",
            Color::Red.paint("ERRO"),
            Color::Blue.paint(pinpoint_type),
            Color::Blue.paint("-n/--pinpoint")
        );
        process::exit(1);
    }

    // Create the configuration
    let format_config = matches.value_of("case").map(|case_file| {
        FormatConfig::new(
            case_file,
            matches.value_of("parallel"),
            matches.value_of("parallel_file"),
            pinpoint_type,
            pinpoint.as_deref(),
            matches.value_of("user_reporters"),
            format,
        )
    });
    let config = CitatorConfig::new(command, output, format_config);

    // Run the program.
    if let Err(e) = citator::citator(config) {
        eprintln!("{} {}", Color::Red.paint("ERRO"), e);
        process::exit(1);
    }
}
