//! Contains the main citator function. Determines which parts of citator to run.

pub mod canlii;
pub mod config;
mod fs;
pub mod mcgill;
mod options;

use ansi_term::Color;
use config::{CitatorCommand, CitatorConfig, Format, FormatConfig, Output};
use fs::load_file;
use mcgill::{userreporters::build_user_reporters, AuthorityTable, Notice, Pinpoint};
use slog::{debug, error, o, warn};
use std::path::Path;

/// The main citator function.
pub fn citator(config: CitatorConfig) -> Result<(), String> {
    // Check subcommands.
    match config.command {
        CitatorCommand::NewUserReporterFile => {
            debug!(slog_scope::logger(), "Creating blank user-reporters file");
            return fs::new_user_reporters_ron();
        }
        CitatorCommand::Url(url) => {
            debug!(slog_scope::logger(), "Reading CanLII URL");
            let locator = canlii::case_locator(url)?;
            println!("{}", locator);
            println!("{}", locator.api_path());
            return Ok(());
        }
        CitatorCommand::Main => {}
    }

    let format_config = match config.format_config {
        Some(f) => f,
        None => return Err("no case file was provided".to_string()),
    };

    eprintln!("{} Starting citator...", Color::Green.paint("INFO"));

    let output = format_citation(&format_config)?;

    match config.output {
        Output::StandardOut => println!("{}", output),
        Output::File(f) => fs::save_file(Path::new(f), &output)?,
    }

    eprintln!("{} Done", Color::Green.paint("INFO"));
    Ok(())
}

/// Load the inputs, format the case, and render the result.
fn format_citation(format_config: &FormatConfig) -> Result<String, String> {
    // Load and validate the case metadata
    let case = slog_scope::scope(&slog_scope::logger().new(o!("fn" => "load_file()")), || {
        load_file(Path::new(format_config.case_file))
    })
    .and_then(|c| mcgill::build_case_metadata(&c))
    .map_err(|e| report("Case metadata error", e))?;

    // Load the parallel citations, if any
    let parallel = match (format_config.parallel, format_config.parallel_file) {
        (Some(p), _) => p.to_string(),
        (None, Some(f)) => {
            slog_scope::scope(&slog_scope::logger().new(o!("fn" => "load_file()")), || {
                load_file(Path::new(f))
            })
            .map_err(|e| report("Parallel citations load error", e))?
        }
        (None, None) => String::new(),
    };

    // Load the user reporters, if any
    let table = match format_config.user_reporters {
        Some(u) => {
            let user_reporters = slog_scope::scope(
                &slog_scope::logger().new(o!("fn" => "load_file()")),
                || load_file(Path::new(u)),
            )
            .and_then(|r| build_user_reporters(&r))
            .map_err(|e| report("User reporters error", e))?;
            AuthorityTable::new(user_reporters)
        }
        None => AuthorityTable::default(),
    };

    let pinpoint = Pinpoint::from_parts(format_config.pinpoint_type, format_config.pinpoint)
        .map_err(|e| report("Pinpoint error", e.to_string()))?;

    // Run the formatter
    eprintln!("{} Formatting...", Color::Green.paint("INFO"));

    let formatted =
        slog_scope::scope(&slog_scope::logger().new(o!("fn" => "format_case()")), || {
            mcgill::format_case(&case, &parallel, &pinpoint, &table)
        })
        .map_err(|e| report("Formatting error", e.to_string()))?;

    for notice in &formatted.notices {
        match notice {
            Notice::NoMatch => eprintln!(
                "{} No citation found; only the style of cause was used",
                Color::Yellow.paint("WARN")
            ),
            Notice::AmbiguousReporter { citation, reporter } => eprintln!(
                "{} Unknown reporter {} in {}; listed as unofficial",
                Color::Yellow.paint("WARN"),
                Color::Blue.paint(reporter),
                citation
            ),
        }
    }
    if let Some(court) = &formatted.court {
        eprintln!(
            "{} Court designator: {}",
            Color::Green.paint("INFO"),
            Color::Blue.paint(court)
        );
    }

    let rendered = match format_config.format {
        Format::Html => format!("{}\n{}", formatted.citation, formatted.pinpoint_citation),
        Format::Markdown => format!(
            "{}\n{}",
            options::markdown(&formatted.citation),
            options::markdown(&formatted.pinpoint_citation)
        ),
        Format::Json => match serde_json::to_string_pretty(&formatted) {
            Ok(j) => j,
            Err(e) => {
                warn!(slog_scope::logger(), "JSON serialization failed");
                return Err(report("JSON output error", e.to_string()));
            }
        },
    };

    Ok(rendered)
}

/// Log an error and prefix it with its context.
fn report(context: &str, e: String) -> String {
    error!(slog_scope::logger(), "{}: {}", context, e);
    format!("{}: {}", context, e)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config<'a>(format: Format, parallel: Option<&'a str>) -> FormatConfig<'a> {
        FormatConfig::new(
            "./tests/r-v-smith.json",
            parallel,
            None,
            "para",
            Some("5"),
            None,
            format,
        )
    }

    #[test]
    fn html() {
        let output = format_citation(&config(Format::Html, None)).unwrap();

        assert_eq!(
            output,
            "<em>R v Smith</em>, 2017 SCC 60, [2017] 2 SCR 1000\n\
             <em>R v Smith</em>, 2017 SCC 60 at para 5, [2017] 2 SCR 1000."
        );
    }

    #[test]
    fn markdown() {
        let output = format_citation(&config(Format::Markdown, None)).unwrap();

        assert_eq!(
            output,
            "*R v Smith*, 2017 SCC 60, [2017] 2 SCR 1000\n\
             *R v Smith*, 2017 SCC 60 at para 5, [2017] 2 SCR 1000."
        );
    }

    #[test]
    fn json() {
        let output =
            format_citation(&config(Format::Json, Some("[2017] SCJ No 60 (QL)"))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["sorted"]["neutral"][0], "2017 SCC 60");
        assert_eq!(value["sorted"]["unofficial"][1], "[2017] SCJ No 60");
    }

    #[test]
    fn user_reporters_file() {
        let mut format_config = config(Format::Html, Some("142 WCB (2d) 343"));
        format_config.user_reporters = Some("./tests/user-reporters.ron");
        let output = format_citation(&format_config).unwrap();

        assert!(output.starts_with("<em>R v Smith</em>, 2017 SCC 60"));
    }

    #[test]
    fn missing_case_file() {
        let mut format_config = config(Format::Html, None);
        format_config.case_file = "./tests/does-not-exist.json";
        let err = format_citation(&format_config).unwrap_err();

        assert!(err.starts_with("Case metadata error: error reading the file"));
    }

    #[test]
    fn bad_pinpoint() {
        let mut format_config = config(Format::Html, None);
        format_config.pinpoint = None;
        let err = format_citation(&format_config).unwrap_err();

        assert!(err.starts_with("Pinpoint error"));
    }
}
