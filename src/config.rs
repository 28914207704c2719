//! The structures and functions for configuration. Must be accessible to main.

/// The overall options.
pub struct CitatorConfig<'a> {
    pub command: CitatorCommand<'a>,
    pub output: Output<'a>,
    pub format_config: Option<FormatConfig<'a>>,
}

impl CitatorConfig<'_> {
    pub fn new<'a>(
        command: CitatorCommand<'a>,
        output: Output<'a>,
        format_config: Option<FormatConfig<'a>>,
    ) -> CitatorConfig<'a> {
        CitatorConfig {
            command,
            output,
            format_config,
        }
    }
}

/// The types of subcommands.
#[derive(PartialEq, Eq, Debug)]
pub enum CitatorCommand<'a> {
    Main,
    NewUserReporterFile,
    Url(&'a str),
}

/// Where the output goes.
#[derive(PartialEq, Eq, Debug)]
pub enum Output<'a> {
    StandardOut,
    File(&'a str),
}

/// How the citation is rendered.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Format {
    Html,
    Markdown,
    Json,
}

/// Formatter configuration.
pub struct FormatConfig<'a> {
    pub case_file: &'a str,
    pub parallel: Option<&'a str>,
    pub parallel_file: Option<&'a str>,
    pub pinpoint_type: &'a str,
    pub pinpoint: Option<&'a str>,
    pub user_reporters: Option<&'a str>,
    pub format: Format,
}

impl FormatConfig<'_> {
    #[allow(clippy::too_many_arguments)]
    pub fn new<'a>(
        case_file: &'a str,
        parallel: Option<&'a str>,
        parallel_file: Option<&'a str>,
        pinpoint_type: &'a str,
        pinpoint: Option<&'a str>,
        user_reporters: Option<&'a str>,
        format: Format,
    ) -> FormatConfig<'a> {
        FormatConfig {
            case_file,
            parallel,
            parallel_file,
            pinpoint_type,
            pinpoint,
            user_reporters,
            format,
        }
    }
}
