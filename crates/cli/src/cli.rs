use core::str::FromStr;

use clap::Parser;

use panoptes_core::AggregateId;
use panoptes_correlation::ReferenceSource;
use panoptes_observability::{LogFormat, LoggingConfig};

use crate::report::OutputFormat;

/// Command-line arguments and environment configuration.
///
/// Exactly one positional argument (the pull request id) is accepted; clap
/// rejects zero or several with a usage message and exit status 2.
#[derive(Debug, Parser)]
#[command(
    name = "panoptes",
    version,
    about = "Correlate a pull request with the issues it links to",
    long_about = "Projects a pull request from GitHub events, follows its linked issue keys \
                  into the Jira events, and prints both as one chronological timeline."
)]
pub struct Cli {
    /// Pull request id to correlate (e.g. 1234)
    #[arg(value_parser = AggregateId::from_str)]
    pub pull_request_id: AggregateId,

    /// Where issue references come from: the projected pull request, or every link event
    #[arg(long, default_value = "projected")]
    pub refs: ReferenceSource,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log level or filter directive (RUST_LOG takes precedence)
    #[arg(long, env = "PANOPTES_LOGGING_LEVEL", default_value = "error")]
    pub log_level: String,

    /// Log format: json or text
    #[arg(long, env = "PANOPTES_LOGGING_FORMAT", default_value = "json")]
    pub log_format: LogFormat,
}

impl Cli {
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}
