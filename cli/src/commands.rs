pub mod resolve;

use std::ffi::OsString;
use std::fmt;

use clap::Parser;

const DEFAULT_PROGRAM_NAME: &str = "resolve";

#[derive(Parser, Debug)]
#[command(name = "resolve")]
#[command(about = "Resolve a host name to its first IPv4 address.")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CommandLine {
    /// Remote host name to resolve, taken verbatim
    #[arg(value_name = "hostname", allow_hyphen_values = true)]
    pub hostname: String,
}

/// Arguments did not hold exactly one host name.
#[derive(Debug)]
pub struct ParseFailure {
    program: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Usage: {} <hostname>", self.program)
    }
}

impl CommandLine {
    pub fn parse_args() -> Result<Self, ParseFailure> {
        Self::parse_from_args(std::env::args_os())
    }

    pub fn parse_from_args<I, T>(args: I) -> Result<Self, ParseFailure>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let program: String = args
            .first()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

        Self::try_parse_from(&args).map_err(|_| ParseFailure { program })
    }
}
