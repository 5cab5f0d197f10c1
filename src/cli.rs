use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "eqsolve",
    about = "Classify and solve a*x^2 + b*x + c = 0",
    version
)]
pub struct EqsolveCli {
    /// Coefficients a b c; read from stdin when omitted
    #[arg(value_name = "COEFF", num_args = 3, allow_negative_numbers = true)]
    pub coefficients: Vec<String>,

    /// Output format (default: text, or the config file's `format`)
    #[arg(long = "format", value_enum, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Do not print the prompt before reading stdin
    #[arg(long = "no-prompt", action = ArgAction::SetTrue)]
    pub no_prompt: bool,

    /// Disable colored output
    #[arg(long = "no-color", action = ArgAction::SetTrue)]
    pub no_color: bool,

    /// Path to config (TOML); default: ~/.eqsolve/config.toml
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}
