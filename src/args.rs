use crate::db::DbArgs;
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Resolve vulnerability database flags into validated repository options"
)]
pub struct Args {
    #[arg(
        short,
        long,
        value_name = "FILE",
        conflicts_with = "no_config",
        help = "Config file path (default: nearest trivy.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Do not look for a config file")]
    pub no_config: bool,

    #[arg(short, long, value_enum, default_value = "json", help = "Output format")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Write output to file (in addition to stdout)")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Suppress output")]
    pub quiet: bool,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[command(flatten)]
    pub db: DbArgs,
}
