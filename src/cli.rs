use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "appearance")]
#[command(version = "0.1.0")]
#[command(about = "Report the host's light/dark appearance preference")]
pub struct CliArgs {
    /// Config file to read instead of the default locations
    pub config: Option<PathBuf>,

    /// Print the change payload as JSON instead of the bare scheme name
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Log at debug level instead of info
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl CliArgs {
    /// Check if the provided config path exists (following symlinks)
    pub fn config_exists(&self) -> bool {
        if let Some(path) = &self.config {
            std::fs::metadata(path).is_ok()
        } else {
            false
        }
    }
}

pub fn parse_args() -> Result<CliArgs, Box<dyn std::error::Error>> {
    Ok(CliArgs::parse())
}
