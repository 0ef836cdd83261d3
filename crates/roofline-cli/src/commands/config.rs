use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::file_config::FileConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Destination file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let text = FileConfig::default().to_toml()?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)?;
            println!("Wrote default config to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
