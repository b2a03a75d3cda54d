use anyhow::{anyhow, Result};
use blockcraft_editor::load_project_from_json;
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Project file to check
    pub file: PathBuf,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.file);
    let json = fs::read_to_string(&path)?;

    match load_project_from_json(&json, Utc::now()) {
        Ok(record) => {
            let roots = record.blocks.len();
            println!(
                "{} {} is a valid project ({} blocks, {} at the root)",
                "✓".green(),
                args.file.display(),
                record.block_count(),
                roots
            );
            Ok(())
        }
        Err(err) => {
            println!("{} {}", "✗".red(), args.file.display());
            println!("  {}", err.to_string().red());
            Err(anyhow!("{} is not a valid project", args.file.display()))
        }
    }
}
