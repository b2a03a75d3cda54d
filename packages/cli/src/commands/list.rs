use super::open_storage;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print ids only
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn list(args: ListArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let storage = open_storage(&config, cwd);
    let projects = storage.list()?;

    if args.quiet {
        for project in &projects {
            println!("{}", project.id);
        }
        return Ok(());
    }

    if projects.is_empty() {
        println!(
            "{} No projects in {}",
            "⚠️".yellow(),
            storage.store().dir().display()
        );
        return Ok(());
    }

    for project in &projects {
        println!(
            "{}  {}  {} blocks  {}",
            project.id.dimmed(),
            project.name.bright_white(),
            project.block_count,
            project.updated_at.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }

    Ok(())
}
