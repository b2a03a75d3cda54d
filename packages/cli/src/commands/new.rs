use super::open_storage;
use crate::config::Config;
use anyhow::Result;
use blockcraft_editor::Document;
use blockcraft_model::BlockKind;
use chrono::Utc;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,

    /// Start from a header plus a hero section instead of an empty page
    #[arg(short, long)]
    pub starter: bool,

    /// Also export the project to this file
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut storage = open_storage(&config, cwd);

    let mut doc = Document::new(&args.name);
    if args.starter {
        add_starter_blocks(&mut doc)?;
    }

    let now = Utc::now();
    let record = doc.save(&mut storage, now)?;

    println!("{}", "📝 Created project".bright_blue().bold());
    println!("  {} {}", "name:".dimmed(), record.name);
    println!("  {} {}", "id:".dimmed(), record.id);
    println!("  {} {}", "blocks:".dimmed(), record.block_count());
    println!(
        "  {} {}",
        "store:".dimmed(),
        storage.store().dir().display()
    );

    if let Some(output) = args.output {
        let path = PathBuf::from(cwd).join(output);
        fs::write(&path, doc.export_json(now)?)?;
        println!("  {} Exported {}", "✓".green(), path.display());
    }

    Ok(())
}

fn add_starter_blocks(doc: &mut Document) -> Result<()> {
    doc.add_block(BlockKind::Header, None, None)?;
    let hero = doc.add_block(BlockKind::Container, None, None)?;
    doc.add_block(BlockKind::Heading, Some(hero.as_str()), None)?;
    doc.add_block(BlockKind::Text, Some(hero.as_str()), None)?;
    doc.add_block(BlockKind::Button, Some(hero.as_str()), None)?;
    Ok(())
}
