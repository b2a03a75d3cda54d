use super::load_project;
use crate::config::Config;
use anyhow::Result;
use blockcraft_compiler_html::CompileOptions as MarkupOptions;
use blockcraft_editor::{generate_code_with_options, sanitize_filename, CodegenOptions};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    Markup,
    Stylesheet,
    Both,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project file, or the id of a stored project
    pub file: String,

    /// Output directory (overrides config); prints to stdout when neither is set
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// What to emit
    #[arg(short, long, value_enum, default_value = "both")]
    pub target: Target,
}

pub fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let record = load_project(&args.file, &config, cwd)?;

    let options = CodegenOptions {
        markup: MarkupOptions::default(),
        stylesheet: config.stylesheet_options(),
    };
    let code = generate_code_with_options(&record.blocks, &options);
    info!(project_id = %record.id, blocks = record.block_count(), "generated code");

    let mut outputs = Vec::new();
    if matches!(args.target, Target::Markup | Target::Both) {
        outputs.push(("html", code.markup));
    }
    if matches!(args.target, Target::Stylesheet | Target::Both) {
        outputs.push(("css", code.stylesheet));
    }

    let out_dir = args
        .out_dir
        .map(|dir| PathBuf::from(cwd).join(dir))
        .or_else(|| config.out_path(cwd));

    let Some(out_dir) = out_dir else {
        for (_, text) in outputs {
            println!("{}", text);
        }
        return Ok(());
    };

    fs::create_dir_all(&out_dir)?;
    let stem = sanitize_filename(&record.name);
    for (extension, text) in outputs {
        let path = out_dir.join(format!("{}.{}", stem, extension));
        fs::write(&path, text)?;
        println!("  {} {} → {}", "✓".green(), record.name, path.display());
    }

    Ok(())
}
