use super::load_project;
use crate::config::Config;
use anyhow::Result;
use blockcraft_model::Block;
use clap::Args;
use colored::Colorize;

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Project file, or the id of a stored project
    pub file: String,
}

pub fn info(args: InfoArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let record = load_project(&args.file, &config, cwd)?;

    println!("{}", record.name.bright_white().bold());
    println!("  {} {}", "id:".dimmed(), record.id);
    println!("  {} {}", "created:".dimmed(), record.created_at.to_rfc3339());
    println!("  {} {}", "updated:".dimmed(), record.updated_at.to_rfc3339());
    println!("  {} {}", "blocks:".dimmed(), record.block_count());
    if let Some(description) = &record.metadata.description {
        println!("  {} {}", "description:".dimmed(), description);
    }

    if !record.blocks.is_empty() {
        println!();
        for line in outline(&record.blocks) {
            println!("  {}", line);
        }
    }

    Ok(())
}

/// One indented line per block: `kind .bem-name #id`
fn outline(blocks: &[Block]) -> Vec<String> {
    let mut lines = Vec::new();
    outline_into(blocks, 0, &mut lines);
    lines
}

fn outline_into(blocks: &[Block], depth: usize, lines: &mut Vec<String>) {
    for block in blocks {
        lines.push(format!(
            "{}{} .{} #{}",
            "  ".repeat(depth),
            block.kind.as_str(),
            block.bem_name,
            block.id
        ));
        outline_into(block.children(), depth + 1, lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockcraft_model::BlockKind;

    #[test]
    fn test_outline_indents_children() {
        let blocks = vec![
            Block::new("c", BlockKind::Container).with_child(Block::new("t", BlockKind::Text)),
            Block::new("b", BlockKind::Button),
        ];

        assert_eq!(
            outline(&blocks),
            vec![
                "container .container #c",
                "  text .text #t",
                "button .button #b",
            ]
        );
    }
}
