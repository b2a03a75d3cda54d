use blockcraft_model::bem::{class_list, element_class};
use blockcraft_model::{Block, BlockKind, HeadingTag, MenuItem};
use tracing::debug;

/// Options for markup compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Indentation string, repeated once per nesting level
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    lines: Vec<String>,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            lines: Vec::new(),
        }
    }

    fn add_line(&mut self, text: &str) {
        let mut line = self.options.indent.repeat(self.depth);
        line.push_str(text);
        self.lines.push(line);
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.lines.join("\n")
    }
}

/// Compile a block forest to markup text
pub fn compile_to_html(blocks: &[Block]) -> String {
    compile_to_html_with_options(blocks, &CompileOptions::default())
}

/// Root blocks are separated by a blank line. Blocks of unsupported kinds
/// produce no output at all.
pub fn compile_to_html_with_options(blocks: &[Block], options: &CompileOptions) -> String {
    blocks
        .iter()
        .filter_map(|block| {
            let mut ctx = Context::new(options);
            compile_block(block, &mut ctx);
            let html = ctx.get_output();
            (!html.is_empty()).then_some(html)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn compile_block(block: &Block, ctx: &mut Context) {
    let class = class_list(block);
    let props = &block.properties;

    match &block.kind {
        BlockKind::Container => {
            let children = block.children();
            if children.is_empty() {
                ctx.add_line(&format!("<div class=\"{}\"></div>", class));
                return;
            }

            ctx.add_line(&format!("<div class=\"{}\">", class));
            ctx.indent();
            for child in children {
                compile_block(child, ctx);
            }
            ctx.dedent();
            ctx.add_line("</div>");
        }

        BlockKind::Heading => {
            let tag = props.tag.unwrap_or(HeadingTag::H1).as_str();
            let text = props.text.as_deref().unwrap_or("Heading");
            ctx.add_line(&format!("<{tag} class=\"{class}\">{text}</{tag}>"));
        }

        BlockKind::Text => {
            let text = props.text.as_deref().unwrap_or("Text content");
            ctx.add_line(&format!("<p class=\"{}\">{}</p>", class, text));
        }

        BlockKind::Button => {
            let text = props.text.as_deref().unwrap_or("Button");
            ctx.add_line(&format!("<button class=\"{}\">{}</button>", class, text));
        }

        BlockKind::Header => compile_header(block, &class, ctx),

        BlockKind::Unknown(kind) => {
            debug!(block_id = %block.id, kind = %kind, "skipping unsupported block kind");
        }
    }
}

fn compile_header(block: &Block, class: &str, ctx: &mut Context) {
    let base = &block.bem_name;
    let logo = block.properties.logo_text.as_deref().unwrap_or("Logo");
    let items = block.menu_items();

    ctx.add_line(&format!("<header class=\"{}\">", class));
    ctx.indent();
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        element_class(base, "container")
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<div class=\"{}\">{}</div>",
        element_class(base, "logo"),
        logo
    ));

    let nav_class = element_class(base, "nav");
    if items.is_empty() {
        ctx.add_line(&format!("<nav class=\"{}\"></nav>", nav_class));
    } else {
        ctx.add_line(&format!("<nav class=\"{}\">", nav_class));
        ctx.indent();
        let item_class = element_class(base, "nav-item");
        for item in items {
            ctx.add_line(&menu_item_anchor(item, &item_class));
        }
        ctx.dedent();
        ctx.add_line("</nav>");
    }

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</header>");
}

fn menu_item_anchor(item: &MenuItem, class: &str) -> String {
    let mut anchor = format!(
        "<a href=\"{}\" class=\"{}\"",
        escape_attribute(item.href_or_default()),
        class
    );
    if let Some(color) = item.color.as_deref().filter(|c| !c.is_empty()) {
        anchor.push_str(&format!(" style=\"color: {}\"", escape_attribute(color)));
    }
    anchor.push('>');
    anchor.push_str(&item.label);
    anchor.push_str("</a>");
    anchor
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
