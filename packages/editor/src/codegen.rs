//! Markup + stylesheet generation for a whole forest.

use blockcraft_compiler_css as css;
use blockcraft_compiler_html as html;
use blockcraft_model::Block;

/// Two opaque text blobs, no embedded metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedCode {
    pub markup: String,
    pub stylesheet: String,
}

#[derive(Debug, Clone, Default)]
pub struct CodegenOptions {
    pub markup: html::CompileOptions,
    pub stylesheet: css::CompileOptions,
}

pub fn generate_code(blocks: &[Block]) -> GeneratedCode {
    generate_code_with_options(blocks, &CodegenOptions::default())
}

pub fn generate_code_with_options(blocks: &[Block], options: &CodegenOptions) -> GeneratedCode {
    GeneratedCode {
        markup: html::compile_to_html_with_options(blocks, &options.markup),
        stylesheet: css::compile_to_css_with_options(blocks, &options.stylesheet),
    }
}
