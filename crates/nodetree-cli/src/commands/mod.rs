//! CLI command definitions and dispatch.

pub mod keys;
pub mod render;

use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use nodetree_common::config::{DocumentFormat, RenderDocument};
use nodetree_core::{Rendered, Renderer};

/// ntree — resolve serialized node trees into component trees.
#[derive(Parser, Debug)]
#[command(name = "ntree", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Input format; inferred from the file extension when omitted.
    #[arg(long, global = true, value_enum)]
    pub format: Option<InputFormat>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a document and print the resolved tree.
    Render(render::RenderArgs),
    /// Render a document and list every element key in traversal order.
    Keys(keys::KeysArgs),
}

/// Document formats accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON document.
    Json,
    /// YAML document.
    Yaml,
}

impl From<InputFormat> for DocumentFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => Self::Json,
            InputFormat::Yaml => Self::Yaml,
        }
    }
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format.map(DocumentFormat::from);
    match cli.command {
        Command::Render(args) => render::execute(args, format),
        Command::Keys(args) => keys::execute(args, format),
    }
}

/// Loads a document and renders its entry in a single pass.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or rendered.
pub fn render_document(path: &Path, format: Option<DocumentFormat>) -> anyhow::Result<Rendered> {
    tracing::info!(path = %path.display(), "loading render document");
    let document = RenderDocument::load(path, format)
        .with_context(|| format!("failed to load document {}", path.display()))?;

    let renderer = Renderer::from_document(&document);
    tracing::debug!(registry = ?renderer.registry(), "renderer configured");

    renderer
        .render(&document.entry)
        .with_context(|| format!("failed to render {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn cli_parses_global_format() {
        let cli = Cli::try_parse_from(["ntree", "keys", "tree.txt", "--format", "yaml"])
            .expect("should parse");
        assert_eq!(cli.format, Some(InputFormat::Yaml));
        assert!(matches!(cli.command, Command::Keys(_)));
    }

    #[test]
    fn render_document_reads_yaml() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            "entry:\n  type: Title\n  props:\n    text: Hi\nmapping:\n  Title: h1\n"
        )
        .expect("write");

        let rendered = render_document(file.path(), None).expect("render");
        let title = rendered.as_element().expect("element");
        assert_eq!(title.component, "h1");
    }

    #[test]
    fn render_document_surfaces_lookup_errors() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("tempfile");
        writeln!(
            file,
            r#"{{"entry": {{"type": "ComponentLookup", "props": {{"componentType": "Missing", "componentIndex": 0}}}}, "components": {{}}}}"#
        )
        .expect("write");

        let err = render_document(file.path(), None).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("Missing"), "got: {chain}");
    }
}
