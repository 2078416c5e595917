//! `ntree keys` — List every element key in traversal order.

use std::path::PathBuf;

use clap::Args;
use nodetree_common::config::DocumentFormat;

use crate::output;

/// Arguments for the `keys` command.
#[derive(Args, Debug)]
pub struct KeysArgs {
    /// Path to the render document (JSON or YAML).
    pub file: PathBuf,

    /// Only list elements of this node type.
    #[arg(long = "type")]
    pub type_name: Option<String>,
}

/// Executes the `keys` command.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded or rendered.
pub fn execute(args: KeysArgs, format: Option<DocumentFormat>) -> anyhow::Result<()> {
    let rendered = super::render_document(&args.file, format)?;
    let elements: Vec<_> = rendered
        .elements()
        .into_iter()
        .filter(|el| args.type_name.as_deref().is_none_or(|t| el.type_name == t))
        .collect();

    print!("{}", output::format_key_table(&elements));
    println!();
    println!("  {} element(s)", elements.len());

    Ok(())
}
