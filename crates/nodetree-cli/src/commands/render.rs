//! `ntree render` — Render a document and print the resolved tree.

use std::path::PathBuf;

use clap::Args;
use nodetree_common::config::DocumentFormat;

use crate::output;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the render document (JSON or YAML).
    pub file: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pub pretty: bool,

    /// Emit YAML instead of JSON.
    #[arg(long, conflicts_with = "pretty")]
    pub yaml: bool,

    /// Write output to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Executes the `render` command.
///
/// # Errors
///
/// Returns an error if the document cannot be loaded, rendered, or written.
pub fn execute(args: RenderArgs, format: Option<DocumentFormat>) -> anyhow::Result<()> {
    let rendered = super::render_document(&args.file, format)?;

    let text = if args.yaml {
        serde_yaml::to_string(&rendered)?
    } else if args.pretty {
        serde_json::to_string_pretty(&rendered)?
    } else {
        serde_json::to_string(&rendered)?
    };

    if let Some(ref out_path) = args.output {
        std::fs::write(out_path, output::terminated(&text))?;
        println!(
            "Rendered {} -> {} ({} element(s))",
            args.file.display(),
            out_path.display(),
            rendered.elements().len()
        );
    } else {
        print!("{}", output::terminated(&text));
    }

    Ok(())
}
