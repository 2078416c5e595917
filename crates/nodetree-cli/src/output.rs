//! Formatted output helpers for CLI commands.

use std::fmt::Write;

use nodetree_core::Element;

/// Returns `text` with exactly one trailing newline.
#[must_use]
pub fn terminated(text: &str) -> String {
    let mut out = text.trim_end_matches('\n').to_owned();
    out.push('\n');
    out
}

/// Formats elements as an aligned `KEY  TYPE  COMPONENT  PROP` table.
#[must_use]
pub fn format_key_table(elements: &[&Element]) -> String {
    let rows: Vec<[String; 4]> = elements
        .iter()
        .map(|el| {
            let prop = match (&el.prop_key, el.index) {
                (Some(key), Some(index)) => format!("{key}[{index}]"),
                (Some(key), None) => key.clone(),
                (None, Some(index)) => format!("[{index}]"),
                (None, None) => "-".to_owned(),
            };
            [
                el.key.to_string(),
                el.type_name.clone(),
                el.component.clone(),
                prop,
            ]
        })
        .collect();

    let header = ["KEY", "TYPE", "COMPONENT", "PROP"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_row = |cells: [&str; 4]| {
        let line = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    };
    push_row(header);
    for row in &rows {
        push_row([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()]);
    }
    out
}

#[cfg(test)]
mod tests {
    use nodetree_core::{ComponentRegistry, Renderer, TagComponent};
    use serde_json::json;

    use super::*;

    #[test]
    fn terminated_normalizes_trailing_newlines() {
        assert_eq!(terminated("{}"), "{}\n");
        assert_eq!(terminated("{}\n\n"), "{}\n");
    }

    #[test]
    fn key_table_aligns_columns() {
        let renderer = Renderer::new(ComponentRegistry::new().with("Btn", TagComponent::new("button")));
        let rendered = renderer
            .render(&json!({"type": "Bar", "props": {"items": [{"type": "Btn", "props": {}}]}}))
            .expect("render");
        let table = format_key_table(&rendered.elements());
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "KEY      TYPE  COMPONENT  PROP");
        assert_eq!(lines[1], "Bar_0    Bar   Bar        -");
        assert_eq!(lines[2], "Btn_0_0  Btn   button     items[0]");
    }

    #[test]
    fn empty_table_has_only_header() {
        assert_eq!(format_key_table(&[]), "KEY  TYPE  COMPONENT  PROP\n");
    }
}
