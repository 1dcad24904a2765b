use crate::core::engine::AlignReport;
use crate::domain::model::Cell;

/// Human-readable dump of an alignment run: the layout grid, the computed
/// column widths, and each layer's bindings grouped by physical row.
pub fn render_report(report: &AlignReport) -> String {
    let layout = &report.layout;
    let mut out = String::new();

    out.push_str(&format!(
        "Layout '{}': {} keys, {} rows, {} columns\n",
        layout.name,
        layout.key_count(),
        layout.rows.len(),
        layout.column_count(),
    ));
    for row in &layout.rows {
        let markers: Vec<&str> = row
            .iter()
            .map(|cell| match cell {
                Cell::Key => "x",
                Cell::Gap => "·",
            })
            .collect();
        out.push_str(&format!("  {}\n", markers.join(" ")));
    }

    out.push_str(&format!("Column widths: {:?}\n", report.widths));

    for layer in &report.document.layers {
        match &layer.display_name {
            Some(display) => out.push_str(&format!(
                "\nLayer '{}' (display-name \"{}\"): {} bindings\n",
                layer.name,
                display,
                layer.bindings.len(),
            )),
            None => out.push_str(&format!(
                "\nLayer '{}': {} bindings\n",
                layer.name,
                layer.bindings.len(),
            )),
        }

        let mut next = 0;
        for (row_index, row) in layout.rows.iter().enumerate() {
            let keys = row.iter().filter(|cell| **cell == Cell::Key).count();
            let rendered: Vec<String> = layer.bindings[next..next + keys]
                .iter()
                .map(|binding| binding.render())
                .collect();
            next += keys;
            out.push_str(&format!("  row {}: {}\n", row_index, rendered.join(" | ")));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::align::AlignOptions;
    use crate::core::engine::AlignEngine;
    use crate::domain::model::Layout;

    #[test]
    fn test_report_lists_layers_and_widths() {
        let layout =
            Layout::from_json(r#"{"name": "2x2", "rows": [["x", "x"], ["x", "-"]]}"#).unwrap();
        let engine = AlignEngine::new(layout, AlignOptions::default());
        let report = engine
            .inspect("base { display-name = \"BASE\"; bindings = <&kp A &trans &kp B>; };")
            .unwrap();
        let text = render_report(&report);
        assert!(text.contains("Layout '2x2': 3 keys"));
        assert!(text.contains("x ·"));
        assert!(text.contains("Layer 'base' (display-name \"BASE\"): 3 bindings"));
        assert!(text.contains("row 0: &kp A | &trans"));
        assert!(text.contains("row 1: &kp B"));
    }
}
