//! Markdown output formatters for CLI commands

use crate::model::{AdapterDescriptor, CollectionReport, CollectionValue};

/// Format a CollectionReport as markdown
pub fn report(council: &str, report: &CollectionReport) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", council));

    if report.is_empty() {
        md.push_str("No collections found.\n");
        return md;
    }

    for (label, value) in report.iter() {
        let value = match value {
            CollectionValue::Text(text) => text.clone(),
            CollectionValue::List(items) if items.is_empty() => "(none)".to_string(),
            CollectionValue::List(items) => items.join(", "),
        };
        md.push_str(&format!("- **{}**: {}\n", label, value));
    }

    md
}

/// Format the selectable councils as markdown
pub fn councils(descriptors: &[AdapterDescriptor]) -> String {
    let mut md = String::new();

    md.push_str("# Councils\n\n");

    if descriptors.is_empty() {
        md.push_str("No councils registered.\n");
    } else {
        for d in descriptors {
            md.push_str(&format!("- `{}` — {}\n", d.name, d.description));
        }
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_markdown() {
        let mut r = CollectionReport::with_bins_scaffold();
        r.insert("Recycling", "Monday 12 June");
        r.insert("Refuse", "Friday 16 June");

        assert_eq!(
            report("StockportBoroughCouncil", &r),
            "# StockportBoroughCouncil\n\n\
             - **bins**: (none)\n\
             - **Recycling**: Monday 12 June\n\
             - **Refuse**: Friday 16 June\n"
        );
    }

    #[test]
    fn test_report_markdown_empty() {
        let md = report("Somewhere", &CollectionReport::new());
        assert!(md.contains("No collections found."));
    }

    #[test]
    fn test_councils_markdown() {
        let md = councils(&[AdapterDescriptor {
            name: "StockportBoroughCouncil",
            description: "Stockport Borough Council",
        }]);
        assert!(md.contains("- `StockportBoroughCouncil` — Stockport Borough Council"));
        assert!(councils(&[]).contains("No councils registered."));
    }
}
