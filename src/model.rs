use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key of the placeholder entry some councils seed every report with
pub const BINS_SCAFFOLD_KEY: &str = "bins";

/// Static metadata for a council adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AdapterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
}

/// An HTTP response body as handed to a council's parser
#[derive(Debug, Clone)]
pub struct RawPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl RawPage {
    pub fn new(url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            status,
            body: body.into(),
        }
    }
}

/// Value recorded against a bin type
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum CollectionValue {
    /// Free text, usually the next collection date
    Text(String),
    /// Only produced by the `"bins"` scaffold entry, which is always empty
    List(Vec<String>),
}

impl CollectionValue {
    #[cfg(test)]
    pub(crate) fn as_text(&self) -> Option<&str> {
        match self {
            CollectionValue::Text(s) => Some(s),
            CollectionValue::List(_) => None,
        }
    }
}

impl From<String> for CollectionValue {
    fn from(s: String) -> Self {
        CollectionValue::Text(s)
    }
}

impl From<&str> for CollectionValue {
    fn from(s: &str) -> Self {
        CollectionValue::Text(s.to_string())
    }
}

/// Bin type → collection description, in the order bin types first appeared on the page.
///
/// Re-inserting an existing label replaces its value but keeps its position,
/// so the last block on the page for a given label wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionReport {
    entries: Vec<(String, CollectionValue)>,
}

impl CollectionReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A report pre-seeded with `"bins": []`.
    ///
    /// This is leftover scaffolding from the service-item councils and carries
    /// no data. It is kept so their output shape stays stable; new adapters
    /// should start from [`CollectionReport::new`].
    pub fn with_bins_scaffold() -> Self {
        Self {
            entries: vec![(
                BINS_SCAFFOLD_KEY.to_string(),
                CollectionValue::List(Vec::new()),
            )],
        }
    }

    /// Insert or overwrite `label`
    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<CollectionValue>) {
        let label = label.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == label) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((label, value)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&CollectionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == label)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn has_bins_scaffold(&self) -> bool {
        matches!(self.get(BINS_SCAFFOLD_KEY), Some(CollectionValue::List(_)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CollectionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[cfg(test)]
    pub(crate) fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }
}

// Serialized as a plain JSON object, keeping insertion order
impl Serialize for CollectionReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// JSON output for the council listing
#[derive(Debug, serde::Serialize)]
pub struct CouncilListing {
    pub councils: Vec<AdapterDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_write_wins_keeps_position() {
        let mut report = CollectionReport::new();
        report.insert("Refuse", "Monday");
        report.insert("Recycling", "Tuesday");
        report.insert("Refuse", "Friday");

        assert_eq!(report.len(), 2);
        assert_eq!(report.labels(), vec!["Refuse", "Recycling"]);
        assert_eq!(report.get("Refuse").and_then(|v| v.as_text()), Some("Friday"));
    }

    #[test]
    fn test_bins_scaffold() {
        let report = CollectionReport::with_bins_scaffold();
        assert_eq!(report.len(), 1);
        assert!(report.has_bins_scaffold());
        assert!(!CollectionReport::new().has_bins_scaffold());
    }

    #[test]
    fn test_serialize_preserves_order() {
        let mut report = CollectionReport::with_bins_scaffold();
        report.insert("Recycling", "Monday 12 June");
        report.insert("Garden", "Tuesday 13 June");

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"bins":[],"Recycling":"Monday 12 June","Garden":"Tuesday 13 June"}"#
        );
    }

    #[test]
    fn test_empty_report_serializes_as_empty_object() {
        let json = serde_json::to_string(&CollectionReport::new()).unwrap();
        assert_eq!(json, "{}");
    }
}
