use crate::council::{service_item, Council};
use crate::error::{Error, Result};
use crate::model::AdapterDescriptor;
use std::collections::HashSet;

/// Names starting with this are internal (templates etc.) and never selectable
pub const RESERVED_PREFIX: &str = "_";

pub type CouncilFactory = fn() -> Result<Box<dyn Council>>;

/// One registered council: its name and how to build it
#[derive(Clone, Copy)]
pub struct RegistryEntry {
    pub descriptor: AdapterDescriptor,
    pub factory: CouncilFactory,
}

/// Every council shipped with this crate, in listing order.
/// Adding a council means adding a line here.
pub const BUILTIN_COUNCILS: &[RegistryEntry] = &[
    RegistryEntry {
        descriptor: service_item::STOCKPORT,
        factory: service_item::stockport,
    },
];

/// Maps council names to adapter factories
pub struct CouncilRegistry {
    entries: Vec<RegistryEntry>,
}

impl CouncilRegistry {
    /// Build a registry from a table, rejecting empty or duplicate names
    pub fn new(entries: &[RegistryEntry]) -> Result<Self> {
        let mut seen = HashSet::new();
        for entry in entries {
            let name = entry.descriptor.name;
            if name.trim().is_empty() {
                return Err(Error::RegistryUnavailable(
                    "council table contains an entry with an empty name".to_string(),
                ));
            }
            if !seen.insert(name) {
                return Err(Error::RegistryUnavailable(format!(
                    "council {name} is registered more than once"
                )));
            }
        }

        Ok(Self {
            entries: entries.to_vec(),
        })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(BUILTIN_COUNCILS)
    }

    fn selectable(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries
            .iter()
            .filter(|e| !e.descriptor.name.starts_with(RESERVED_PREFIX))
    }

    /// Names of all selectable councils, in registration order
    pub fn list(&self) -> Vec<&'static str> {
        self.selectable().map(|e| e.descriptor.name).collect()
    }

    pub fn descriptors(&self) -> Vec<AdapterDescriptor> {
        self.selectable().map(|e| e.descriptor).collect()
    }

    /// Construct the council registered under exactly `name`
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Council>> {
        let entry = self
            .selectable()
            .find(|e| e.descriptor.name == name)
            .ok_or_else(|| self.unknown(name))?;
        self.construct(entry)
    }

    fn construct(&self, entry: &RegistryEntry) -> Result<Box<dyn Council>> {
        let name = entry.descriptor.name;
        (entry.factory)().map_err(|e| match e {
            Error::AdapterLoad { .. } => e,
            other => Error::AdapterLoad {
                name: name.to_string(),
                message: other.to_string(),
            },
        })
    }

    fn unknown(&self, name: &str) -> Error {
        let available = self.list();
        let name_lower = name.to_lowercase();
        let mut case_matches = available
            .iter()
            .filter(|candidate| candidate.to_lowercase() == name_lower);
        let suggestion = match (case_matches.next(), case_matches.next()) {
            (Some(only), None) => Some(only.to_string()),
            _ => None,
        };

        Error::UnknownAdapter {
            name: name.to_string(),
            suggestion,
            available: available.into_iter().map(String::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn broken() -> Result<Box<dyn Council>> {
        Err(Error::AdapterLoad {
            name: "Broken".to_string(),
            message: "selector did not compile".to_string(),
        })
    }

    fn failing_with_parse_error() -> Result<Box<dyn Council>> {
        Err(Error::parse("Odd", "unexpected"))
    }

    fn entry(name: &'static str, factory: CouncilFactory) -> RegistryEntry {
        RegistryEntry {
            descriptor: AdapterDescriptor {
                name,
                description: "",
            },
            factory,
        }
    }

    #[test]
    fn test_list_builtin() {
        let registry = CouncilRegistry::builtin().unwrap();
        assert_eq!(registry.list(), vec!["StockportBoroughCouncil"]);
    }

    #[test]
    fn test_list_excludes_reserved_prefix() {
        let registry = CouncilRegistry::new(&[
            entry("_Template", service_item::stockport),
            entry("Stockport", service_item::stockport),
        ])
        .unwrap();
        assert_eq!(registry.list(), vec!["Stockport"]);
        assert_eq!(registry.descriptors().len(), 1);
    }

    #[test]
    fn test_every_listed_council_resolves() {
        let registry = CouncilRegistry::builtin().unwrap();
        for name in registry.list() {
            let council = registry.resolve(name).unwrap();
            assert_eq!(council.name(), name);
        }
    }

    #[test]
    fn test_resolve_unknown() {
        let registry = CouncilRegistry::builtin().unwrap();
        let err = registry.resolve("AtlantisCityCouncil").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownAdapter);
        match err {
            Error::UnknownAdapter { available, .. } => {
                assert_eq!(available, vec!["StockportBoroughCouncil".to_string()]);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_reserved_names_do_not_resolve() {
        let registry =
            CouncilRegistry::new(&[entry("_Template", service_item::stockport)]).unwrap();
        let err = registry.resolve("_Template").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownAdapter);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = CouncilRegistry::builtin().unwrap();
        let err = registry.resolve("stockportboroughcouncil").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::UnknownAdapter);
        match err {
            Error::UnknownAdapter { suggestion, .. } => {
                assert_eq!(suggestion.as_deref(), Some("StockportBoroughCouncil"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_no_suggestion_when_case_match_is_ambiguous() {
        let registry = CouncilRegistry::new(&[
            entry("Ambridge", service_item::stockport),
            entry("AMBRIDGE", service_item::stockport),
        ])
        .unwrap();
        match registry.resolve("ambridge").err().unwrap() {
            Error::UnknownAdapter { suggestion, .. } => assert_eq!(suggestion, None),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_factory_failure_is_load_error() {
        let registry = CouncilRegistry::new(&[
            entry("Broken", broken),
            entry("Odd", failing_with_parse_error),
        ])
        .unwrap();
        for name in ["Broken", "Odd"] {
            let err = registry.resolve(name).err().unwrap();
            assert_eq!(err.kind(), ErrorKind::AdapterLoadError, "council {name}");
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = CouncilRegistry::new(&[
            entry("Twice", service_item::stockport),
            entry("Twice", service_item::stockport),
        ])
        .err()
        .unwrap();
        assert_eq!(err.kind(), ErrorKind::RegistryUnavailable);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = CouncilRegistry::new(&[entry(" ", service_item::stockport)])
            .err()
            .unwrap();
        assert_eq!(err.kind(), ErrorKind::RegistryUnavailable);
    }

    #[test]
    fn test_empty_registry_lists_nothing() {
        let registry = CouncilRegistry::new(&[]).unwrap();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn test_builtin_descriptors_have_descriptions() {
        for entry in BUILTIN_COUNCILS {
            assert!(
                !entry.descriptor.description.is_empty(),
                "Council {} has no description",
                entry.descriptor.name
            );
        }
    }
}
