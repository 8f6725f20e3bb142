//! Gate catalog: the read-only collection every screen renders from
//!
//! The catalog is populated once at startup, either from the embedded
//! reference fixture or from a TOML/JSON payload, and never mutated.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::GateRecord;

/// Reference fixture compiled into the binary
const REFERENCE_FIXTURE: &str = include_str!("../assets/gates.toml");

/// On-disk shape of a catalog payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub gates: Vec<GateRecord>,
}

/// Fixed, ordered collection of gate records
#[derive(Debug, Clone, Default)]
pub struct GateCatalog {
    gates: Vec<GateRecord>,
}

impl GateCatalog {
    /// Build a catalog after validating the records
    pub fn new(gates: Vec<GateRecord>) -> Result<Self> {
        validate(&gates)?;
        Ok(Self { gates })
    }

    /// The five reference gates
    pub fn reference() -> Self {
        // The embedded fixture is covered by tests; fall back to empty rather than panic.
        Self::from_toml_str(REFERENCE_FIXTURE).unwrap_or_else(|e| {
            tracing::error!("Embedded gate fixture is invalid: {}", e);
            Self::default()
        })
    }

    /// Parse a TOML payload (`[[gates]]` tables)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.gates)
    }

    /// Parse a JSON payload, either `{"gates": [...]}` or a bare array of gates
    pub fn from_json_str(content: &str) -> Result<Self> {
        let gates = match serde_json::from_str::<serde_json::Value>(content)? {
            value @ serde_json::Value::Array(_) => {
                serde_json::from_value::<Vec<GateRecord>>(value)?
            }
            value => serde_json::from_value::<CatalogFile>(value)?.gates,
        };
        Self::new(gates)
    }

    /// Load a payload from disk, choosing the parser by extension
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        let content = std::fs::read_to_string(path)?;
        let catalog = match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content)?,
            Some("json") => Self::from_json_str(&content)?,
            _ => {
                return Err(Error::UnsupportedCatalogFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        tracing::info!("Loaded {} gates from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All records, insertion order preserved
    pub fn all(&self) -> &[GateRecord] {
        &self.gates
    }

    /// Look up a record by id (linear scan)
    pub fn by_id(&self, id: &str) -> Option<&GateRecord> {
        self.gates.iter().find(|g| g.id == id)
    }

    /// Look up a record by id, reporting a missing id as an error
    pub fn get(&self, id: &str) -> Result<&GateRecord> {
        self.by_id(id).ok_or_else(|| Error::gate_not_found(id))
    }

    /// Records whose name or location contains `term`, ignoring case.
    ///
    /// An empty term returns every record unchanged.
    pub fn search(&self, term: &str) -> Vec<&GateRecord> {
        if term.is_empty() {
            return self.gates.iter().collect();
        }
        let needle = term.to_lowercase();
        self.gates
            .iter()
            .filter(|g| g.matches_lowercase(&needle))
            .collect()
    }

    /// Position of a gate in catalog order
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.gates.iter().position(|g| g.id == id)
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }
}

fn validate(gates: &[GateRecord]) -> Result<()> {
    let mut seen = HashSet::new();

    for gate in gates {
        if gate.id.trim().is_empty() {
            return Err(Error::catalog(format!(
                "gate '{}' has an empty id",
                gate.name
            )));
        }
        if !seen.insert(gate.id.as_str()) {
            return Err(Error::DuplicateGateId {
                id: gate.id.clone(),
            });
        }
        if let Some(sensor) = gate.sensors.iter().find(|s| s.health > 100) {
            return Err(Error::SensorHealthOutOfRange {
                gate_id: gate.id.clone(),
                sensor: sensor.name.clone(),
                health: sensor.health,
            });
        }
    }

    Ok(())
}
