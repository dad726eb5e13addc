use fdp_types::RecordKind;
use serde::{Deserialize, Serialize};

/// One registered identifier and the kind it was claimed under.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: String,
    pub kind: RecordKind,
    /// Zero-based registration order within the registry.
    pub seq: u64,
}
