use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// The level a metadata record occupies in the FDP tree.
///
/// The set is closed: a publishing point owns catalogs, catalogs own
/// datasets, datasets own distributions. Distributions are leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// The FAIR Data Point itself (one per graph).
    PublishingPoint,
    /// A `dcat:Catalog` published by the FDP.
    Catalog,
    /// A `dcat:Dataset` listed in a catalog.
    Dataset,
    /// A `dcat:Distribution` of a dataset.
    Distribution,
}

impl RecordKind {
    /// All kinds, in tree order (root first).
    pub const ALL: [RecordKind; 4] = [
        RecordKind::PublishingPoint,
        RecordKind::Catalog,
        RecordKind::Dataset,
        RecordKind::Distribution,
    ];

    /// Path segment used when deriving a resource address.
    ///
    /// The publishing point has a fixed address and no segment.
    pub fn path_segment(&self) -> Option<&'static str> {
        match self {
            Self::PublishingPoint => None,
            Self::Catalog => Some("catalog"),
            Self::Dataset => Some("dataset"),
            Self::Distribution => Some("distribution"),
        }
    }

    /// Human-readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PublishingPoint => "FDP",
            Self::Catalog => "Catalog",
            Self::Dataset => "Dataset",
            Self::Distribution => "Dataset/distribution",
        }
    }

    /// Short token form (`fdp`, `catalog`, `dataset`, `distribution`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PublishingPoint => "fdp",
            Self::Catalog => "catalog",
            Self::Dataset => "dataset",
            Self::Distribution => "distribution",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fdp" | "publishing_point" => Ok(Self::PublishingPoint),
            "catalog" => Ok(Self::Catalog),
            "dataset" => Ok(Self::Dataset),
            "distribution" => Ok(Self::Distribution),
            other => Err(TypeError::UnknownRecordKind(other.to_string())),
        }
    }
}
