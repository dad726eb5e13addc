//! The FAIR Data Point hierarchy builder.
//!
//! [`FairGraph`] owns one identifier registry and one partitioned graph,
//! both scoped to a single base URI. Records are added top-down in three
//! build calls. Each level is split into a *claim* phase, which registers
//! the child identifiers a parent declares, and a *fill* phase, which
//! checks that a record was claimed under the right kind and writes its
//! statements into its own partition.

use std::collections::HashSet;

use fdp_format::Format;
use fdp_graph::{term, GraphStore, InMemoryGraphStore, Partition, Statement};
use fdp_registry::{IdentifierRegistry, InMemoryIdentifierRegistry};
use fdp_types::vocab::{self, dcat, dct, rdf, rdfs};
use fdp_types::{RecordKind, UriScheme};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::BuilderConfig;
use crate::error::{BuildError, BuildResult};
use crate::fields;
use crate::record::MetadataRecord;
use crate::serialize::{serialize_partition, serialize_partition_as};

/// Builder for one FAIR Data Point graph.
///
/// Build calls take `&mut self`; everything else takes `&self`, so a
/// finished graph can be shared between threads for serialization.
pub struct FairGraph {
    config: BuilderConfig,
    uris: UriScheme,
    registry: InMemoryIdentifierRegistry,
    store: InMemoryGraphStore,
    filled: HashSet<(RecordKind, String)>,
}

impl FairGraph {
    /// A builder for `base_uri` with default configuration.
    pub fn new(base_uri: impl Into<String>) -> BuildResult<Self> {
        Self::with_config(BuilderConfig::for_base(base_uri))
    }

    /// A builder with an explicit configuration.
    pub fn with_config(config: BuilderConfig) -> BuildResult<Self> {
        config.validate()?;
        let uris = config.uri_scheme()?;
        Ok(Self {
            config,
            uris,
            registry: InMemoryIdentifierRegistry::new(),
            store: InMemoryGraphStore::new(),
            filled: HashSet::new(),
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn uris(&self) -> &UriScheme {
        &self.uris
    }

    /// Read-only view of every registered identifier.
    pub fn registry(&self) -> &InMemoryIdentifierRegistry {
        &self.registry
    }

    pub fn store(&self) -> &InMemoryGraphStore {
        &self.store
    }

    /// Resource address of record `id` of `kind`.
    pub fn address_for(&self, kind: RecordKind, id: &str) -> String {
        self.uris.address_for(kind, id)
    }

    // -----------------------------------------------------------------
    // Build calls
    // -----------------------------------------------------------------

    /// Add the publishing point and declare its catalogs.
    ///
    /// Requires `fdp_id` and `catalog_ids`. A graph holds exactly one
    /// publishing point.
    pub fn build_publishing_point(&mut self, record: &Value) -> BuildResult<()> {
        self.transaction("build_publishing_point", |graph| {
            let record = MetadataRecord::new(record, RecordKind::PublishingPoint)?;
            let fdp_id = record.require_str("fdp_id")?;
            let catalog_ids = record.require_str_list("catalog_ids")?;

            graph.claim_publishing_point(fdp_id)?;
            graph.claim_catalogs(&catalog_ids)?;
            graph.fill_publishing_point(&record)?;

            info!(fdp_id, catalogs = catalog_ids.len(), "built publishing point");
            Ok(())
        })
    }

    /// Fill in the catalogs under `catalogs` and declare their datasets.
    pub fn build_catalogs(&mut self, record: &Value) -> BuildResult<()> {
        self.transaction("build_catalogs", |graph| {
            let record = MetadataRecord::new(record, RecordKind::Catalog)?;
            let entries = record.require_records("catalogs", RecordKind::Catalog)?;

            for entry in &entries {
                let catalog_id = entry.require_str("catalog_id")?;
                let dataset_ids = entry.require_str_list("dataset_ids")?;
                graph.require_declared(catalog_id, RecordKind::Catalog)?;
                graph.ensure_unfilled(catalog_id, RecordKind::Catalog)?;

                graph.claim_datasets(&dataset_ids)?;
                graph.fill_catalog(entry)?;
            }

            info!(catalogs = entries.len(), "built catalogs");
            Ok(())
        })
    }

    /// Fill in the datasets under `datasets` together with their inline
    /// distributions.
    pub fn build_datasets_and_distributions(&mut self, record: &Value) -> BuildResult<()> {
        self.transaction("build_datasets_and_distributions", |graph| {
            let record = MetadataRecord::new(record, RecordKind::Dataset)?;
            let entries = record.require_records("datasets", RecordKind::Dataset)?;

            let mut distributions = 0;
            for entry in &entries {
                let dataset_id = entry.require_str("dataset_id")?;
                let children = entry.require_records("distributions", RecordKind::Distribution)?;
                graph.require_declared(dataset_id, RecordKind::Dataset)?;
                graph.ensure_unfilled(dataset_id, RecordKind::Dataset)?;

                graph.fill_dataset(entry)?;
                for child in &children {
                    graph.fill_distribution(dataset_id, child)?;
                }
                distributions += children.len();
            }

            info!(
                datasets = entries.len(),
                distributions, "built datasets and distributions"
            );
            Ok(())
        })
    }

    // -----------------------------------------------------------------
    // Claim phase
    // -----------------------------------------------------------------

    /// Register the publishing point identifier.
    pub fn claim_publishing_point(&mut self, fdp_id: &str) -> BuildResult<()> {
        let existing = self.registry.ids_of_kind(RecordKind::PublishingPoint)?;
        if let Some(other) = existing.into_iter().find(|other| other != fdp_id) {
            warn!(fdp_id, existing = %other, "publishing point already built");
            return Err(BuildError::AlreadyBuilt {
                id: other,
                kind: RecordKind::PublishingPoint,
            });
        }
        self.claim(RecordKind::PublishingPoint, &[fdp_id.to_string()])
    }

    /// Forward-declare catalog identifiers.
    pub fn claim_catalogs(&mut self, ids: &[String]) -> BuildResult<()> {
        self.claim(RecordKind::Catalog, ids)
    }

    /// Forward-declare dataset identifiers.
    pub fn claim_datasets(&mut self, ids: &[String]) -> BuildResult<()> {
        self.claim(RecordKind::Dataset, ids)
    }

    fn claim(&mut self, kind: RecordKind, ids: &[String]) -> BuildResult<()> {
        self.registry.register_all(ids, kind).map_err(|e| {
            warn!(kind = %kind, error = %e, "claim rejected");
            BuildError::from(e)
        })
    }

    // -----------------------------------------------------------------
    // Fill phase
    // -----------------------------------------------------------------

    /// Write the publishing point partition.
    ///
    /// One `rdfs:seeAlso` link is written per entry of `catalog_ids`.
    pub fn fill_publishing_point(&mut self, record: &MetadataRecord<'_>) -> BuildResult<()> {
        let fdp_id = record.require_str("fdp_id")?;
        let catalog_ids = record.require_str_list("catalog_ids")?;
        self.require_declared(fdp_id, RecordKind::PublishingPoint)?;
        self.ensure_unfilled(fdp_id, RecordKind::PublishingPoint)?;

        let subject = self.uris.publishing_point_address();
        let mut statements = vec![
            link(&subject, rdf::TYPE, dct::AGENT)?,
            link(&subject, rdfs::SEE_ALSO, &self.uris.document_address())?,
            Statement::about(&subject, dct::IDENTIFIER, term::string(fdp_id))?,
            self.language_statement(&subject)?,
        ];
        for catalog_id in &catalog_ids {
            let target = self.address_for(RecordKind::Catalog, catalog_id);
            statements.push(link(&subject, rdfs::SEE_ALSO, &target)?);
        }
        statements.extend(fields::apply(&subject, record, &self.config.language)?);

        self.write(&subject, statements)?;
        self.mark_filled(fdp_id, RecordKind::PublishingPoint);
        Ok(())
    }

    /// Write one catalog partition. The catalog must have been claimed.
    pub fn fill_catalog(&mut self, record: &MetadataRecord<'_>) -> BuildResult<()> {
        let catalog_id = record.require_str("catalog_id")?;
        let dataset_ids = record.require_str_list("dataset_ids")?;
        self.require_declared(catalog_id, RecordKind::Catalog)?;
        self.ensure_unfilled(catalog_id, RecordKind::Catalog)?;

        let subject = self.address_for(RecordKind::Catalog, catalog_id);
        let mut statements = vec![
            link(&subject, rdf::TYPE, dcat::CATALOG)?,
            Statement::about(&subject, dct::IDENTIFIER, term::string(catalog_id))?,
            self.language_statement(&subject)?,
        ];
        for dataset_id in &dataset_ids {
            let target = self.address_for(RecordKind::Dataset, dataset_id);
            statements.push(link(&subject, dcat::DATASET, &target)?);
        }
        statements.extend(fields::apply(&subject, record, &self.config.language)?);

        self.write(&subject, statements)?;
        self.mark_filled(catalog_id, RecordKind::Catalog);
        Ok(())
    }

    /// Write one dataset partition, without its distributions.
    pub fn fill_dataset(&mut self, record: &MetadataRecord<'_>) -> BuildResult<()> {
        let dataset_id = record.require_str("dataset_id")?;
        self.require_declared(dataset_id, RecordKind::Dataset)?;
        self.ensure_unfilled(dataset_id, RecordKind::Dataset)?;

        let subject = self.address_for(RecordKind::Dataset, dataset_id);
        let mut statements = vec![
            link(&subject, rdf::TYPE, dcat::DATASET_CLASS)?,
            Statement::about(&subject, dct::IDENTIFIER, term::string(dataset_id))?,
            self.language_statement(&subject)?,
        ];
        statements.extend(fields::apply(&subject, record, &self.config.language)?);

        self.write(&subject, statements)?;
        self.mark_filled(dataset_id, RecordKind::Dataset);
        Ok(())
    }

    /// Register a distribution of `dataset_id`, link it from the dataset
    /// partition, and write its own partition. The dataset must already be
    /// filled.
    pub fn fill_distribution(
        &mut self,
        dataset_id: &str,
        record: &MetadataRecord<'_>,
    ) -> BuildResult<()> {
        self.require_declared(dataset_id, RecordKind::Dataset)?;
        self.require_filled(dataset_id, RecordKind::Dataset)?;
        let distribution_id = record.require_str("distribution_id")?;

        let subject = self.address_for(RecordKind::Distribution, distribution_id);
        let mut statements = vec![link(&subject, rdf::TYPE, dcat::DISTRIBUTION_CLASS)?];
        statements.extend(fields::apply(&subject, record, &self.config.language)?);

        self.claim(RecordKind::Distribution, &[distribution_id.to_string()])?;

        let dataset = self.address_for(RecordKind::Dataset, dataset_id);
        self.write(
            &dataset,
            vec![link(&dataset, dcat::DISTRIBUTION, &subject)?],
        )?;
        self.write(&subject, statements)?;
        self.mark_filled(distribution_id, RecordKind::Distribution);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------

    /// Serialize the partition at `address` using a format token such as
    /// `text/turtle` or `jsonld`. `Ok(None)` when the partition is empty.
    pub fn serialize(&self, address: &str, token: &str) -> BuildResult<Option<Vec<u8>>> {
        serialize_partition_as(&self.store, address, token)
    }

    pub fn serialize_as(&self, address: &str, format: Format) -> BuildResult<Option<Vec<u8>>> {
        serialize_partition(&self.store, address, format)
    }

    /// Serialize in the configured default format.
    pub fn serialize_default(&self, address: &str) -> BuildResult<Option<Vec<u8>>> {
        self.serialize_as(address, self.config.default_format)
    }

    /// Statements of the partition at `address`, ordered by their
    /// N-Triples form.
    pub fn statements(&self, address: &str) -> BuildResult<Vec<Statement>> {
        Ok(self
            .store
            .partition(address)?
            .map(|p| p.sorted().into_iter().cloned().collect())
            .unwrap_or_default())
    }

    pub fn partition(&self, address: &str) -> BuildResult<Option<Partition>> {
        Ok(self.store.partition(address)?)
    }

    /// Every partition address, sorted.
    pub fn addresses(&self) -> BuildResult<Vec<String>> {
        Ok(self.store.addresses()?)
    }

    // -----------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------

    fn language_statement(&self, subject: &str) -> BuildResult<Statement> {
        link(subject, dct::LANGUAGE, &vocab::language_iri(&self.config.language))
    }

    fn require_declared(&self, id: &str, kind: RecordKind) -> BuildResult<()> {
        if self.registry.kind_of(id)? == Some(kind) {
            return Ok(());
        }
        warn!(id, kind = %kind, "identifier was not declared");
        Err(BuildError::UnknownIdentifier {
            id: id.to_string(),
            kind,
        })
    }

    fn require_filled(&self, id: &str, kind: RecordKind) -> BuildResult<()> {
        if self.filled.contains(&(kind, id.to_string())) {
            return Ok(());
        }
        warn!(id, kind = %kind, "parent record was not built");
        Err(BuildError::NotBuilt {
            id: id.to_string(),
            kind,
        })
    }

    fn ensure_unfilled(&self, id: &str, kind: RecordKind) -> BuildResult<()> {
        if self.filled.contains(&(kind, id.to_string())) {
            return Err(BuildError::AlreadyBuilt {
                id: id.to_string(),
                kind,
            });
        }
        Ok(())
    }

    fn mark_filled(&mut self, id: &str, kind: RecordKind) {
        debug!(id, kind = %kind, "filled record");
        self.filled.insert((kind, id.to_string()));
    }

    fn write(&self, address: &str, statements: Vec<Statement>) -> BuildResult<()> {
        self.store.context(address)?;
        self.store.add_statements(address, statements)?;
        Ok(())
    }

    /// Run one build call. With `atomic_batches`, a failed call restores
    /// the registry, the store, and the filled set to their prior state.
    fn transaction<T>(
        &mut self,
        call: &'static str,
        f: impl FnOnce(&mut Self) -> BuildResult<T>,
    ) -> BuildResult<T> {
        if !self.config.atomic_batches {
            return f(self).inspect_err(|e| warn!(call, error = %e, "build call failed"));
        }

        let registry = self.registry.snapshot()?;
        let store = self.store.snapshot()?;
        let filled = self.filled.clone();

        f(self).inspect_err(|e| {
            warn!(call, error = %e, "build call failed, rolling back");
            self.registry = registry;
            self.store = store;
            self.filled = filled;
        })
    }
}

/// `subject predicate <target>`.
fn link(subject: &str, predicate: &str, target: &str) -> BuildResult<Statement> {
    Ok(Statement::about(subject, predicate, term::iri(target)?)?)
}

impl std::fmt::Debug for FairGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FairGraph")
            .field("base", &self.uris.base_address())
            .field("store", &self.store)
            .field("filled", &self.filled.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdp_graph::Term;
    use serde_json::json;

    const BASE: &str = "http://example.org";

    fn fdp_record() -> Value {
        json!({
            "fdp_id": "fdp1",
            "catalog_ids": ["cat1"],
            "title": "Example FDP",
            "des": "A FAIR Data Point",
        })
    }

    fn catalogs_record() -> Value {
        json!({
            "catalogs": [{
                "catalog_id": "cat1",
                "dataset_ids": ["ds1"],
                "title": "Catalog one",
                "publisher": "http://example.org/agents/lab",
                "issued": "2016-10-27",
                "modified": "2017-01-05",
                "theme_taxonomy": "dbp:Biology",
            }]
        })
    }

    fn datasets_record() -> Value {
        json!({
            "datasets": [{
                "dataset_id": "ds1",
                "title": "Dataset one",
                "keywords": ["genes", "proteins"],
                "theme": "DBPEDIA.Biology",
                "distributions": [{
                    "distribution_id": "dist1",
                    "title": "SPARQL endpoint",
                    "access_url": "http://example.org/sparql",
                    "media_types": ["application/sparql-results+json"],
                }]
            }]
        })
    }

    fn built() -> FairGraph {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph.build_catalogs(&catalogs_record()).unwrap();
        graph.build_datasets_and_distributions(&datasets_record()).unwrap();
        graph
    }

    fn iri(value: &str) -> Term {
        term::iri(value).unwrap().into()
    }

    fn about(subject: &str, predicate: &str, object: impl Into<Term>) -> Statement {
        Statement::about(subject, predicate, object).unwrap()
    }

    fn count(graph: &FairGraph, address: &str, predicate: &str) -> usize {
        graph
            .partition(address)
            .unwrap()
            .map_or(0, |p| p.count(predicate))
    }

    // -----------------------------------------------------------------
    // End to end
    // -----------------------------------------------------------------

    #[test]
    fn full_hierarchy() {
        let graph = built();
        let fdp = graph.uris().publishing_point_address();
        let cat = graph.address_for(RecordKind::Catalog, "cat1");
        let ds = graph.address_for(RecordKind::Dataset, "ds1");
        let dist = graph.address_for(RecordKind::Distribution, "dist1");

        // seeAlso: the document plus one per catalog
        assert_eq!(count(&graph, &fdp, rdfs::SEE_ALSO), 2);
        assert!(graph
            .partition(&fdp)
            .unwrap()
            .unwrap()
            .objects(rdfs::SEE_ALSO)
            .contains(&&iri(&cat)));
        assert_eq!(count(&graph, &cat, dcat::DATASET), 1);
        assert_eq!(count(&graph, &ds, dcat::DISTRIBUTION), 1);
        assert_eq!(count(&graph, &dist, dcat::ACCESS_URL), 1);

        for address in [&fdp, &cat, &ds, &dist] {
            let bytes = graph.serialize(address, "text/turtle").unwrap();
            assert!(bytes.is_some_and(|b| !b.is_empty()), "{address} is empty");
        }

        let dist2 = graph.address_for(RecordKind::Distribution, "dist2");
        assert!(graph.serialize(&dist2, "text/turtle").unwrap().is_none());
    }

    #[test]
    fn publishing_point_statements() {
        let graph = built();
        let fdp = graph.uris().publishing_point_address();
        let statements = graph.statements(&fdp).unwrap();

        assert!(statements.contains(&about(&fdp, rdf::TYPE, iri(dct::AGENT))));
        assert!(statements.contains(&about(
            &fdp,
            rdfs::SEE_ALSO,
            iri("http://example.org/doc")
        )));
        assert!(statements.contains(&about(
            &fdp,
            dct::LANGUAGE,
            iri("http://id.loc.gov/vocabulary/iso639-1/en")
        )));
        assert!(statements.contains(&about(
            &fdp,
            dct::TITLE,
            term::lang_string("Example FDP", "en").unwrap()
        )));
        assert!(statements.contains(&about(
            &fdp,
            dct::DESCRIPTION,
            term::string("A FAIR Data Point")
        )));
    }

    #[test]
    fn catalog_and_dataset_fields() {
        let graph = built();
        let cat = graph.address_for(RecordKind::Catalog, "cat1");
        let ds = graph.address_for(RecordKind::Dataset, "ds1");
        let biology = iri("http://dbpedia.org/resource/Biology");

        let catalog = graph.partition(&cat).unwrap().unwrap();
        assert_eq!(catalog.objects(dct::ISSUED), vec![&Term::from(term::date("2016-10-27"))]);
        assert_eq!(catalog.objects(dcat::THEME_TAXONOMY), vec![&biology]);

        let dataset = graph.partition(&ds).unwrap().unwrap();
        assert_eq!(dataset.objects(dcat::THEME), vec![&biology]);
        assert_eq!(dataset.count(dcat::KEYWORD), 2);
        assert_eq!(
            dataset.objects(rdf::TYPE),
            vec![&iri(dcat::DATASET_CLASS)]
        );
    }

    #[test]
    fn registry_holds_every_kind() {
        let graph = built();
        let registry = graph.registry();
        assert_eq!(registry.len().unwrap(), 4);
        assert_eq!(
            registry.kind_of("fdp1").unwrap(),
            Some(RecordKind::PublishingPoint)
        );
        assert_eq!(registry.kind_of("cat1").unwrap(), Some(RecordKind::Catalog));
        assert_eq!(registry.kind_of("ds1").unwrap(), Some(RecordKind::Dataset));
        assert_eq!(
            registry.kind_of("dist1").unwrap(),
            Some(RecordKind::Distribution)
        );
    }

    #[test]
    fn addresses_list_every_partition() {
        let graph = built();
        assert_eq!(
            graph.addresses().unwrap(),
            vec![
                "http://example.org/catalog/cat1",
                "http://example.org/dataset/ds1",
                "http://example.org/distribution/dist1",
                "http://example.org/fdp",
            ]
        );
    }

    #[test]
    fn jsonld_output() {
        let graph = built();
        let dist = graph.address_for(RecordKind::Distribution, "dist1");
        let bytes = graph.serialize(&dist, "application/ld+json").unwrap().unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["@graph"][0]["@id"], dist.as_str());
        assert_eq!(doc["@graph"][0]["@type"], "dcat:Distribution");
    }

    // -----------------------------------------------------------------
    // Contract violations
    // -----------------------------------------------------------------

    #[test]
    fn missing_catalog_ids() {
        let mut graph = FairGraph::new(BASE).unwrap();
        let err = graph
            .build_publishing_point(&json!({ "fdp_id": "fdp1" }))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingField {
                field: "catalog_ids".into(),
                kind: RecordKind::PublishingPoint,
            }
        );
    }

    #[test]
    fn missing_catalogs_and_datasets_lists() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();

        assert_eq!(
            graph.build_catalogs(&json!({})).unwrap_err(),
            BuildError::MissingField {
                field: "catalogs".into(),
                kind: RecordKind::Catalog,
            }
        );
        assert_eq!(
            graph.build_datasets_and_distributions(&json!({})).unwrap_err(),
            BuildError::MissingField {
                field: "datasets".into(),
                kind: RecordKind::Dataset,
            }
        );
    }

    #[test]
    fn catalogs_must_be_a_list() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        let err = graph
            .build_catalogs(&json!({ "catalogs": { "catalog_id": "cat1" } }))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidInput {
                kind: RecordKind::Catalog,
                ..
            }
        ));
    }

    #[test]
    fn missing_distribution_id() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph.build_catalogs(&catalogs_record()).unwrap();
        let err = graph
            .build_datasets_and_distributions(&json!({
                "datasets": [{
                    "dataset_id": "ds1",
                    "distributions": [{ "title": "no id" }]
                }]
            }))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingField {
                field: "distribution_id".into(),
                kind: RecordKind::Distribution,
            }
        );
        let ds = graph.address_for(RecordKind::Dataset, "ds1");
        assert!(graph.partition(&ds).unwrap().is_none());
    }

    #[test]
    fn malformed_iri_field_is_invalid_input() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        let err = graph
            .build_catalogs(&json!({
                "catalogs": [{
                    "catalog_id": "cat1",
                    "dataset_ids": [],
                    "publisher": "http://example.org/a>\"evil\"<b",
                }]
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidInput {
                kind: RecordKind::Catalog,
                ..
            }
        ));
    }

    #[test]
    fn non_map_record_is_invalid_input() {
        let mut graph = FairGraph::new(BASE).unwrap();
        let err = graph.build_publishing_point(&json!("fdp1")).unwrap_err();
        assert!(matches!(err, BuildError::InvalidInput { .. }));
    }

    #[test]
    fn catalog_id_equal_to_fdp_id() {
        let mut graph = FairGraph::new(BASE).unwrap();
        let err = graph
            .build_publishing_point(&json!({ "fdp_id": "x", "catalog_ids": ["x"] }))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateIdentifier {
                id: "x".into(),
                kind: RecordKind::Catalog,
                existing: RecordKind::PublishingPoint,
            }
        );
    }

    #[test]
    fn undeclared_catalog() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        let err = graph
            .build_catalogs(&json!({
                "catalogs": [{ "catalog_id": "cat9", "dataset_ids": [] }]
            }))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownIdentifier {
                id: "cat9".into(),
                kind: RecordKind::Catalog,
            }
        );
    }

    #[test]
    fn catalog_declared_under_another_kind() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        let err = graph
            .build_catalogs(&json!({
                "catalogs": [{ "catalog_id": "fdp1", "dataset_ids": [] }]
            }))
            .unwrap_err();
        assert!(matches!(err, BuildError::UnknownIdentifier { .. }));
    }

    #[test]
    fn dataset_declared_twice_across_calls() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph
            .build_publishing_point(&json!({ "fdp_id": "fdp1", "catalog_ids": ["c1", "c2"] }))
            .unwrap();
        graph
            .build_catalogs(&json!({
                "catalogs": [{ "catalog_id": "c1", "dataset_ids": ["ds1"] }]
            }))
            .unwrap();
        let err = graph
            .build_catalogs(&json!({
                "catalogs": [{ "catalog_id": "c2", "dataset_ids": ["ds1"] }]
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateIdentifier {
                kind: RecordKind::Dataset,
                existing: RecordKind::Dataset,
                ..
            }
        ));
    }

    #[test]
    fn undeclared_dataset() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph.build_catalogs(&catalogs_record()).unwrap();
        let err = graph
            .build_datasets_and_distributions(&json!({
                "datasets": [{ "dataset_id": "ds9", "distributions": [] }]
            }))
            .unwrap_err();
        assert!(matches!(err, BuildError::UnknownIdentifier { .. }));
    }

    #[test]
    fn distribution_must_be_a_map() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph.build_catalogs(&catalogs_record()).unwrap();
        let err = graph
            .build_datasets_and_distributions(&json!({
                "datasets": [{ "dataset_id": "ds1", "distributions": ["dist1"] }]
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::InvalidInput {
                kind: RecordKind::Distribution,
                ..
            }
        ));
    }

    #[test]
    fn distribution_id_collision() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph.build_catalogs(&catalogs_record()).unwrap();
        let err = graph
            .build_datasets_and_distributions(&json!({
                "datasets": [{
                    "dataset_id": "ds1",
                    "distributions": [{ "distribution_id": "cat1" }]
                }]
            }))
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateIdentifier {
                existing: RecordKind::Catalog,
                ..
            }
        ));
    }

    #[test]
    fn distribution_needs_a_built_dataset() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph.build_catalogs(&catalogs_record()).unwrap();

        let value = json!({ "distribution_id": "dist1" });
        let record = MetadataRecord::new(&value, RecordKind::Distribution).unwrap();
        assert_eq!(
            graph.fill_distribution("ds1", &record),
            Err(BuildError::NotBuilt {
                id: "ds1".into(),
                kind: RecordKind::Dataset,
            })
        );
        assert!(!graph.registry().is_registered("dist1").unwrap());
        let ds = graph.address_for(RecordKind::Dataset, "ds1");
        assert!(graph.partition(&ds).unwrap().is_none());

        let dataset = json!({ "dataset_id": "ds1" });
        let dataset = MetadataRecord::new(&dataset, RecordKind::Dataset).unwrap();
        graph.fill_dataset(&dataset).unwrap();
        graph.fill_distribution("ds1", &record).unwrap();
        assert_eq!(count(&graph, &ds, dcat::DISTRIBUTION), 1);
    }

    #[test]
    fn second_publishing_point_is_rejected() {
        let mut graph = built();
        let err = graph
            .build_publishing_point(&json!({ "fdp_id": "fdp2", "catalog_ids": [] }))
            .unwrap_err();
        assert!(matches!(err, BuildError::AlreadyBuilt { .. }));

        let err = graph.build_publishing_point(&fdp_record()).unwrap_err();
        assert!(matches!(err, BuildError::DuplicateIdentifier { .. }));
    }

    #[test]
    fn catalog_cannot_be_filled_twice() {
        let mut graph = built();
        let err = graph
            .build_catalogs(&json!({
                "catalogs": [{ "catalog_id": "cat1", "dataset_ids": ["ds7"] }]
            }))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::AlreadyBuilt {
                id: "cat1".into(),
                kind: RecordKind::Catalog,
            }
        );
        assert!(!graph.registry().is_registered("ds7").unwrap());
    }

    #[test]
    fn invalid_identifier_is_rejected() {
        let mut graph = FairGraph::new(BASE).unwrap();
        let err = graph
            .build_publishing_point(&json!({ "fdp_id": "a/b", "catalog_ids": [] }))
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidIdentifier { .. }));
    }

    // -----------------------------------------------------------------
    // Batch atomicity
    // -----------------------------------------------------------------

    fn two_catalogs_second_bad() -> Value {
        json!({
            "catalogs": [
                { "catalog_id": "c1", "dataset_ids": ["d1"] },
                { "catalog_id": "c2", "dataset_ids": ["d2"], "issued": "not a date" },
            ]
        })
    }

    #[test]
    fn failed_call_rolls_back() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph
            .build_publishing_point(&json!({ "fdp_id": "fdp1", "catalog_ids": ["c1", "c2"] }))
            .unwrap();
        let before = graph.addresses().unwrap();

        let err = graph.build_catalogs(&two_catalogs_second_bad()).unwrap_err();
        assert!(matches!(err, BuildError::InvalidInput { .. }));
        assert_eq!(graph.addresses().unwrap(), before);
        assert!(!graph.registry().is_registered("d1").unwrap());
        assert!(!graph.registry().is_registered("d2").unwrap());

        // A corrected batch goes through afterwards.
        graph
            .build_catalogs(&json!({
                "catalogs": [
                    { "catalog_id": "c1", "dataset_ids": ["d1"] },
                    { "catalog_id": "c2", "dataset_ids": ["d2"] },
                ]
            }))
            .unwrap();
        assert_eq!(graph.registry().len().unwrap(), 5);
    }

    #[test]
    fn best_effort_keeps_earlier_entries() {
        let config = BuilderConfig {
            atomic_batches: false,
            ..BuilderConfig::for_base(BASE)
        };
        let mut graph = FairGraph::with_config(config).unwrap();
        graph
            .build_publishing_point(&json!({ "fdp_id": "fdp1", "catalog_ids": ["c1", "c2"] }))
            .unwrap();

        graph.build_catalogs(&two_catalogs_second_bad()).unwrap_err();
        assert!(graph.registry().is_registered("d1").unwrap());
        assert_eq!(
            count(&graph, "http://example.org/catalog/c1", dcat::DATASET),
            1
        );
        assert!(graph
            .serialize("http://example.org/catalog/c2", "ttl")
            .unwrap()
            .is_none());
    }

    #[test]
    fn duplicate_distribution_rolls_back_whole_call() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();
        graph
            .build_catalogs(&json!({
                "catalogs": [{ "catalog_id": "cat1", "dataset_ids": ["ds1", "ds2"] }]
            }))
            .unwrap();
        let before = graph.addresses().unwrap();

        let err = graph
            .build_datasets_and_distributions(&json!({
                "datasets": [
                    { "dataset_id": "ds1", "distributions": [{ "distribution_id": "d1" }] },
                    { "dataset_id": "ds2", "distributions": [{ "distribution_id": "d1" }] },
                ]
            }))
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateIdentifier {
                id: "d1".into(),
                kind: RecordKind::Distribution,
                existing: RecordKind::Distribution,
            }
        );

        // no dataset partitions, no distribution links, no distribution ids
        assert_eq!(graph.addresses().unwrap(), before);
        let ds1 = graph.address_for(RecordKind::Dataset, "ds1");
        assert!(graph.partition(&ds1).unwrap().is_none());
        assert_eq!(count(&graph, &ds1, dcat::DISTRIBUTION), 0);
        assert!(!graph.registry().is_registered("d1").unwrap());

        graph
            .build_datasets_and_distributions(&json!({
                "datasets": [
                    { "dataset_id": "ds1", "distributions": [{ "distribution_id": "d1" }] },
                    { "dataset_id": "ds2", "distributions": [{ "distribution_id": "d2" }] },
                ]
            }))
            .unwrap();
        assert_eq!(graph.addresses().unwrap().len(), before.len() + 4);
    }

    // -----------------------------------------------------------------
    // Phases, configuration, reads
    // -----------------------------------------------------------------

    #[test]
    fn claim_and_fill_separately() {
        let mut graph = FairGraph::new(BASE).unwrap();
        graph.claim_publishing_point("fdp1").unwrap();
        graph.claim_catalogs(&["c1".to_string()]).unwrap();

        let value = json!({ "catalog_id": "c1", "dataset_ids": [] });
        let record = MetadataRecord::new(&value, RecordKind::Catalog).unwrap();
        graph.fill_catalog(&record).unwrap();

        let unclaimed = json!({ "catalog_id": "c2", "dataset_ids": [] });
        let record = MetadataRecord::new(&unclaimed, RecordKind::Catalog).unwrap();
        assert!(matches!(
            graph.fill_catalog(&record),
            Err(BuildError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn configured_language() {
        let config = BuilderConfig {
            language: "nl".into(),
            ..BuilderConfig::for_base(BASE)
        };
        let mut graph = FairGraph::with_config(config).unwrap();
        graph.build_publishing_point(&fdp_record()).unwrap();

        let fdp = graph.uris().publishing_point_address();
        let partition = graph.partition(&fdp).unwrap().unwrap();
        assert_eq!(
            partition.objects(dct::LANGUAGE),
            vec![&iri("http://id.loc.gov/vocabulary/iso639-1/nl")]
        );
        assert_eq!(
            partition.objects(dct::TITLE),
            vec![&Term::from(term::lang_string("Example FDP", "nl").unwrap())]
        );
    }

    #[test]
    fn default_format_and_bad_token() {
        let graph = built();
        let fdp = graph.uris().publishing_point_address();
        let text = String::from_utf8(graph.serialize_default(&fdp).unwrap().unwrap()).unwrap();
        assert!(text.starts_with("@prefix"));

        assert!(matches!(
            graph.serialize(&fdp, "image/png"),
            Err(BuildError::Format(_))
        ));
    }

    #[test]
    fn independent_instances_share_no_ids() {
        let mut a = FairGraph::new(BASE).unwrap();
        let mut b = FairGraph::new("http://other.org").unwrap();
        a.build_publishing_point(&fdp_record()).unwrap();
        b.build_publishing_point(&fdp_record()).unwrap();
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(matches!(FairGraph::new("not a uri"), Err(BuildError::Type(_))));
    }

    #[test]
    fn finished_graph_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FairGraph>();

        let graph = std::sync::Arc::new(built());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let graph = graph.clone();
                std::thread::spawn(move || {
                    let fdp = graph.uris().publishing_point_address();
                    graph.serialize(&fdp, "nt").unwrap().unwrap().len()
                })
            })
            .collect();
        let lengths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(lengths.windows(2).all(|w| w[0] == w[1]));
    }
}
