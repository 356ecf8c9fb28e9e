//! Fixture loading: migrate, clean, write.

use std::collections::HashMap;
use std::sync::Arc;

use dynamotest_model::input::BatchWriteItemInput;
use dynamotest_model::types::WriteRequest;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::cleaner::{TableCleaner, WholeTableCleaner};
use crate::config::DynamoTestConfig;
use crate::creator::{DefaultTableCreator, TableCreator};
use crate::decoder::{FixturesDecoder, JsonFixturesDecoder, JsonMigrationDecoder, MigrationDecoder};
use crate::error::{DynamoTestError, DynamoTestResult, FixturePhase};
use crate::loader::{DefinitionsLoader, FilesystemDirectoryLoader};
use crate::migrator::Migrator;
use crate::resolver::{MemoizedTableNameResolver, TableNameResolver};
use crate::store::DynamoStore;

/// Collaborators of a [`DynamoTester`].
///
/// Only the resolver, the two loaders and the store are required; decoders,
/// creator and cleaner default to the JSON and store-backed implementations.
///
/// ```no_run
/// # fn build(store: std::sync::Arc<dyn dynamotest_core::DynamoStore>) {
/// use std::sync::Arc;
///
/// use dynamotest_core::tester::DynamoTesterParts;
/// use dynamotest_core::{DynamoTester, FilesystemDirectoryLoader, IdentityTableNameResolver};
///
/// let tester: DynamoTester = DynamoTesterParts::builder()
///     .resolver(Arc::new(IdentityTableNameResolver))
///     .migrations_loader(Arc::new(FilesystemDirectoryLoader::json("testdata/migrations")))
///     .fixtures_loader(Arc::new(FilesystemDirectoryLoader::json("testdata/fixtures")))
///     .store(store)
///     .build();
/// # }
/// ```
#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = DynamoTester))]
pub struct DynamoTesterParts {
    /// Resolver for physical table names. It is memoized before the migrator
    /// and the fixture loader share it.
    resolver: Arc<dyn TableNameResolver>,
    /// Source of migration documents.
    migrations_loader: Arc<dyn DefinitionsLoader>,
    /// Source of fixture documents.
    fixtures_loader: Arc<dyn DefinitionsLoader>,
    /// Store fixtures are written to.
    store: Arc<dyn DynamoStore>,
    /// Migration document parser.
    #[builder(default = Arc::new(JsonMigrationDecoder))]
    migration_decoder: Arc<dyn MigrationDecoder>,
    /// Fixture document parser.
    #[builder(default = Arc::new(JsonFixturesDecoder))]
    fixtures_decoder: Arc<dyn FixturesDecoder>,
    /// Table creator; defaults to one backed by `store`.
    #[builder(default, setter(strip_option))]
    creator: Option<Arc<dyn TableCreator>>,
    /// Table cleaner; defaults to one backed by `store`.
    #[builder(default, setter(strip_option))]
    cleaner: Option<Arc<dyn TableCleaner>>,
}

impl From<DynamoTesterParts> for DynamoTester {
    fn from(parts: DynamoTesterParts) -> Self {
        let resolver: Arc<dyn TableNameResolver> =
            Arc::new(MemoizedTableNameResolver::new(parts.resolver));
        let store = parts.store;
        let creator = parts
            .creator
            .unwrap_or_else(|| Arc::new(DefaultTableCreator::new(Arc::clone(&store))));
        let cleaner = parts
            .cleaner
            .unwrap_or_else(|| Arc::new(WholeTableCleaner::new(Arc::clone(&store))));
        let migrator = Migrator::new(
            Arc::clone(&resolver),
            parts.migrations_loader,
            parts.migration_decoder,
            creator,
        );
        Self {
            resolver,
            migrator,
            fixtures_loader: parts.fixtures_loader,
            fixtures_decoder: parts.fixtures_decoder,
            cleaner,
            store,
        }
    }
}

/// Provisions tables and loads fixtures for a test.
///
/// The tester and its migrator hold one memoized resolver, so the name a table
/// is created under is the name fixtures are written to and the name
/// [`table_name_for`](Self::table_name_for) hands to the test.
#[derive(Debug)]
pub struct DynamoTester {
    resolver: Arc<dyn TableNameResolver>,
    migrator: Migrator,
    fixtures_loader: Arc<dyn DefinitionsLoader>,
    fixtures_decoder: Arc<dyn FixturesDecoder>,
    cleaner: Arc<dyn TableCleaner>,
    store: Arc<dyn DynamoStore>,
}

impl DynamoTester {
    /// A tester reading JSON documents from the configured directories and
    /// naming tables with the configured strategy.
    pub fn from_config(config: &DynamoTestConfig, store: Arc<dyn DynamoStore>) -> Self {
        DynamoTesterParts::builder()
            .resolver(config.table_name_resolver())
            .migrations_loader(Arc::new(FilesystemDirectoryLoader::json(
                &config.migrations_path,
            )))
            .fixtures_loader(Arc::new(FilesystemDirectoryLoader::json(
                &config.fixtures_path,
            )))
            .store(store)
            .build()
    }

    /// The physical name of the logical table `logical`.
    pub fn table_name_for(&self, logical: &str) -> String {
        self.resolver.resolve(logical)
    }

    /// Create the tables for `logical_names` without loading any fixtures.
    pub async fn migrate_tables(&self, logical_names: &[&str]) -> DynamoTestResult<()> {
        self.migrator.migrate_tables(logical_names).await
    }

    /// Load the named fixture documents, or all of them when `names` is
    /// empty.
    ///
    /// For each table the fixtures mention, in the order first mentioned, the
    /// table is migrated, resolved and cleaned. All items are then written in
    /// a single `BatchWriteItem` call. Nothing is written if any table fails
    /// to set up.
    pub async fn load_fixtures(&self, names: &[&str]) -> DynamoTestResult<()> {
        let docs = self
            .fixtures_loader
            .read_definitions(names)
            .map_err(DynamoTestError::in_phase(FixturePhase::Load))?;
        let writes = self
            .fixtures_decoder
            .decode(&docs)
            .map_err(DynamoTestError::in_phase(FixturePhase::Decode))?;

        let tables = writes.len();
        let mut request_items: HashMap<String, Vec<WriteRequest>> =
            HashMap::with_capacity(tables);
        for (logical, requests) in writes {
            self.migrator
                .migrate_tables(&[logical.as_str()])
                .await
                .map_err(DynamoTestError::in_phase(FixturePhase::Migrate))?;
            let physical = self.resolver.resolve(&logical);
            self.cleaner
                .clean_table(&physical)
                .await
                .map_err(DynamoTestError::in_phase(FixturePhase::Clean))?;
            debug!(
                table = %logical,
                %physical,
                items = requests.len(),
                "table ready for fixtures"
            );
            if !requests.is_empty() {
                request_items.entry(physical).or_default().extend(requests);
            }
        }

        let batch = BatchWriteItemInput { request_items };
        let items = batch.len();
        if batch.is_empty() {
            debug!(tables, "no fixture items to write");
        } else {
            self.store
                .batch_write_item(batch)
                .await
                .map_err(|e| DynamoTestError::in_phase(FixturePhase::Write)(e.into()))?;
        }
        info!(tables, items, "fixtures loaded");
        Ok(())
    }

    /// Like [`load_fixtures`](Self::load_fixtures), but panics on failure.
    ///
    /// Meant for test setup, where a half-provisioned store makes the rest of
    /// the test meaningless.
    pub async fn must_load_fixtures(&self, names: &[&str]) {
        if let Err(e) = self.load_fixtures(names).await {
            panic!("Cannot load fixtures: {:#}", anyhow::Error::from(e));
        }
    }
}
