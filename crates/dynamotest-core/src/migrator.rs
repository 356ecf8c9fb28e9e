//! Table creation from migration documents.

use std::collections::HashMap;
use std::sync::Arc;

use dynamotest_model::input::CreateTableInput;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::creator::TableCreator;
use crate::decoder::MigrationDecoder;
use crate::error::{DynamoTestError, DynamoTestResult};
use crate::loader::DefinitionsLoader;
use crate::resolver::TableNameResolver;

type Definitions = HashMap<String, CreateTableInput>;

/// Creates tables from migration documents, under resolved names.
///
/// Every migration document is read and decoded on first use. Each
/// definition's `TableName` is rewritten through the resolver and the result
/// is cached under the original, logical name. The cache is filled at most
/// once; a failed load leaves it empty and the next call tries again.
#[derive(Debug)]
pub struct Migrator {
    resolver: Arc<dyn TableNameResolver>,
    loader: Arc<dyn DefinitionsLoader>,
    decoder: Arc<dyn MigrationDecoder>,
    creator: Arc<dyn TableCreator>,
    definitions: Mutex<Option<Arc<Definitions>>>,
}

impl Migrator {
    /// A migrator that reads definitions from `loader` and names tables with
    /// `resolver`.
    pub fn new(
        resolver: Arc<dyn TableNameResolver>,
        loader: Arc<dyn DefinitionsLoader>,
        decoder: Arc<dyn MigrationDecoder>,
        creator: Arc<dyn TableCreator>,
    ) -> Self {
        Self {
            resolver,
            loader,
            decoder,
            creator,
            definitions: Mutex::new(None),
        }
    }

    /// The resolver physical names come from.
    #[must_use]
    pub fn resolver(&self) -> &Arc<dyn TableNameResolver> {
        &self.resolver
    }

    /// Create the tables for `logical_names`.
    ///
    /// A table that already exists counts as created. Names without a
    /// migration document are skipped.
    pub async fn migrate_tables(&self, logical_names: &[&str]) -> DynamoTestResult<()> {
        let definitions = self.definitions()?;
        for &logical in logical_names {
            let Some(definition) = definitions.get(logical) else {
                debug!(table = logical, "no migration for table, skipping");
                continue;
            };
            self.create(logical, definition).await?;
        }
        Ok(())
    }

    /// Create a table for every migration document, in logical-name order.
    pub async fn migrate_all(&self) -> DynamoTestResult<()> {
        let definitions = self.definitions()?;
        let mut names: Vec<&String> = definitions.keys().collect();
        names.sort();
        for logical in names {
            self.create(logical, &definitions[logical]).await?;
        }
        info!(tables = definitions.len(), "all migrations applied");
        Ok(())
    }

    /// The cached definition for `logical`, with its resolved table name.
    pub fn definition(&self, logical: &str) -> DynamoTestResult<Option<CreateTableInput>> {
        Ok(self.definitions()?.get(logical).cloned())
    }

    async fn create(&self, logical: &str, definition: &CreateTableInput) -> DynamoTestResult<()> {
        let physical = definition.table_name.clone();
        self.creator
            .create_table(definition.clone())
            .await
            .map_err(|source| DynamoTestError::CreateTable {
                logical: logical.to_owned(),
                physical: physical.clone(),
                source,
            })?;
        debug!(table = logical, %physical, "table migrated");
        Ok(())
    }

    /// Return the cached definitions, loading them first if needed.
    ///
    /// Loading is synchronous and runs with the lock held, so concurrent
    /// first callers wait for one load instead of racing.
    fn definitions(&self) -> DynamoTestResult<Arc<Definitions>> {
        let mut cached = self.definitions.lock();
        if let Some(definitions) = cached.as_ref() {
            return Ok(Arc::clone(definitions));
        }
        let loaded = Arc::new(
            self.load()
                .map_err(|e| DynamoTestError::LoadDefinitions(Box::new(e)))?,
        );
        *cached = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    fn load(&self) -> DynamoTestResult<Definitions> {
        let mut definitions = Definitions::new();
        for raw in self.loader.read_definitions(&[])? {
            let mut definition = self.decoder.decode(&raw)?;
            let logical = std::mem::take(&mut definition.table_name);
            definition.table_name = self.resolver.resolve(&logical);
            if let Some(replaced) = definitions.insert(logical.clone(), definition) {
                warn!(
                    table = %logical,
                    replaced = %replaced.table_name,
                    "duplicate migration for table, keeping the later document"
                );
            }
        }
        info!(tables = definitions.len(), "migration definitions loaded");
        Ok(definitions)
    }
}
