//! Idempotent table creation.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dynamotest_model::DynamoDBError;
use dynamotest_model::input::CreateTableInput;
use tracing::debug;

use crate::store::DynamoStore;

/// Makes sure a table exists.
#[async_trait]
pub trait TableCreator: Send + Sync + fmt::Debug {
    /// Create the table described by `input`. A table that already exists
    /// counts as created.
    async fn create_table(&self, input: CreateTableInput) -> Result<(), DynamoDBError>;
}

/// Creates tables through a [`DynamoStore`].
#[derive(Debug, Clone)]
pub struct DefaultTableCreator {
    store: Arc<dyn DynamoStore>,
}

impl DefaultTableCreator {
    /// A creator backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn DynamoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TableCreator for DefaultTableCreator {
    async fn create_table(&self, input: CreateTableInput) -> Result<(), DynamoDBError> {
        let table = input.table_name.clone();
        match self.store.create_table(input).await {
            Ok(_) => {
                debug!(%table, "table created");
                Ok(())
            }
            Err(e) if e.is_resource_in_use() => {
                debug!(%table, "table already exists");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}
