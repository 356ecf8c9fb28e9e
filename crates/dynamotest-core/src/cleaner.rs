//! Resetting a table to an empty state.
//!
//! DynamoDB has no truncate. [`WholeTableCleaner`] drops the table and creates
//! it again from the description the delete returned. Between those two calls
//! the table does not exist; anything reading it concurrently sees
//! `ResourceNotFoundException`.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use dynamotest_model::DynamoDBError;
use dynamotest_model::input::{CreateTableInput, DeleteTableInput};
use dynamotest_model::types::{
    BillingMode, GlobalSecondaryIndex, GlobalSecondaryIndexDescription, LocalSecondaryIndex,
    LocalSecondaryIndexDescription, ProvisionedThroughput, ProvisionedThroughputDescription,
    TableDescription,
};
use tracing::debug;

use crate::error::{DynamoTestError, DynamoTestResult};
use crate::store::DynamoStore;

/// Leaves a table existing and empty.
#[async_trait]
pub trait TableCleaner: Send + Sync + fmt::Debug {
    /// Clean the physical table `table`. A table that does not exist is left
    /// alone.
    async fn clean_table(&self, table: &str) -> DynamoTestResult<()>;
}

/// Drops and recreates tables through a [`DynamoStore`].
#[derive(Debug, Clone)]
pub struct WholeTableCleaner {
    store: Arc<dyn DynamoStore>,
}

impl WholeTableCleaner {
    /// A cleaner backed by `store`.
    #[must_use]
    pub fn new(store: Arc<dyn DynamoStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TableCleaner for WholeTableCleaner {
    async fn clean_table(&self, table: &str) -> DynamoTestResult<()> {
        let input = DeleteTableInput {
            table_name: table.to_owned(),
        };
        let deleted = match self.store.delete_table(input).await {
            Ok(output) => output.table_description.ok_or_else(|| {
                DynamoTestError::DeleteTable {
                    table: table.to_owned(),
                    source: DynamoDBError::internal_error(format!(
                        "DeleteTable response for {table} carries no table description"
                    )),
                }
            })?,
            Err(e) if e.is_not_found() => {
                debug!(%table, "table does not exist, nothing to clean");
                return Ok(());
            }
            Err(source) => {
                return Err(DynamoTestError::DeleteTable {
                    table: table.to_owned(),
                    source,
                });
            }
        };

        self.store
            .create_table(recreate_input(table, deleted))
            .await
            .map_err(|source| DynamoTestError::RecreateTable {
                table: table.to_owned(),
                source,
            })?;
        debug!(%table, "table recreated empty");
        Ok(())
    }
}

/// Build the `CreateTable` request that brings back the table `desc` describes.
///
/// On-demand tables report zero throughput, which `CreateTable` rejects
/// alongside `PAY_PER_REQUEST`, so throughput is only carried over for
/// provisioned tables.
pub(crate) fn recreate_input(table: &str, desc: TableDescription) -> CreateTableInput {
    let billing_mode = desc.billing_mode_summary.and_then(|s| s.billing_mode);
    let provisioned = billing_mode != Some(BillingMode::PayPerRequest);
    let throughput = |d: Option<&ProvisionedThroughputDescription>| {
        d.filter(|_| provisioned).map(ProvisionedThroughput::from)
    };

    CreateTableInput {
        table_name: table.to_owned(),
        key_schema: desc.key_schema,
        attribute_definitions: desc.attribute_definitions,
        provisioned_throughput: throughput(desc.provisioned_throughput.as_ref()),
        global_secondary_indexes: desc
            .global_secondary_indexes
            .into_iter()
            .map(|gsi: GlobalSecondaryIndexDescription| GlobalSecondaryIndex {
                provisioned_throughput: throughput(gsi.provisioned_throughput.as_ref()),
                index_name: gsi.index_name.unwrap_or_default(),
                key_schema: gsi.key_schema,
                projection: gsi.projection.unwrap_or_default(),
            })
            .collect(),
        local_secondary_indexes: desc
            .local_secondary_indexes
            .into_iter()
            .map(|lsi: LocalSecondaryIndexDescription| LocalSecondaryIndex {
                index_name: lsi.index_name.unwrap_or_default(),
                key_schema: lsi.key_schema,
                projection: lsi.projection.unwrap_or_default(),
            })
            .collect(),
        stream_specification: desc.stream_specification.filter(|s| s.stream_enabled),
        billing_mode,
        ..CreateTableInput::default()
    }
}

#[cfg(test)]
mod tests {
    use dynamotest_model::DynamoDBErrorCode;
    use dynamotest_model::types::{
        BillingModeSummary, KeySchemaElement, KeyType, Projection, ProjectionType,
    };

    use super::*;
    use crate::testing::{FakeStore, indexed_table_input};

    #[tokio::test]
    async fn test_should_skip_recreate_for_missing_table() {
        let store = Arc::new(FakeStore::default());
        let cleaner = WholeTableCleaner::new(store.clone());

        cleaner.clean_table("missing").await.expect("clean missing");

        assert_eq!(store.deleted(), vec!["missing"]);
        assert!(store.created().is_empty());
    }

    #[tokio::test]
    async fn test_should_recreate_table_with_identical_schema() {
        let store = Arc::new(FakeStore::default());
        let original = indexed_table_input("tableName_1");
        store.seed_table(original.clone());
        let cleaner = WholeTableCleaner::new(store.clone());

        cleaner.clean_table("tableName_1").await.expect("clean");

        assert_eq!(store.deleted(), vec!["tableName_1"]);
        let recreated = store.created_inputs();
        assert_eq!(recreated.len(), 1);
        assert_eq!(recreated[0], original);
    }

    #[tokio::test]
    async fn test_should_wrap_delete_failure_with_table_name() {
        let store = Arc::new(FakeStore::default());
        store.fail_delete_with(DynamoDBErrorCode::LimitExceededException);
        let cleaner = WholeTableCleaner::new(store.clone());

        let err = cleaner
            .clean_table("tableName_1")
            .await
            .expect_err("delete should fail");

        assert!(matches!(
            err,
            DynamoTestError::DeleteTable { ref table, .. } if table == "tableName_1"
        ));
        assert!(store.created().is_empty());
    }

    #[tokio::test]
    async fn test_should_fail_when_delete_returns_no_description() {
        let store = Arc::new(FakeStore::default());
        store.seed_table(indexed_table_input("tableName_1"));
        store.omit_delete_description();
        let cleaner = WholeTableCleaner::new(store.clone());

        let err = cleaner
            .clean_table("tableName_1")
            .await
            .expect_err("recreate needs the schema");

        assert_eq!(err.to_string(), "cannot delete table tableName_1");
        assert!(
            err.store_error()
                .is_some_and(|e| e.message.contains("tableName_1"))
        );
        assert!(store.created().is_empty());
    }

    #[tokio::test]
    async fn test_should_wrap_recreate_failure_with_table_name() {
        let store = Arc::new(FakeStore::default());
        store.seed_table(indexed_table_input("tableName_1"));
        store.fail_create_with(DynamoDBErrorCode::LimitExceededException);
        let cleaner = WholeTableCleaner::new(store);

        let err = cleaner
            .clean_table("tableName_1")
            .await
            .expect_err("recreate should fail");

        assert!(matches!(
            err,
            DynamoTestError::RecreateTable { ref table, .. } if table == "tableName_1"
        ));
    }

    #[test]
    fn test_should_drop_throughput_for_on_demand_tables() {
        let desc = TableDescription {
            key_schema: vec![KeySchemaElement {
                attribute_name: "ID".to_owned(),
                key_type: KeyType::Hash,
            }],
            billing_mode_summary: Some(BillingModeSummary {
                billing_mode: Some(BillingMode::PayPerRequest),
            }),
            provisioned_throughput: Some(ProvisionedThroughputDescription::default()),
            global_secondary_indexes: vec![GlobalSecondaryIndexDescription {
                index_name: Some("byName".to_owned()),
                projection: Some(Projection {
                    projection_type: Some(ProjectionType::KeysOnly),
                    non_key_attributes: Vec::new(),
                }),
                provisioned_throughput: Some(ProvisionedThroughputDescription::default()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let input = recreate_input("t", desc);

        assert_eq!(input.billing_mode, Some(BillingMode::PayPerRequest));
        assert!(input.provisioned_throughput.is_none());
        assert!(input.global_secondary_indexes[0].provisioned_throughput.is_none());
        assert_eq!(
            input.global_secondary_indexes[0].projection.projection_type,
            Some(ProjectionType::KeysOnly)
        );
    }
}
