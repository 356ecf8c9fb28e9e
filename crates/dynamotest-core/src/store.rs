//! The store operations table provisioning needs.

use std::fmt;

use async_trait::async_trait;
use dynamotest_model::DynamoDBError;
use dynamotest_model::input::{BatchWriteItemInput, CreateTableInput, DeleteTableInput};
use dynamotest_model::output::{BatchWriteItemOutput, CreateTableOutput, DeleteTableOutput};

/// A DynamoDB-compatible store.
///
/// Implementations report failures with a [`DynamoDBError`] whose code is
/// what callers branch on. In particular:
///
/// * `create_table` fails with `ResourceInUseException` when the table exists;
/// * `delete_table` fails with `ResourceNotFoundException` when it does not,
///   and on success describes the deleted table completely enough (attributes,
///   keys, throughput, indexes) to create it again.
#[async_trait]
pub trait DynamoStore: Send + Sync + fmt::Debug {
    /// Create a table.
    async fn create_table(
        &self,
        input: CreateTableInput,
    ) -> Result<CreateTableOutput, DynamoDBError>;

    /// Delete a table and describe what was deleted.
    async fn delete_table(
        &self,
        input: DeleteTableInput,
    ) -> Result<DeleteTableOutput, DynamoDBError>;

    /// Write items to one or more tables.
    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, DynamoDBError>;
}
