//! DynamoDB request bodies.
//!
//! Optional fields are omitted when `None` and empty collections are skipped so
//! the JSON sent to the store stays minimal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    AttributeDefinition, BillingMode, BillingModeSummary, GlobalSecondaryIndex,
    GlobalSecondaryIndexDescription, KeySchemaElement, LocalSecondaryIndex,
    LocalSecondaryIndexDescription, ProvisionedThroughput, SSESpecification, StreamSpecification,
    TableDescription, TableStatus, Tag, WriteRequest,
};

// ---------------------------------------------------------------------------
// Table management
// ---------------------------------------------------------------------------

/// Input for the `CreateTable` operation.
///
/// This is also the on-disk format of a migration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    /// The name of the table to create.
    pub table_name: String,

    /// The key schema for the table (partition key and optional sort key).
    pub key_schema: Vec<KeySchemaElement>,

    /// The attribute definitions for the key schema and index key attributes.
    pub attribute_definitions: Vec<AttributeDefinition>,

    /// The billing mode for the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,

    /// The provisioned throughput settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,

    /// Global secondary indexes to create on the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndex>,

    /// Local secondary indexes to create on the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<LocalSecondaryIndex>,

    /// The stream specification for the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,

    /// The server-side encryption specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SSESpecification>,

    /// Tags to associate with the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateTableInput {
    /// Describe the freshly created, empty table this request defines.
    #[must_use]
    pub fn to_description(&self) -> TableDescription {
        TableDescription {
            table_name: Some(self.table_name.clone()),
            table_status: Some(TableStatus::Active),
            key_schema: self.key_schema.clone(),
            attribute_definitions: self.attribute_definitions.clone(),
            item_count: Some(0),
            billing_mode_summary: self.billing_mode.clone().map(|mode| BillingModeSummary {
                billing_mode: Some(mode),
            }),
            provisioned_throughput: self.provisioned_throughput.as_ref().map(Into::into),
            global_secondary_indexes: self
                .global_secondary_indexes
                .iter()
                .map(|gsi| GlobalSecondaryIndexDescription {
                    index_name: Some(gsi.index_name.clone()),
                    key_schema: gsi.key_schema.clone(),
                    projection: Some(gsi.projection.clone()),
                    provisioned_throughput: gsi.provisioned_throughput.as_ref().map(Into::into),
                    item_count: Some(0),
                })
                .collect(),
            local_secondary_indexes: self
                .local_secondary_indexes
                .iter()
                .map(|lsi| LocalSecondaryIndexDescription {
                    index_name: Some(lsi.index_name.clone()),
                    key_schema: lsi.key_schema.clone(),
                    projection: Some(lsi.projection.clone()),
                    item_count: Some(0),
                })
                .collect(),
            stream_specification: self.stream_specification.clone(),
            ..TableDescription::default()
        }
    }
}

/// Input for the `DeleteTable` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableInput {
    /// The name of the table to delete.
    pub table_name: String,
}

/// Input for the `DescribeTable` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableInput {
    /// The name of the table to describe.
    pub table_name: String,
}

// ---------------------------------------------------------------------------
// Batch writes
// ---------------------------------------------------------------------------

/// Input for the `BatchWriteItem` operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemInput {
    /// Table name to the put/delete requests for that table.
    pub request_items: HashMap<String, Vec<WriteRequest>>,
}

impl BatchWriteItemInput {
    /// Total number of write requests across all tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.request_items.values().map(Vec::len).sum()
    }

    /// Whether the batch carries no write requests at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
