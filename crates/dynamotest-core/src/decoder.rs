//! Parsing migration and fixture documents.
//!
//! A migration document is a `CreateTable` request in DynamoDB JSON:
//!
//! ```json
//! {
//!   "TableName": "users",
//!   "AttributeDefinitions": [{ "AttributeName": "ID", "AttributeType": "N" }],
//!   "KeySchema": [{ "AttributeName": "ID", "KeyType": "HASH" }],
//!   "BillingMode": "PAY_PER_REQUEST"
//! }
//! ```
//!
//! A fixture document names one logical table and lists plain JSON items:
//!
//! ```json
//! { "table": "users", "items": [{ "ID": 1, "Name": "Abc" }] }
//! ```

use std::fmt;

use dynamotest_model::AttributeValue;
use dynamotest_model::input::CreateTableInput;
use dynamotest_model::types::{Item, WriteRequest};
use serde::Deserialize;

use crate::error::{DynamoTestError, DynamoTestResult};

/// Parses one migration document.
pub trait MigrationDecoder: Send + Sync + fmt::Debug {
    /// Decode `raw` into a table definition.
    fn decode(&self, raw: &[u8]) -> DynamoTestResult<CreateTableInput>;
}

/// Parses a set of fixture documents.
pub trait FixturesDecoder: Send + Sync + fmt::Debug {
    /// Decode `docs` into write requests grouped by logical table name.
    fn decode(&self, docs: &[Vec<u8>]) -> DynamoTestResult<TableWriteRequests>;
}

/// Write requests grouped by table, in the order tables were first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableWriteRequests {
    tables: Vec<(String, Vec<WriteRequest>)>,
}

impl TableWriteRequests {
    /// Append `requests` to `table`, registering the table if it is new.
    pub fn extend(&mut self, table: &str, requests: impl IntoIterator<Item = WriteRequest>) {
        if let Some((_, existing)) = self.tables.iter_mut().find(|(t, _)| t == table) {
            existing.extend(requests);
        } else {
            self.tables
                .push((table.to_owned(), requests.into_iter().collect()));
        }
    }

    /// Requests queued for `table`.
    #[must_use]
    pub fn get(&self, table: &str) -> Option<&[WriteRequest]> {
        self.tables
            .iter()
            .find(|(t, _)| t == table)
            .map(|(_, r)| r.as_slice())
    }

    /// Table names in first-seen order.
    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(t, _)| t.as_str())
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Whether no table has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Total number of write requests.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.tables.iter().map(|(_, r)| r.len()).sum()
    }
}

impl IntoIterator for TableWriteRequests {
    type Item = (String, Vec<WriteRequest>);
    type IntoIter = std::vec::IntoIter<(String, Vec<WriteRequest>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.into_iter()
    }
}

/// Decodes migration documents written in DynamoDB JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonMigrationDecoder;

impl MigrationDecoder for JsonMigrationDecoder {
    fn decode(&self, raw: &[u8]) -> DynamoTestResult<CreateTableInput> {
        serde_json::from_slice(raw).map_err(DynamoTestError::DecodeMigration)
    }
}

#[derive(Debug, Deserialize)]
struct FixtureDocument {
    table: String,
    #[serde(default)]
    items: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Decodes fixture documents whose items are plain JSON objects.
///
/// Every item becomes a `PutRequest`; nested objects and arrays become `M`
/// and `L` attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFixturesDecoder;

impl FixturesDecoder for JsonFixturesDecoder {
    fn decode(&self, docs: &[Vec<u8>]) -> DynamoTestResult<TableWriteRequests> {
        let mut writes = TableWriteRequests::default();
        for raw in docs {
            let doc: FixtureDocument =
                serde_json::from_slice(raw).map_err(DynamoTestError::DecodeFixture)?;
            let puts = doc.items.into_iter().map(|fields| {
                let item: Item = fields
                    .into_iter()
                    .map(|(k, v)| (k, AttributeValue::from_json(v)))
                    .collect();
                WriteRequest::put(item)
            });
            writes.extend(&doc.table, puts);
        }
        Ok(writes)
    }
}
