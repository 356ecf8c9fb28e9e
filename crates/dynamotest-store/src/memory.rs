//! Process-local DynamoDB store.
//!
//! Tables live in a [`DashMap`] keyed by table name. Each table keeps the
//! `CreateTable` request it was created from, so deleting it can hand back a
//! description complete enough to create it again, and its items in write
//! order.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dynamotest_core::DynamoStore;
use dynamotest_model::DynamoDBError;
use dynamotest_model::input::{BatchWriteItemInput, CreateTableInput, DeleteTableInput};
use dynamotest_model::output::{BatchWriteItemOutput, CreateTableOutput, DeleteTableOutput};
use dynamotest_model::types::{Item, TableDescription, TableStatus, WriteRequest};
use tracing::debug;

/// A [`DynamoStore`] that never leaves the process.
#[derive(Debug, Default)]
pub struct InMemoryDynamoStore {
    tables: DashMap<String, MemoryTable>,
}

#[derive(Debug)]
struct MemoryTable {
    definition: CreateTableInput,
    items: Vec<Item>,
}

impl MemoryTable {
    fn key_attributes(&self) -> impl Iterator<Item = &str> {
        self.definition
            .key_schema
            .iter()
            .map(|k| k.attribute_name.as_str())
    }

    fn same_key(&self, a: &Item, b: &Item) -> bool {
        self.key_attributes().all(|name| a.get(name) == b.get(name))
    }

    /// Check that `item` carries every key attribute.
    fn require_key(&self, item: &Item) -> Result<(), DynamoDBError> {
        match self.key_attributes().find(|name| !item.contains_key(*name)) {
            Some(missing) => Err(DynamoDBError::validation(format!(
                "One of the required keys was not given a value: {missing} on table {}",
                self.definition.table_name
            ))),
            None => Ok(()),
        }
    }

    fn put(&mut self, item: Item) {
        match self.items.iter().position(|existing| self.same_key(existing, &item)) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    fn delete(&mut self, key: &Item) {
        let kept: Vec<Item> = std::mem::take(&mut self.items)
            .into_iter()
            .filter(|existing| !self.same_key(existing, key))
            .collect();
        self.items = kept;
    }

    fn describe(&self) -> TableDescription {
        TableDescription {
            item_count: i64::try_from(self.items.len()).ok(),
            ..self.definition.to_description()
        }
    }
}

impl InMemoryDynamoStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of all tables, sorted.
    #[must_use]
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tables.iter().map(|r| r.key().clone()).collect();
        names.sort();
        names
    }

    /// The items of `table` in write order, or `None` if it does not exist.
    #[must_use]
    pub fn items(&self, table: &str) -> Option<Vec<Item>> {
        self.tables.get(table).map(|t| t.items.clone())
    }

    /// Describe `table`, or `None` if it does not exist.
    #[must_use]
    pub fn describe(&self, table: &str) -> Option<TableDescription> {
        self.tables.get(table).map(|t| t.describe())
    }

    fn not_found(table: &str) -> DynamoDBError {
        DynamoDBError::resource_not_found(format!(
            "Requested resource not found: Table: {table} not found"
        ))
    }
}

#[async_trait]
impl DynamoStore for InMemoryDynamoStore {
    async fn create_table(
        &self,
        input: CreateTableInput,
    ) -> Result<CreateTableOutput, DynamoDBError> {
        if input.table_name.is_empty() {
            return Err(DynamoDBError::validation("TableName must not be empty"));
        }
        if input.key_schema.is_empty() {
            return Err(DynamoDBError::validation(format!(
                "KeySchema of table {} must not be empty",
                input.table_name
            )));
        }

        match self.tables.entry(input.table_name.clone()) {
            Entry::Occupied(e) => Err(DynamoDBError::resource_in_use(format!(
                "Table already exists: {}",
                e.key()
            ))),
            Entry::Vacant(e) => {
                let description = input.to_description();
                debug!(table = %input.table_name, "table created");
                e.insert(MemoryTable {
                    definition: input,
                    items: Vec::new(),
                });
                Ok(CreateTableOutput {
                    table_description: Some(description),
                })
            }
        }
    }

    async fn delete_table(
        &self,
        input: DeleteTableInput,
    ) -> Result<DeleteTableOutput, DynamoDBError> {
        let (_, table) = self
            .tables
            .remove(&input.table_name)
            .ok_or_else(|| Self::not_found(&input.table_name))?;
        debug!(table = %input.table_name, items = table.items.len(), "table deleted");
        Ok(DeleteTableOutput {
            table_description: Some(TableDescription {
                table_status: Some(TableStatus::Deleting),
                ..table.describe()
            }),
        })
    }

    /// Every target table and every key is checked before anything is
    /// written, so a request that fails validation leaves all tables as they
    /// were.
    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, DynamoDBError> {
        for (table_name, requests) in &input.request_items {
            let table = self
                .tables
                .get(table_name)
                .ok_or_else(|| Self::not_found(table_name))?;
            for request in requests {
                match request {
                    WriteRequest {
                        put_request: Some(put),
                        delete_request: None,
                    } => table.require_key(&put.item)?,
                    WriteRequest {
                        put_request: None,
                        delete_request: Some(delete),
                    } => table.require_key(&delete.key)?,
                    _ => {
                        return Err(DynamoDBError::validation(
                            "Exactly one of PutRequest or DeleteRequest must be set",
                        ));
                    }
                }
            }
        }

        for (table_name, requests) in input.request_items {
            let mut table = self
                .tables
                .get_mut(&table_name)
                .ok_or_else(|| Self::not_found(&table_name))?;
            let count = requests.len();
            for request in requests {
                if let Some(put) = request.put_request {
                    table.put(put.item);
                } else if let Some(delete) = request.delete_request {
                    table.delete(&delete.key);
                }
            }
            debug!(table = %table_name, requests = count, "batch applied");
        }

        Ok(BatchWriteItemOutput::default())
    }
}
