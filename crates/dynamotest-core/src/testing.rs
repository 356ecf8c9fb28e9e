//! Hand-written fakes shared by the unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dynamotest_model::input::{BatchWriteItemInput, CreateTableInput, DeleteTableInput};
use dynamotest_model::output::{BatchWriteItemOutput, CreateTableOutput, DeleteTableOutput};
use dynamotest_model::types::{
    AttributeDefinition, GlobalSecondaryIndex, KeySchemaElement, KeyType, LocalSecondaryIndex,
    Projection, ProjectionType, ProvisionedThroughput, ScalarAttributeType, StreamSpecification,
    StreamViewType,
};
use dynamotest_model::{DynamoDBError, DynamoDBErrorCode};
use parking_lot::Mutex;

use crate::error::DynamoTestResult;
use crate::loader::DefinitionsLoader;
use crate::resolver::TableNameResolver;
use crate::store::DynamoStore;

/// Appends the call number, so every call yields a new name.
#[derive(Debug, Default)]
pub struct CountingResolver {
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TableNameResolver for CountingResolver {
    fn resolve(&self, logical: &str) -> String {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{logical}_{n}")
    }
}

/// Returns the same documents for every read and counts reads.
#[derive(Debug, Default)]
pub struct StaticLoader {
    docs: Vec<Vec<u8>>,
    reads: AtomicUsize,
    requested: Mutex<Vec<Vec<String>>>,
}

impl StaticLoader {
    pub fn new(docs: Vec<Vec<u8>>) -> Self {
        Self {
            docs,
            ..Self::default()
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<Vec<String>> {
        self.requested.lock().clone()
    }
}

impl DefinitionsLoader for StaticLoader {
    fn read_definitions(&self, names: &[&str]) -> DynamoTestResult<Vec<Vec<u8>>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .push(names.iter().map(|n| (*n).to_owned()).collect());
        Ok(self.docs.clone())
    }
}

#[derive(Debug, Default)]
struct FakeStoreState {
    tables: HashMap<String, CreateTableInput>,
    created: Vec<CreateTableInput>,
    deleted: Vec<String>,
    batches: Vec<BatchWriteItemInput>,
    fail_create: Option<DynamoDBErrorCode>,
    fail_delete: Option<DynamoDBErrorCode>,
    fail_batch: Option<DynamoDBErrorCode>,
    omit_delete_description: bool,
}

/// Records every call and keeps just enough table state to answer
/// `ResourceInUse` and `ResourceNotFound` like DynamoDB does.
#[derive(Debug, Default)]
pub struct FakeStore {
    state: Mutex<FakeStoreState>,
}

impl FakeStore {
    pub fn seed_table(&self, input: CreateTableInput) {
        self.state
            .lock()
            .tables
            .insert(input.table_name.clone(), input);
    }

    pub fn fail_create_with(&self, code: DynamoDBErrorCode) {
        self.state.lock().fail_create = Some(code);
    }

    pub fn fail_delete_with(&self, code: DynamoDBErrorCode) {
        self.state.lock().fail_delete = Some(code);
    }

    pub fn fail_batch_with(&self, code: DynamoDBErrorCode) {
        self.state.lock().fail_batch = Some(code);
    }

    /// Answer `DeleteTable` without a table description.
    pub fn omit_delete_description(&self) {
        self.state.lock().omit_delete_description = true;
    }

    pub fn created(&self) -> Vec<String> {
        self.state
            .lock()
            .created
            .iter()
            .map(|c| c.table_name.clone())
            .collect()
    }

    pub fn created_inputs(&self) -> Vec<CreateTableInput> {
        self.state.lock().created.clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().deleted.clone()
    }

    pub fn batches(&self) -> Vec<BatchWriteItemInput> {
        self.state.lock().batches.clone()
    }
}

#[async_trait]
impl DynamoStore for FakeStore {
    async fn create_table(
        &self,
        input: CreateTableInput,
    ) -> Result<CreateTableOutput, DynamoDBError> {
        let mut state = self.state.lock();
        state.created.push(input.clone());
        if let Some(code) = state.fail_create {
            return Err(DynamoDBError::new(code));
        }
        if state.tables.contains_key(&input.table_name) {
            return Err(DynamoDBError::resource_in_use("Table already exists"));
        }
        let description = input.to_description();
        state.tables.insert(input.table_name.clone(), input);
        Ok(CreateTableOutput {
            table_description: Some(description),
        })
    }

    async fn delete_table(
        &self,
        input: DeleteTableInput,
    ) -> Result<DeleteTableOutput, DynamoDBError> {
        let mut state = self.state.lock();
        state.deleted.push(input.table_name.clone());
        if let Some(code) = state.fail_delete {
            return Err(DynamoDBError::new(code));
        }
        let omit_description = state.omit_delete_description;
        match state.tables.remove(&input.table_name) {
            Some(table) => Ok(DeleteTableOutput {
                table_description: Some(table.to_description()).filter(|_| !omit_description),
            }),
            None => Err(DynamoDBError::resource_not_found("Requested resource not found")),
        }
    }

    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, DynamoDBError> {
        let mut state = self.state.lock();
        state.batches.push(input);
        if let Some(code) = state.fail_batch {
            return Err(DynamoDBError::new(code));
        }
        Ok(BatchWriteItemOutput::default())
    }
}

/// A minimal migration document keyed on a numeric `ID`.
pub fn migration_json(table: &str) -> Vec<u8> {
    format!(
        r#"{{
            "TableName": "{table}",
            "AttributeDefinitions": [{{"AttributeName": "ID", "AttributeType": "N"}}],
            "KeySchema": [{{"AttributeName": "ID", "KeyType": "HASH"}}],
            "ProvisionedThroughput": {{"ReadCapacityUnits": 1, "WriteCapacityUnits": 1}}
        }}"#
    )
    .into_bytes()
}

/// A fixture document for `table` with the given `(ID, Name)` items.
pub fn fixture_json(table: &str, items: &[(u32, &str)]) -> Vec<u8> {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|(id, name)| serde_json::json!({ "ID": id, "Name": name }))
        .collect();
    serde_json::json!({ "table": table, "items": items })
        .to_string()
        .into_bytes()
}

pub fn table_input(table: &str) -> CreateTableInput {
    CreateTableInput {
        table_name: table.to_owned(),
        key_schema: vec![key("ID", KeyType::Hash)],
        attribute_definitions: vec![attribute("ID", ScalarAttributeType::N)],
        provisioned_throughput: Some(throughput(1)),
        ..CreateTableInput::default()
    }
}

/// A provisioned table with one index of each kind and a stream.
pub fn indexed_table_input(table: &str) -> CreateTableInput {
    CreateTableInput {
        table_name: table.to_owned(),
        key_schema: vec![key("ID", KeyType::Hash), key("Created", KeyType::Range)],
        attribute_definitions: vec![
            attribute("ID", ScalarAttributeType::N),
            attribute("Created", ScalarAttributeType::N),
            attribute("Name", ScalarAttributeType::S),
        ],
        provisioned_throughput: Some(throughput(5)),
        global_secondary_indexes: vec![GlobalSecondaryIndex {
            index_name: "byName".to_owned(),
            key_schema: vec![key("Name", KeyType::Hash)],
            projection: Projection {
                projection_type: Some(ProjectionType::Include),
                non_key_attributes: vec!["Email".to_owned()],
            },
            provisioned_throughput: Some(throughput(2)),
        }],
        local_secondary_indexes: vec![LocalSecondaryIndex {
            index_name: "byIdAndName".to_owned(),
            key_schema: vec![key("ID", KeyType::Hash), key("Name", KeyType::Range)],
            projection: Projection {
                projection_type: Some(ProjectionType::KeysOnly),
                non_key_attributes: Vec::new(),
            },
        }],
        stream_specification: Some(StreamSpecification {
            stream_enabled: true,
            stream_view_type: Some(StreamViewType::NewImage),
        }),
        ..CreateTableInput::default()
    }
}

fn key(name: &str, key_type: KeyType) -> KeySchemaElement {
    KeySchemaElement {
        attribute_name: name.to_owned(),
        key_type,
    }
}

fn attribute(name: &str, attribute_type: ScalarAttributeType) -> AttributeDefinition {
    AttributeDefinition {
        attribute_name: name.to_owned(),
        attribute_type,
    }
}

fn throughput(units: i64) -> ProvisionedThroughput {
    ProvisionedThroughput {
        read_capacity_units: units,
        write_capacity_units: units,
    }
}
