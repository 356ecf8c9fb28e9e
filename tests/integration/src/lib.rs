//! Integration tests for dynamotest.
//!
//! Most tests provision tables in an [`InMemoryDynamoStore`] from the
//! documents under `testdata/`. The tests in `test_server` need a running
//! DynamoDB-compatible endpoint and are marked `#[ignore]`.
//!
//! Run them with:
//! ```text
//! DYNAMOTEST_ENDPOINT_URL=http://localhost:4566 \
//!     cargo test -p dynamotest-integration -- --ignored
//! ```

use std::path::PathBuf;
use std::sync::{Arc, Once};

use dynamotest_core::{
    DynamoTestConfig, DynamoTester, DynamoTesterParts, FilesystemDirectoryLoader,
    RandomTableNameResolver, TableNameResolver,
};
use dynamotest_store::{HttpDynamoStore, InMemoryDynamoStore};

static INIT: Once = Once::new();

/// Initialize tracing (once). `RUST_LOG` wins over `LOG_LEVEL`.
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(DynamoTestConfig::from_env().log_level)
                }),
            )
            .with_test_writer()
            .init();
    });
}

/// Directory holding the migration documents.
#[must_use]
pub fn migrations_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/migrations")
}

/// Directory holding the fixture documents.
#[must_use]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/fixtures")
}

/// A tester over `testdata/` and a fresh in-memory store.
#[must_use]
pub fn in_memory_tester(
    resolver: Arc<dyn TableNameResolver>,
) -> (Arc<InMemoryDynamoStore>, DynamoTester) {
    init_tracing();

    let store = Arc::new(InMemoryDynamoStore::new());
    let tester = tester_over(resolver, store.clone());
    (store, tester)
}

/// A tester over `testdata/` writing to `store`.
#[must_use]
pub fn tester_over(
    resolver: Arc<dyn TableNameResolver>,
    store: Arc<dyn dynamotest_core::DynamoStore>,
) -> DynamoTester {
    DynamoTesterParts::builder()
        .resolver(resolver)
        .migrations_loader(Arc::new(FilesystemDirectoryLoader::json(migrations_dir())))
        .fixtures_loader(Arc::new(FilesystemDirectoryLoader::json(fixtures_dir())))
        .store(store)
        .build()
}

/// A random resolver with a fixed seed, so physical names are predictable.
#[must_use]
pub fn seeded_resolver(seed: i64) -> Arc<dyn TableNameResolver> {
    Arc::new(RandomTableNameResolver::with_seed(seed))
}

/// A store at the endpoint named by the environment.
#[must_use]
pub fn http_store() -> Arc<HttpDynamoStore> {
    init_tracing();

    Arc::new(HttpDynamoStore::from_config(&DynamoTestConfig::from_env()))
}

/// Generate a unique logical table name for a server test.
#[must_use]
pub fn test_table_name(prefix: &str) -> String {
    let id = uuid::Uuid::new_v4().to_string()[..8].to_owned();
    format!("test-{prefix}-{id}")
}

mod test_fixtures;
mod test_loader;
mod test_naming;
mod test_server;
