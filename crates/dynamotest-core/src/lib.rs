//! Ephemeral DynamoDB tables for integration tests.
//!
//! A test names tables by their *logical* name, the one used in migration and
//! fixture files. [`DynamoTester`] maps each logical name to a *physical* name
//! through a [`TableNameResolver`], creates the table from its migration,
//! wipes it, and writes the fixture items in one `BatchWriteItem` call. Tests
//! running in parallel against one account therefore never share a table.
//!
//! ```no_run
//! # async fn run(store: std::sync::Arc<dyn dynamotest_core::DynamoStore>) {
//! use dynamotest_core::{DynamoTestConfig, DynamoTester};
//!
//! let tester = DynamoTester::from_config(&DynamoTestConfig::from_env(), store);
//! tester.must_load_fixtures(&["users"]).await;
//! let table = tester.table_name_for("users");
//! # let _ = table;
//! # }
//! ```

pub mod cleaner;
pub mod clock;
pub mod config;
pub mod creator;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod migrator;
pub mod resolver;
pub mod store;
pub mod tester;

mod go_rand;

#[cfg(test)]
pub(crate) mod testing;

pub use cleaner::{TableCleaner, WholeTableCleaner};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{DynamoTestConfig, NamingStrategy};
pub use creator::{DefaultTableCreator, TableCreator};
pub use decoder::{
    FixturesDecoder, JsonFixturesDecoder, JsonMigrationDecoder, MigrationDecoder,
    TableWriteRequests,
};
pub use error::{DynamoTestError, DynamoTestResult, FixturePhase};
pub use loader::{DefinitionsLoader, FilesystemDirectoryLoader};
pub use migrator::Migrator;
pub use resolver::{
    IdentityTableNameResolver, MemoizedTableNameResolver, RandomTableNameResolver,
    TableNameResolver, TimestampTableNameResolver,
};
pub use store::DynamoStore;
pub use tester::{DynamoTester, DynamoTesterParts};
