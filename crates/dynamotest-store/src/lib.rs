//! Stores that [`dynamotest_core::DynamoTester`] can provision tables in.
//!
//! * [`HttpDynamoStore`] speaks the DynamoDB JSON protocol to any compatible
//!   endpoint (DynamoDB Local, LocalStack).
//! * [`InMemoryDynamoStore`] keeps tables in process, for tests that should
//!   not need a server at all.

pub mod memory;
pub mod remote;

pub use memory::InMemoryDynamoStore;
pub use remote::HttpDynamoStore;
