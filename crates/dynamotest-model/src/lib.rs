//! DynamoDB wire types for dynamotest.
//!
//! Only the slice of the DynamoDB JSON protocol that table provisioning and
//! fixture loading need is modelled here: table management (`CreateTable`,
//! `DeleteTable`, `DescribeTable`) and `BatchWriteItem`. Field names follow the
//! `PascalCase` wire format so migration files can be written exactly as the
//! AWS CLI would accept them.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]
#![allow(missing_docs)]

pub mod attribute_value;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod types;

pub use attribute_value::AttributeValue;
pub use error::{DynamoDBError, DynamoDBErrorCode};
pub use operations::DynamoDBOperation;
