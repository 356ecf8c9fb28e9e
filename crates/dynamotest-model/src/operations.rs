//! DynamoDB operations issued by dynamotest.

use std::fmt;

/// Prefix of the `X-Amz-Target` header for the 2012-08-10 API.
pub const TARGET_PREFIX: &str = "DynamoDB_20120810.";

/// Content type of the `awsJson1_0` protocol.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.0";

/// The operations a fixture run sends to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamoDBOperation {
    /// Create a new table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Describe a table.
    DescribeTable,
    /// Batch write (put/delete) items to multiple tables.
    BatchWriteItem,
}

impl DynamoDBOperation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTable => "CreateTable",
            Self::DeleteTable => "DeleteTable",
            Self::DescribeTable => "DescribeTable",
            Self::BatchWriteItem => "BatchWriteItem",
        }
    }

    /// Value of the `X-Amz-Target` header for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for DynamoDBOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_target_header() {
        assert_eq!(
            DynamoDBOperation::BatchWriteItem.target(),
            "DynamoDB_20120810.BatchWriteItem"
        );
    }
}
