//! DynamoDB error types.
//!
//! DynamoDB reports failures as JSON with a `__type` field holding the
//! fully-qualified error type. Callers branch on [`DynamoDBErrorCode`], never on
//! the human-readable message.

use std::fmt;

const TYPE_NAMESPACE: &str = "com.amazonaws.dynamodb.v20120810#";

/// Well-known DynamoDB error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DynamoDBErrorCode {
    /// Table already exists (or is being created or deleted).
    ResourceInUseException,
    /// Table not found.
    ResourceNotFoundException,
    /// Too many concurrent table-management operations.
    LimitExceededException,
    /// Provisioned throughput exceeded.
    ProvisionedThroughputExceededException,
    /// Request limit exceeded.
    RequestLimitExceeded,
    /// Validation error.
    #[default]
    ValidationException,
    /// Serialization error.
    SerializationException,
    /// Internal server error, also used for transport failures.
    InternalServerError,
    /// Access denied.
    AccessDeniedException,
    /// Unknown operation or client.
    UnrecognizedClientException,
}

impl DynamoDBErrorCode {
    const ALL: [Self; 10] = [
        Self::ResourceInUseException,
        Self::ResourceNotFoundException,
        Self::LimitExceededException,
        Self::ProvisionedThroughputExceededException,
        Self::RequestLimitExceeded,
        Self::ValidationException,
        Self::SerializationException,
        Self::InternalServerError,
        Self::AccessDeniedException,
        Self::UnrecognizedClientException,
    ];

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourceInUseException => "ResourceInUseException",
            Self::ResourceNotFoundException => "ResourceNotFoundException",
            Self::LimitExceededException => "LimitExceededException",
            Self::ProvisionedThroughputExceededException => {
                "ProvisionedThroughputExceededException"
            }
            Self::RequestLimitExceeded => "RequestLimitExceeded",
            Self::ValidationException => "ValidationException",
            Self::SerializationException => "SerializationException",
            Self::InternalServerError => "InternalServerError",
            Self::AccessDeniedException => "AccessDeniedException",
            Self::UnrecognizedClientException => "UnrecognizedClientException",
        }
    }

    /// Returns the fully-qualified error type string for the JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> String {
        match self {
            Self::ValidationException => "com.amazon.coral.validate#ValidationException".to_owned(),
            other => format!("{TYPE_NAMESPACE}{}", other.as_str()),
        }
    }

    /// Parses a `__type` value. Accepts both the fully-qualified form
    /// (`com.amazonaws.dynamodb.v20120810#ResourceNotFoundException`) and the
    /// bare code.
    #[must_use]
    pub fn from_error_type(error_type: &str) -> Option<Self> {
        let code = error_type
            .rsplit_once('#')
            .map_or(error_type, |(_, code)| code);
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for DynamoDBErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DynamoDB error response.
#[derive(Debug)]
pub struct DynamoDBError {
    /// The error code.
    pub code: DynamoDBErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for DynamoDBError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamoDBError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for DynamoDBError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl DynamoDBError {
    /// Create a new `DynamoDBError` from an error code.
    #[must_use]
    pub fn new(code: DynamoDBErrorCode) -> Self {
        Self::with_message(code, code.as_str())
    }

    /// Create a new `DynamoDBError` with a custom message.
    #[must_use]
    pub fn with_message(code: DynamoDBErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the HTTP status code reported by the store.
    #[must_use]
    pub fn with_status(mut self, status_code: http::StatusCode) -> Self {
        self.status_code = status_code;
        self
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the store reported that the table does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.code == DynamoDBErrorCode::ResourceNotFoundException
    }

    /// Whether the store reported that the table already exists.
    #[must_use]
    pub fn is_resource_in_use(&self) -> bool {
        self.code == DynamoDBErrorCode::ResourceInUseException
    }

    // -- Convenience constructors --

    /// Table already exists.
    #[must_use]
    pub fn resource_in_use(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ResourceInUseException, message)
    }

    /// Table or resource not found.
    #[must_use]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ResourceNotFoundException, message)
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::ValidationException, message)
    }

    /// Serialization error.
    #[must_use]
    pub fn serialization_exception(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::SerializationException, message)
    }

    /// Internal server error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::with_message(DynamoDBErrorCode::InternalServerError, message)
    }
}

/// Create a `DynamoDBError` from an error code.
///
/// # Examples
///
/// ```
/// use dynamotest_model::dynamodb_error;
/// use dynamotest_model::error::DynamoDBErrorCode;
///
/// let err = dynamodb_error!(ResourceNotFoundException, "Table not found");
/// assert_eq!(err.code, DynamoDBErrorCode::ResourceNotFoundException);
/// assert!(err.is_not_found());
/// ```
#[macro_export]
macro_rules! dynamodb_error {
    ($code:ident) => {
        $crate::error::DynamoDBError::new($crate::error::DynamoDBErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::DynamoDBError::with_message($crate::error::DynamoDBErrorCode::$code, $msg)
    };
}
