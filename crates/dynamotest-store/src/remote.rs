//! DynamoDB JSON protocol client.
//!
//! Every operation is a `POST /` carrying the operation name in
//! `X-Amz-Target` and a `PascalCase` JSON body. Failures come back as
//!
//! ```json
//! {"__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
//!  "message": "Requested resource not found"}
//! ```
//!
//! and are mapped back onto [`DynamoDBErrorCode`].

use async_trait::async_trait;
use dynamotest_core::{DynamoStore, DynamoTestConfig};
use dynamotest_model::input::{
    BatchWriteItemInput, CreateTableInput, DeleteTableInput, DescribeTableInput,
};
use dynamotest_model::operations::CONTENT_TYPE;
use dynamotest_model::output::{
    BatchWriteItemOutput, CreateTableOutput, DeleteTableOutput, DescribeTableOutput,
};
use dynamotest_model::{DynamoDBError, DynamoDBErrorCode, DynamoDBOperation};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Access key placed in the credential scope of every request.
const ACCESS_KEY_ID: &str = "dynamotest";

/// A [`DynamoStore`] reached over HTTP.
///
/// Requests carry an `Authorization` header whose credential scope names the
/// configured region, which is what emulators use to pick the region. They
/// are not signed, so a real AWS endpoint rejects them.
///
/// This store targets emulators. On real DynamoDB, `CreateTable` and
/// `DeleteTable` return while the table is still `CREATING` or `DELETING`,
/// and a `CreateTable` issued right after a `DeleteTable` of the same name
/// fails with `ResourceInUseException`. [`WholeTableCleaner`] issues exactly
/// that pair, so cleaning tables only works against emulators that apply
/// both calls synchronously.
///
/// [`WholeTableCleaner`]: dynamotest_core::WholeTableCleaner
#[derive(Debug, Clone)]
pub struct HttpDynamoStore {
    client: reqwest::Client,
    endpoint: String,
    region: String,
}

impl HttpDynamoStore {
    /// A store at `endpoint` (e.g. `http://localhost:4566`) in `region`.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, region: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint, region)
    }

    /// Like [`HttpDynamoStore::new`], sending through an existing client.
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        endpoint: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            region: region.into(),
        }
    }

    /// A store at the configured endpoint and region.
    #[must_use]
    pub fn from_config(config: &DynamoTestConfig) -> Self {
        Self::new(config.endpoint_url.clone(), config.default_region.clone())
    }

    /// The endpoint requests are sent to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Describe a table.
    pub async fn describe_table(
        &self,
        input: DescribeTableInput,
    ) -> Result<DescribeTableOutput, DynamoDBError> {
        self.call(DynamoDBOperation::DescribeTable, &input).await
    }

    async fn call<I, O>(&self, operation: DynamoDBOperation, input: &I) -> Result<O, DynamoDBError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        let body = serde_json::to_vec(input).map_err(|e| {
            DynamoDBError::serialization_exception(format!("cannot encode {operation}: {e}"))
                .with_source(e)
        })?;

        debug!(%operation, endpoint = %self.endpoint, "sending request");
        let response = self
            .client
            .post(&self.endpoint)
            .header(http::header::CONTENT_TYPE, CONTENT_TYPE)
            .header("X-Amz-Target", operation.target())
            .header(http::header::AUTHORIZATION, self.authorization())
            .body(body)
            .send()
            .await
            .map_err(|e| transport_error(operation, e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(operation, e))?;

        if !status.is_success() {
            let err = parse_error_body(status, &bytes);
            debug!(%operation, code = %err.code, %status, "request failed");
            return Err(err);
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            DynamoDBError::serialization_exception(format!(
                "cannot decode {operation} response: {e}"
            ))
            .with_source(e)
        })
    }

    fn authorization(&self) -> String {
        let date = chrono::Utc::now().format("%Y%m%d");
        format!(
            "AWS4-HMAC-SHA256 Credential={ACCESS_KEY_ID}/{date}/{}/dynamodb/aws4_request, \
             SignedHeaders=content-type;host;x-amz-target, Signature=unsigned",
            self.region
        )
    }
}

#[async_trait]
impl DynamoStore for HttpDynamoStore {
    async fn create_table(
        &self,
        input: CreateTableInput,
    ) -> Result<CreateTableOutput, DynamoDBError> {
        self.call(DynamoDBOperation::CreateTable, &input).await
    }

    /// `DeleteTable` only echoes the table name and status back, so the table
    /// is described first and that description is returned instead.
    async fn delete_table(
        &self,
        input: DeleteTableInput,
    ) -> Result<DeleteTableOutput, DynamoDBError> {
        let described = self
            .describe_table(DescribeTableInput {
                table_name: input.table_name.clone(),
            })
            .await?;
        let mut output: DeleteTableOutput =
            self.call(DynamoDBOperation::DeleteTable, &input).await?;
        if described.table.is_some() {
            output.table_description = described.table;
        }
        Ok(output)
    }

    async fn batch_write_item(
        &self,
        input: BatchWriteItemInput,
    ) -> Result<BatchWriteItemOutput, DynamoDBError> {
        let output: BatchWriteItemOutput =
            self.call(DynamoDBOperation::BatchWriteItem, &input).await?;
        let unprocessed = output.unprocessed_count();
        if unprocessed > 0 {
            return Err(DynamoDBError::with_message(
                DynamoDBErrorCode::ProvisionedThroughputExceededException,
                format!("{unprocessed} of {} write requests were not processed", input.len()),
            ));
        }
        Ok(output)
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    #[serde(default, rename = "message", alias = "Message")]
    message: Option<String>,
}

/// Turn a non-2xx response into a [`DynamoDBError`].
///
/// Unknown `__type` values and bodies that are not JSON become
/// `InternalServerError`, keeping the raw text in the message.
fn parse_error_body(status: http::StatusCode, body: &[u8]) -> DynamoDBError {
    let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
        let text = String::from_utf8_lossy(body);
        return DynamoDBError::internal_error(format!("HTTP {status}: {text}")).with_status(status);
    };

    let message = parsed.message.unwrap_or_default();
    let err = match parsed.error_type.as_deref() {
        Some(error_type) => match DynamoDBErrorCode::from_error_type(error_type) {
            Some(code) => DynamoDBError::with_message(code, message),
            None => DynamoDBError::internal_error(format!("{error_type}: {message}")),
        },
        None => DynamoDBError::internal_error(format!("HTTP {status}: {message}")),
    };
    err.with_status(status)
}

fn transport_error(operation: DynamoDBOperation, e: reqwest::Error) -> DynamoDBError {
    DynamoDBError::internal_error(format!("{operation} request failed: {e}")).with_source(e)
}
