//! Fixture tooling configuration.
//!
//! Provides [`DynamoTestConfig`], loaded from environment variables so a CI job
//! can point the same test suite at LocalStack, DynamoDB Local or a real
//! account without code changes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::clock::SystemClock;
use crate::resolver::{
    DEFAULT_SUFFIX_LEN, IdentityTableNameResolver, MemoizedTableNameResolver,
    RandomTableNameResolver, TableNameResolver, TimestampTableNameResolver,
};

/// How physical table names are derived from logical ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStrategy {
    /// Physical name equals the logical name.
    Identity,
    /// `<logical>_<random letters>`.
    Random,
    /// `<logical>_<unix nanos>`.
    #[default]
    Timestamp,
}

impl NamingStrategy {
    /// Parse a strategy name, case-insensitively.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "identity" => Some(Self::Identity),
            "random" => Some(Self::Random),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }
}

/// Configuration for [`crate::DynamoTester::from_config`].
///
/// # Examples
///
/// ```
/// use dynamotest_core::config::{DynamoTestConfig, NamingStrategy};
///
/// let config = DynamoTestConfig::default();
/// assert_eq!(config.endpoint_url, "http://localhost:4566");
/// assert_eq!(config.naming_strategy, NamingStrategy::Timestamp);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct DynamoTestConfig {
    /// Endpoint of the DynamoDB-compatible store.
    #[builder(default = String::from("http://localhost:4566"))]
    pub endpoint_url: String,

    /// Region the store is addressed in.
    #[builder(default = String::from("us-east-1"))]
    pub default_region: String,

    /// Directory holding migration documents.
    #[builder(default = String::from("testdata/migrations"))]
    pub migrations_path: String,

    /// Directory holding fixture documents.
    #[builder(default = String::from("testdata/fixtures"))]
    pub fixtures_path: String,

    /// How physical table names are derived.
    #[builder(default)]
    pub naming_strategy: NamingStrategy,

    /// Letters appended by the random strategy.
    #[builder(default = DEFAULT_SUFFIX_LEN)]
    pub random_suffix_len: usize,

    /// Fixed seed for the random strategy.
    #[builder(default)]
    pub random_seed: Option<i64>,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"))]
    pub log_level: String,
}

impl Default for DynamoTestConfig {
    fn default() -> Self {
        Self {
            endpoint_url: String::from("http://localhost:4566"),
            default_region: String::from("us-east-1"),
            migrations_path: String::from("testdata/migrations"),
            fixtures_path: String::from("testdata/fixtures"),
            naming_strategy: NamingStrategy::default(),
            random_suffix_len: DEFAULT_SUFFIX_LEN,
            random_seed: None,
            log_level: String::from("info"),
        }
    }
}

impl DynamoTestConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults;
    /// values that do not parse are ignored):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DYNAMOTEST_ENDPOINT_URL` | `http://localhost:4566` |
    /// | `DEFAULT_REGION` | `us-east-1` |
    /// | `DYNAMOTEST_MIGRATIONS_PATH` | `testdata/migrations` |
    /// | `DYNAMOTEST_FIXTURES_PATH` | `testdata/fixtures` |
    /// | `DYNAMOTEST_TABLE_NAMING` | `timestamp` |
    /// | `DYNAMOTEST_RANDOM_SUFFIX_LEN` | `5` |
    /// | `DYNAMOTEST_RANDOM_SEED` | unset |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("DYNAMOTEST_ENDPOINT_URL") {
            config.endpoint_url = v;
        }
        if let Ok(v) = std::env::var("DEFAULT_REGION") {
            config.default_region = v;
        }
        if let Ok(v) = std::env::var("DYNAMOTEST_MIGRATIONS_PATH") {
            config.migrations_path = v;
        }
        if let Ok(v) = std::env::var("DYNAMOTEST_FIXTURES_PATH") {
            config.fixtures_path = v;
        }
        if let Some(strategy) = std::env::var("DYNAMOTEST_TABLE_NAMING")
            .ok()
            .and_then(|v| NamingStrategy::parse(&v))
        {
            config.naming_strategy = strategy;
        }
        if let Ok(v) = std::env::var("DYNAMOTEST_RANDOM_SUFFIX_LEN") {
            if let Ok(n) = v.parse::<usize>() {
                config.random_suffix_len = n;
            }
        }
        if let Ok(v) = std::env::var("DYNAMOTEST_RANDOM_SEED") {
            if let Ok(seed) = v.parse::<i64>() {
                config.random_seed = Some(seed);
            }
        }
        if let Ok(v) = std::env::var("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// Build the resolver this configuration describes.
    ///
    /// Random and timestamp names are memoized, so every lookup of a logical
    /// name in this process yields the same physical name.
    #[must_use]
    pub fn table_name_resolver(&self) -> Arc<dyn TableNameResolver> {
        match self.naming_strategy {
            NamingStrategy::Identity => Arc::new(IdentityTableNameResolver),
            NamingStrategy::Random => {
                let random = self
                    .random_seed
                    .map_or_else(RandomTableNameResolver::new, RandomTableNameResolver::with_seed)
                    .with_suffix_len(self.random_suffix_len);
                Arc::new(MemoizedTableNameResolver::new(random))
            }
            NamingStrategy::Timestamp => Arc::new(MemoizedTableNameResolver::new(
                TimestampTableNameResolver::new(Arc::new(SystemClock)),
            )),
        }
    }
}
