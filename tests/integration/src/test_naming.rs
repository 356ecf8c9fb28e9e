//! Physical table naming through configuration and clocks.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};
    use dynamotest_core::{
        DynamoTestConfig, DynamoTester, FixedClock, MemoizedTableNameResolver, NamingStrategy,
        TimestampTableNameResolver,
    };
    use dynamotest_store::InMemoryDynamoStore;

    use crate::{fixtures_dir, in_memory_tester, migrations_dir};

    fn config(strategy: NamingStrategy) -> DynamoTestConfig {
        DynamoTestConfig::builder()
            .migrations_path(migrations_dir().display().to_string())
            .fixtures_path(fixtures_dir().display().to_string())
            .naming_strategy(strategy)
            .random_seed(Some(42))
            .build()
    }

    #[tokio::test]
    async fn test_should_name_tables_from_config() {
        let store = Arc::new(InMemoryDynamoStore::new());
        let tester = DynamoTester::from_config(&config(NamingStrategy::Random), store.clone());

        assert_eq!(tester.table_name_for("tableName"), "tableName_HRukp");
        tester.load_fixtures(&["tableName_1"]).await.expect("load fixtures");

        // The name handed out before loading is the table that was loaded.
        assert!(store.items("tableName_HRukp").is_some());
        assert_eq!(tester.table_name_for("tableName"), "tableName_HRukp");
    }

    #[tokio::test]
    async fn test_should_use_logical_names_with_identity_strategy() {
        let store = Arc::new(InMemoryDynamoStore::new());
        let tester = DynamoTester::from_config(&config(NamingStrategy::Identity), store.clone());

        tester.load_fixtures(&[]).await.expect("load fixtures");

        assert_eq!(store.table_names(), vec!["otherTable", "tableName"]);
    }

    #[tokio::test]
    async fn test_should_suffix_tables_with_clock_nanos() {
        let instant: DateTime<Utc> =
            DateTime::parse_from_rfc3339("2019-04-05T12:55:13.000000001Z")
                .expect("valid timestamp")
                .with_timezone(&Utc);
        let resolver = Arc::new(MemoizedTableNameResolver::new(
            TimestampTableNameResolver::new(Arc::new(FixedClock::new(instant))),
        ));
        let (store, tester) = in_memory_tester(resolver);

        tester.load_fixtures(&[]).await.expect("load fixtures");

        assert_eq!(
            store.table_names(),
            vec![
                "otherTable_1554468913000000001",
                "tableName_1554468913000000001"
            ]
        );
    }
}
