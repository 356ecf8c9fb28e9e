//! Fixture loading against a running DynamoDB-compatible server.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use dynamotest_core::{DynamoStore, DynamoTester, RandomTableNameResolver};
    use dynamotest_model::input::{DeleteTableInput, DescribeTableInput};
    use dynamotest_store::HttpDynamoStore;

    use crate::{http_store, test_table_name, tester_over};

    fn server_tester(store: &Arc<HttpDynamoStore>) -> DynamoTester {
        tester_over(Arc::new(RandomTableNameResolver::new()), store.clone())
    }

    /// Drop the physical tables behind `logical_names`.
    async fn drop_tables(
        store: &HttpDynamoStore,
        tester: &DynamoTester,
        logical_names: &[&str],
    ) -> anyhow::Result<()> {
        for logical in logical_names {
            store
                .delete_table(DeleteTableInput {
                    table_name: tester.table_name_for(logical),
                })
                .await?;
        }
        Ok(())
    }

    #[tokio::test]
    #[ignore = "requires a running DynamoDB-compatible server"]
    async fn test_should_load_fixtures_into_server() {
        let store = http_store();
        let tester = server_tester(&store);

        tester.must_load_fixtures(&[]).await;

        let described = store
            .describe_table(DescribeTableInput {
                table_name: tester.table_name_for("tableName"),
            })
            .await
            .expect("describe tableName");
        let table = described.table.expect("table description");
        assert_eq!(table.global_secondary_indexes.len(), 1);

        drop_tables(&store, &tester, &["tableName", "otherTable"])
            .await
            .expect("drop tables");
    }

    #[tokio::test]
    #[ignore = "requires a running DynamoDB-compatible server"]
    async fn test_should_reload_fixtures_into_existing_tables() {
        let store = http_store();
        let tester = server_tester(&store);

        tester.must_load_fixtures(&["otherTable"]).await;
        tester.must_load_fixtures(&["otherTable"]).await;

        drop_tables(&store, &tester, &["otherTable"])
            .await
            .expect("drop tables");
    }

    #[tokio::test]
    #[ignore = "requires a running DynamoDB-compatible server"]
    async fn test_should_report_missing_table_on_delete() {
        let store = http_store();

        let err = store
            .delete_table(DeleteTableInput {
                table_name: test_table_name("missing"),
            })
            .await
            .expect_err("table does not exist");

        assert!(err.is_not_found());
    }
}
