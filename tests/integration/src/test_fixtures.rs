//! Fixture loading end to end, against the in-memory store.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use dynamotest_core::{DynamoStore, IdentityTableNameResolver, RandomTableNameResolver};
    use dynamotest_model::AttributeValue;
    use dynamotest_model::input::BatchWriteItemInput;
    use dynamotest_model::types::{BillingMode, WriteRequest};

    use crate::{in_memory_tester, seeded_resolver, tester_over};

    #[tokio::test]
    async fn test_should_provision_testdata_under_seeded_names() {
        let (store, tester) = in_memory_tester(seeded_resolver(15));

        tester.load_fixtures(&[]).await.expect("load fixtures");

        // A seed yields the same suffix for every logical name.
        assert_eq!(tester.table_name_for("otherTable"), "otherTable_FOGwh");
        assert_eq!(tester.table_name_for("tableName"), "tableName_FOGwh");
        assert_eq!(
            store.table_names(),
            vec!["otherTable_FOGwh", "tableName_FOGwh"]
        );

        let items = store.items("tableName_FOGwh").expect("tableName exists");
        assert_eq!(items.len(), 2);
        let profile = items[0]["Profile"].as_m().expect("nested profile");
        assert_eq!(profile["Email"].as_s(), Some("abc@example.com"));
        assert_eq!(profile["Tags"].as_l().map(<[AttributeValue]>::len), Some(2));
        assert_eq!(items[1]["Active"], AttributeValue::Bool(true));

        let other = store.items("otherTable_FOGwh").expect("otherTable exists");
        assert_eq!(other.len(), 1);
        assert_eq!(other[0]["ID"].as_n(), Some("7"));
        assert_eq!(other[0]["Name"].as_s(), Some("CCC"));
    }

    #[tokio::test]
    async fn test_should_reset_tables_on_every_load() {
        let (store, tester) = in_memory_tester(Arc::new(IdentityTableNameResolver));
        tester.load_fixtures(&[]).await.expect("first load");

        let stray = HashMap::from([
            ("ID".to_owned(), AttributeValue::N("99".to_owned())),
            ("Name".to_owned(), AttributeValue::S("stray".to_owned())),
        ]);
        store
            .batch_write_item(BatchWriteItemInput {
                request_items: HashMap::from([(
                    "tableName".to_owned(),
                    vec![WriteRequest::put(stray)],
                )]),
            })
            .await
            .expect("write stray item");
        assert_eq!(store.items("tableName").map(|i| i.len()), Some(3));

        tester.load_fixtures(&[]).await.expect("second load");

        let items = store.items("tableName").expect("tableName exists");
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i["ID"].as_n() != Some("99")));
    }

    #[tokio::test]
    async fn test_should_keep_schema_across_clean() {
        let (store, tester) = in_memory_tester(Arc::new(IdentityTableNameResolver));
        tester.load_fixtures(&[]).await.expect("first load");
        let before = store.describe("tableName").expect("tableName exists");

        tester.load_fixtures(&[]).await.expect("second load");

        let after = store.describe("tableName").expect("tableName exists");
        assert_eq!(after.key_schema, before.key_schema);
        assert_eq!(after.attribute_definitions, before.attribute_definitions);
        assert_eq!(after.global_secondary_indexes, before.global_secondary_indexes);
        assert_eq!(after.provisioned_throughput, before.provisioned_throughput);

        let other = store.describe("otherTable").expect("otherTable exists");
        assert_eq!(
            other.billing_mode_summary.and_then(|s| s.billing_mode),
            Some(BillingMode::PayPerRequest)
        );
        assert!(other.provisioned_throughput.is_none());
    }

    #[tokio::test]
    async fn test_should_load_only_named_fixtures() {
        let (store, tester) = in_memory_tester(Arc::new(IdentityTableNameResolver));

        tester
            .load_fixtures(&["otherTable"])
            .await
            .expect("load otherTable");

        assert_eq!(store.table_names(), vec!["otherTable"]);
    }

    #[tokio::test]
    async fn test_should_migrate_without_fixtures() {
        let (store, tester) = in_memory_tester(seeded_resolver(15));

        tester.migrate_tables(&["tableName"]).await.expect("migrate");
        tester.migrate_tables(&["tableName"]).await.expect("migrate again");

        let physical = tester.table_name_for("tableName");
        assert_eq!(physical, "tableName_FOGwh");
        assert_eq!(store.table_names(), vec![physical.clone()]);
        assert_eq!(store.items(&physical).map(|i| i.len()), Some(0));
    }

    #[tokio::test]
    async fn test_should_isolate_concurrent_testers_sharing_a_store() {
        let (store, _) = in_memory_tester(Arc::new(IdentityTableNameResolver));

        let runs = (0..4).map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let tester = tester_over(Arc::new(RandomTableNameResolver::new()), store);
                tester.load_fixtures(&[]).await.expect("load fixtures");
                tester.table_name_for("tableName")
            })
        });
        let physical: Vec<String> = futures::future::join_all(runs)
            .await
            .into_iter()
            .map(|r| r.expect("join"))
            .collect();

        assert_eq!(store.table_names().len(), 8);
        for table in &physical {
            assert_eq!(store.items(table).map(|i| i.len()), Some(2));
        }
    }

    #[tokio::test]
    #[should_panic(expected = "Cannot load fixtures: fixtures: load failed")]
    async fn test_should_panic_on_missing_fixture_document() {
        let (_store, tester) = in_memory_tester(Arc::new(IdentityTableNameResolver));

        tester.must_load_fixtures(&["doesNotExist"]).await;
    }
}
