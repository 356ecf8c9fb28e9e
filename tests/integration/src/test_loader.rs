//! Reading and decoding documents from disk.

#[cfg(test)]
mod tests {
    use dynamotest_core::{
        DefinitionsLoader, DynamoTestError, FilesystemDirectoryLoader, FixturesDecoder,
        JsonFixturesDecoder, JsonMigrationDecoder, MigrationDecoder,
    };

    use crate::{fixtures_dir, migrations_dir};

    #[test]
    fn test_should_decode_every_migration_in_testdata() {
        let loader = FilesystemDirectoryLoader::json(migrations_dir());

        let names: Vec<String> = loader
            .read_definitions(&[])
            .expect("read migrations")
            .iter()
            .map(|raw| {
                JsonMigrationDecoder
                    .decode(raw)
                    .expect("decode migration")
                    .table_name
            })
            .collect();

        assert_eq!(names, vec!["otherTable", "tableName"]);
    }

    #[test]
    fn test_should_group_testdata_fixtures_by_table() {
        let loader = FilesystemDirectoryLoader::json(fixtures_dir());
        let docs = loader.read_definitions(&[]).expect("read fixtures");

        let writes = JsonFixturesDecoder.decode(&docs).expect("decode fixtures");

        assert_eq!(writes.tables().collect::<Vec<_>>(), vec!["otherTable", "tableName"]);
        assert_eq!(writes.get("tableName").map(<[_]>::len), Some(2));
        assert_eq!(writes.request_count(), 3);
    }

    #[test]
    fn test_should_ignore_other_extensions_and_subdirectories() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("users.json"), br#"{"table":"users"}"#).expect("write");
        std::fs::write(dir.path().join("notes.txt"), b"not a fixture").expect("write");
        std::fs::create_dir(dir.path().join("nested")).expect("mkdir");
        std::fs::write(
            dir.path().join("nested/orders.json"),
            br#"{"table":"orders"}"#,
        )
        .expect("write");
        let loader = FilesystemDirectoryLoader::json(dir.path());

        let all = loader.read_definitions(&[]).expect("read all");
        let nested = loader.read_definitions(&["nested/orders"]).expect("read nested");

        assert_eq!(all, vec![br#"{"table":"users"}"#.to_vec()]);
        assert_eq!(nested, vec![br#"{"table":"orders"}"#.to_vec()]);
    }

    #[test]
    fn test_should_name_missing_document_in_error() {
        let loader = FilesystemDirectoryLoader::json(fixtures_dir());

        let err = loader
            .read_definitions(&["doesNotExist"])
            .expect_err("missing document");

        assert!(matches!(err, DynamoTestError::ReadDefinition { .. }));
        assert!(err.to_string().contains("doesNotExist.json"));
    }
}
