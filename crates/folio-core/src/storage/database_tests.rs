//! Tests for database migrations

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::storage::database::Database;

    fn create_test_db() -> (Database, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("test.db");
        let db = Database::new(&db_path).expect("Failed to create database");
        (db, temp_dir)
    }

    #[test]
    fn test_database_creation() {
        let (db, _temp) = create_test_db();
        assert_eq!(db.get_schema_version(), 1);
    }

    #[test]
    fn test_preferences_table_exists() {
        let (db, _temp) = create_test_db();
        let mut stmt = db
            .conn()
            .prepare("PRAGMA table_info(user_preferences)")
            .expect("Failed to prepare PRAGMA");

        let columns: Vec<String> = stmt
            .query_map([], |row| row.get::<_, String>(1))
            .expect("Failed to get columns")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(columns, vec!["key", "value", "updated_at"]);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        drop(Database::new(&db_path).expect("first open"));
        let db = Database::new(&db_path).expect("second open");

        let rows: i32 = db
            .conn()
            .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
            .expect("count versions");
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_in_memory() {
        let db = Database::in_memory().expect("in-memory database");
        assert_eq!(db.get_schema_version(), 1);
    }
}
