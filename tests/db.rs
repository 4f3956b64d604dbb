use advocate_directory::db::get_connection;

mod common;

#[test]
fn test_creates_and_migrates_db_file() {
    let test_db = common::TestDb::new("test_creates_and_migrates_db_file.db");
    let conn = get_connection(test_db.pool());
    assert!(conn.is_ok());
}
