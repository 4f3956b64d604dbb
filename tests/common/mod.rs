use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use advocate_directory::db::{DbPool, establish_connection_pool};
use advocate_directory::domain::advocate::NewAdvocate;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    _dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let database_url = dir.path().join(name).to_string_lossy().to_string();

        let pool = establish_connection_pool(&database_url).expect("failed to build pool");
        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        Self { _dir: dir, pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[allow(dead_code)]
pub fn advocate(
    first: &str,
    last: &str,
    city: &str,
    degree: &str,
    specialties: &[&str],
    years: i32,
    phone: i64,
) -> NewAdvocate {
    NewAdvocate::new(
        first.to_string(),
        last.to_string(),
        city.to_string(),
        degree.to_string(),
        specialties.iter().map(|s| s.to_string()).collect(),
        years,
        phone,
    )
}
