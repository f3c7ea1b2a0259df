//! Shared test helpers for `PostgreSQL` integration tests.

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use pg_embedded_setup_unpriv::TestCluster;
use taskboard::board::adapters::postgres::{PostgresBoardRepository, run_migrations};
use tokio::runtime::Runtime;
use uuid::Uuid;

/// Template database name for the pre-migrated schema.
pub const TEMPLATE_DB: &str = "taskboard_test_template";

/// Creates a tokio runtime for driving async repository calls.
pub fn test_runtime() -> Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to create test runtime")
}

/// Ensures the template database exists with the board schema applied.
fn ensure_template(cluster: &TestCluster) {
    cluster
        .ensure_template_exists(TEMPLATE_DB, |db_name| {
            let url = cluster.connection().database_url(db_name);
            let mut conn = PgConnection::establish(&url).map_err(|e| eyre::eyre!("{e}"))?;
            run_migrations(&mut conn).map_err(|e| eyre::eyre!("{e}"))?;
            Ok(())
        })
        .expect("template setup");
}

/// A migrated database cloned from the template, dropped with the value.
pub struct TestDatabase {
    cluster: &'static TestCluster,
    name: String,
    repo: Option<PostgresBoardRepository>,
}

impl TestDatabase {
    /// Clones the template into a fresh database and opens a repository on it.
    pub fn create(cluster: &'static TestCluster) -> Self {
        ensure_template(cluster);
        let name = format!("taskboard_test_{}", Uuid::new_v4().simple());
        cluster
            .create_database_from_template(name.as_str(), TEMPLATE_DB)
            .expect("create test database");
        let url = cluster.connection().database_url(&name);
        let manager = ConnectionManager::<PgConnection>::new(url);
        // One connection keeps statement ordering deterministic.
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)
            .expect("build test pool");
        Self {
            cluster,
            name,
            repo: Some(PostgresBoardRepository::new(pool)),
        }
    }

    /// Repository under test.
    pub fn repo(&self) -> &PostgresBoardRepository {
        self.repo.as_ref().expect("repository lives until drop")
    }

    /// Opens a raw connection to the test database.
    pub fn connection(&self) -> PgConnection {
        let url = self.cluster.connection().database_url(&self.name);
        PgConnection::establish(&url).expect("connect to test database")
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        // Pooled connections must close before the database can be dropped.
        drop(self.repo.take());
        if let Err(err) = self.cluster.drop_database(self.name.as_str()) {
            tracing::warn!(database = %self.name, error = %err, "failed to drop test database");
        }
    }
}
