use std::path::{Path, PathBuf};

use sqlx::{
    Sqlite,
    pool::PoolConnection,
    sqlite::{
        SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
    },
};

use crate::error::Result;

const SAMPLE_DATA: &str = include_str!("../../../sql/sample_data.sql");

pub(super) struct DbState {
    db_file: PathBuf,
    pool: SqlitePool,
}

impl std::fmt::Debug for DbState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbState")
            .field("db_file", &self.db_file)
            .finish()
    }
}

impl DbState {
    pub(super) async fn new<P: AsRef<Path>>(db_file: P) -> Result<Self> {
        let db_file = db_file.as_ref().to_path_buf();

        let connect_opts = SqliteConnectOptions::new()
            .filename(&db_file)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        // The session issues one statement at a time.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::debug!(db_file = %db_file.display(), "Opened project database");

        Ok(Self { db_file, pool })
    }

    pub(super) async fn conn(&self) -> Result<PoolConnection<Sqlite>> {
        Ok(self.pool.acquire().await?)
    }

    pub(super) async fn load_sample_data(&self) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::raw_sql(SAMPLE_DATA).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Flush the WAL into the main file and release the file handles.
    /// Any later query fails.
    pub(super) async fn close(&self) -> Result<()> {
        sqlx::query("PRAGMA wal_checkpoint(TRUNCATE);")
            .execute(&self.pool)
            .await?;
        self.pool.close().await;
        tracing::debug!(db_file = %self.db_file.display(), "Closed project database");
        Ok(())
    }
}
