#[macro_use]
extern crate diesel;

use std::{
    cell::{RefCell, RefMut},
    sync::Arc,
};

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection, Connection as _};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use addrdb_core::{repositories as repo, usecases as uc};

mod models;
mod repo_impl;
mod schema;
mod util;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

type SharedPool = Arc<RwLock<ConnectionPool>>;

fn checkout(pool: &ConnectionPool, access: &str) -> Fallible<RefCell<PooledConnection>> {
    let conn = pool.get().inspect_err(|err| {
        log::error!("No pooled database connection available for {access} access: {err}");
    })?;
    Ok(RefCell::new(conn))
}

pub struct DbReadOnly<'a> {
    _pool_guard: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadOnly<'a> {
    fn try_new(pool: &'a SharedPool) -> Fallible<Self> {
        let pool_guard = pool.read();
        let conn = checkout(&pool_guard, "read-only")?;
        Ok(Self {
            _pool_guard: pool_guard,
            conn,
        })
    }
}

pub struct DbReadWrite<'a> {
    _pool_guard: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

impl<'a> DbReadWrite<'a> {
    fn try_new(pool: &'a SharedPool) -> Fallible<Self> {
        let pool_guard = pool.write();
        let conn = checkout(&pool_guard, "read/write")?;
        Ok(Self {
            _pool_guard: pool_guard,
            conn,
        })
    }

    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        // Diesel transactions only forward their own error type, so
        // errors from the closure leave through this capture while the
        // transaction itself is rolled back.
        let mut failure = None;
        let res = self.conn.borrow_mut().transaction(|conn| {
            f(&DbConnection::new(conn)).map_err(|err| {
                failure = Some(err.into());
                diesel::result::Error::RollbackTransaction
            })
        });
        res.map_err(|err| match failure {
            Some(failure) => {
                debug_assert!(matches!(err, diesel::result::Error::RollbackTransaction));
                failure
            }
            None => uc::Error::Repo(match err {
                diesel::result::Error::NotFound => repo::Error::NotFound,
                _ => repo::Error::Other(err.into()),
            }),
        })
    }

    fn conn_mut(&self) -> RefMut<'_, PooledConnection> {
        self.conn.borrow_mut()
    }
}

/// A borrowed connection inside an open transaction.
pub struct DbConnection<'a> {
    conn: RefCell<&'a mut SqliteConnection>,
}

impl<'a> DbConnection<'a> {
    fn new(conn: &'a mut SqliteConnection) -> Self {
        Self {
            conn: RefCell::new(conn),
        }
    }
}

#[derive(Clone)]
pub struct Connections {
    // The pool itself sits behind a reader/writer lock so that at
    // most one write connection is checked out at a time while any
    // number of readers run concurrently. Without this arrangement
    // concurrent writers run into SQLITE_LOCKED ("database is
    // locked") and requests fail with internal server errors.
    pool: SharedPool,
}

/// Tune the database engine.
///
/// The text encoding is fixed after the database file has been
/// created, all other settings apply on every start.
fn configure_engine(conn: &mut SqliteConnection) -> Fallible<()> {
    use diesel::RunQueryDsl as _;
    diesel::sql_query(r#"
PRAGMA journal_mode = WAL;        -- readers are not blocked by the writer
PRAGMA synchronous = NORMAL;      -- with WAL an fsync is only needed on checkpoints
PRAGMA wal_autocheckpoint = 1000; -- copy back into the main file every 1000 pages (the default)
PRAGMA wal_checkpoint(TRUNCATE);  -- cut down WAL files that grew during the previous run
PRAGMA secure_delete = 0;         -- no zeroing of deleted rows
PRAGMA automatic_index = 1;       -- create (and log) transient indexes for unindexed queries
PRAGMA encoding = 'UTF-8';
"#).execute(conn)?;
    Ok(())
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Open and drop a probe connection first. r2d2 retries failed
        // connection attempts with error logging instead of giving up,
        // so an unusable URL (such as ":/tmp/addrdb.sqlite") would
        // otherwise not surface as an immediate error. As a side
        // effect a missing database file is created here.
        let _ = SqliteConnection::establish(url)?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::new(url))?;
        configure_engine(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly<'_>> {
        DbReadOnly::try_new(&self.pool)
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite<'_>> {
        DbReadWrite::try_new(&self.pool)
    }
}

pub fn run_embedded_database_migrations(conn: DbReadWrite<'_>) {
    log::info!("Applying pending database migrations");
    conn.conn_mut().run_pending_migrations(MIGRATIONS).unwrap();
}
