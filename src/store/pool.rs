//! Read-only connection pool.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{Connection, OpenFlags};

use super::error::{StoreError, StoreResult};

/// Upper bound on how long a query may wait on a busy database.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Fixed-size pool of read-only SQLite connections.
///
/// Connections are selected round-robin and serialized through a mutex, so a
/// checked-out connection is released on every path when its guard drops.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    cursor: AtomicUsize,
}

impl ReadPool {
    /// Open `size` read-only connections to the database at `path`.
    ///
    /// The file must already exist; this layer never creates or writes it.
    pub fn open(path: &Path, size: usize) -> StoreResult<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
        let size = size.max(1);

        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let connection = Connection::open_with_flags(path, flags).map_err(|e| {
                StoreError::Unavailable(format!("failed to open {}: {}", path.display(), e))
            })?;
            connection
                .busy_timeout(BUSY_TIMEOUT)
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
            connections.push(Mutex::new(connection));
        }

        Ok(Self {
            connections,
            cursor: AtomicUsize::new(0),
        })
    }

    /// Check out the next connection using round-robin selection.
    pub fn connection(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        let index = self.cursor.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        self.connections[index]
            .lock()
            .map_err(|_| StoreError::Unavailable("read pool mutex poisoned".to_string()))
    }

    /// Number of pooled connections.
    pub fn size(&self) -> usize {
        self.connections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let result = ReadPool::open(&dir.path().join("missing.sqlite"), 2);
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_round_robin_checkout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let pool = ReadPool::open(&path, 3).unwrap();
        assert_eq!(pool.size(), 3);

        for _ in 0..6 {
            let conn = pool.connection().unwrap();
            let count: i64 = conn
                .query_row("SELECT COUNT(*) FROM t", [], |row| row.get(0))
                .unwrap();
            assert_eq!(count, 0);
        }
    }

    #[test]
    fn test_zero_size_clamps_to_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.sqlite");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let pool = ReadPool::open(&path, 0).unwrap();
        assert_eq!(pool.size(), 1);
    }
}
