//! Database schema migrations for momentum.
//!
//! Migrations are versioned and applied automatically when opening the
//! database. The `schema_version` table tracks the current migration version.

use rusqlite::{Connection, Result as SqliteResult};

/// Apply all pending migrations to bring the database to the current
/// schema version.
///
/// # Errors
/// Returns an error if migration fails.
pub fn migrate(conn: &Connection) -> SqliteResult<()> {
    create_schema_version_table(conn)?;

    let current_version = get_schema_version(conn);

    if current_version < 1 {
        migrate_v1(conn)?;
    }
    if current_version < 2 {
        migrate_v2(conn)?;
    }

    Ok(())
}

/// Create the schema_version table if it doesn't exist.
fn create_schema_version_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

/// Get the current schema version from the database.
///
/// Returns 0 if no version is set (initial database).
fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT version FROM schema_version", [], |row| {
        row.get::<_, i32>(0)
    })
    .unwrap_or(0)
}

/// Set the schema version in the database.
fn set_schema_version(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Migration v1: Initial schema (baseline).
///
/// The base tables are created by `Database::migrate()` directly; this
/// migration only marks the version.
fn migrate_v1(conn: &Connection) -> SqliteResult<()> {
    set_schema_version(conn, 1)?;
    Ok(())
}

/// Migration v2: Add Eisenhower classification fields.
///
/// Adds `urgency` and `importance` columns to the tasks table. Rows that
/// predate the matrix default to not_urgent / not_important.
fn migrate_v2(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "ALTER TABLE tasks ADD COLUMN urgency TEXT NOT NULL DEFAULT 'not_urgent';
         ALTER TABLE tasks ADD COLUMN importance TEXT NOT NULL DEFAULT 'not_important';",
    )?;

    set_schema_version(&tx, 2)?;
    tx.commit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_schema(conn: &Connection) {
        conn.execute_batch(
            "CREATE TABLE tasks (
                id          TEXT PRIMARY KEY,
                name        TEXT NOT NULL,
                notes       TEXT,
                category_id TEXT,
                status      TEXT NOT NULL DEFAULT 'pending',
                date        TEXT NOT NULL,
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );",
        )
        .unwrap();
    }

    #[test]
    fn migrate_fresh_database_reaches_v2() {
        let conn = Connection::open_in_memory().unwrap();
        base_schema(&conn);
        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn), 2);
    }

    #[test]
    fn migrate_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        base_schema(&conn);
        migrate(&conn).unwrap();
        migrate(&conn).unwrap();
        assert_eq!(get_schema_version(&conn), 2);
    }

    #[test]
    fn v2_defaults_existing_rows_to_eliminate_quadrant() {
        let conn = Connection::open_in_memory().unwrap();
        base_schema(&conn);
        conn.execute(
            "INSERT INTO tasks (id, name, status, date, created_at, updated_at)
             VALUES ('t1', 'old task', 'completed', '2024-01-01', '', '')",
            [],
        )
        .unwrap();

        migrate(&conn).unwrap();

        let (urgency, importance): (String, String) = conn
            .query_row(
                "SELECT urgency, importance FROM tasks WHERE id = 't1'",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(urgency, "not_urgent");
        assert_eq!(importance, "not_important");
    }
}
