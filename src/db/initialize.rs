use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
///
/// Creates the `checkboxes` and `log` tables if absent. There is no
/// migration engine: the schema is small and created in one shot.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS checkboxes (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            checked   INTEGER NOT NULL DEFAULT 0,
            day       INTEGER NOT NULL CHECK(day BETWEEN 1 AND 31),
            month     INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            year      INTEGER NOT NULL,
            full_date TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_checkboxes_ymd
            ON checkboxes(year, month, day);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
