//! Day-store queries: month seeding, month load, end-of-session persist.

use std::collections::BTreeMap;

use crate::core::calendar::month_days;
use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::db::models::DayRecord;
use chrono::{Datelike, NaiveDate};
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("full_date")?;

    let full_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(DayRecord {
        id: row.get("id")?,
        checked: row.get::<_, i64>("checked")? != 0,
        day: row.get("day")?,
        month: row.get("month")?,
        year: row.get("year")?,
        full_date,
    })
}

/// True when rows already exist for `reference`'s month.
pub fn month_is_seeded(conn: &Connection, reference: NaiveDate) -> AppResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM checkboxes WHERE year = ?1 AND month = ?2",
        params![reference.year(), reference.month()],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Seed the current month once: insert one row per calendar day, with past
/// days pre-checked and today onward unchecked. Idempotent — if any rows
/// exist for the month, nothing is inserted.
pub fn ensure_month_seeded(conn: &Connection, today: NaiveDate) -> AppResult<()> {
    if month_is_seeded(conn, today)? {
        return Ok(());
    }

    let days = month_days(today);

    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO checkboxes (checked, day, month, year, full_date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for d in &days {
            stmt.execute(params![
                i64::from(*d < today),
                d.day(),
                d.month(),
                d.year(),
                d.format("%Y-%m-%d").to_string(),
            ])?;
        }
    }
    tx.commit()?;

    ttlog(
        conn,
        "seed",
        &today.format("%Y-%m").to_string(),
        &format!("Have inserted {} records to the table.", days.len()),
    )?;

    Ok(())
}

/// All rows for `reference`'s month, by day ascending.
pub fn load_month(conn: &Connection, reference: NaiveDate) -> AppResult<Vec<DayRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM checkboxes
         WHERE year = ?1 AND month = ?2
         ORDER BY day ASC",
    )?;

    let rows = stmt.query_map(params![reference.year(), reference.month()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Bulk update of the month's checked flags, one entry per day.
///
/// Runs inside a transaction: either every update applies or the whole
/// persist fails and the table is left untouched.
pub fn persist_month(
    conn: &Connection,
    reference: NaiveDate,
    checked_by_day: &BTreeMap<u32, bool>,
) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "UPDATE checkboxes SET checked = ?1
             WHERE day = ?2 AND month = ?3 AND year = ?4",
        )?;

        for (day, checked) in checked_by_day {
            stmt.execute(params![
                i64::from(*checked),
                day,
                reference.month(),
                reference.year(),
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}
