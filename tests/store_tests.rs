//! Day-store tests: seeding, idempotence, round trip. All run against an
//! in-memory SQLite database.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rusqlite::Connection;
use streakcal::db::initialize::init_db;
use streakcal::db::queries::{ensure_month_seeded, load_month, month_is_seeded, persist_month};
use streakcal::models::month::MonthView;

fn mem_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    init_db(&conn).expect("init schema");
    conn
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn seeding_inserts_one_row_per_day() {
    let conn = mem_db();
    let today = d(2025, 6, 15);

    ensure_month_seeded(&conn, today).unwrap();

    let rows = load_month(&conn, today).unwrap();
    assert_eq!(rows.len(), 30);
    for (i, rec) in rows.iter().enumerate() {
        assert_eq!(rec.day, i as u32 + 1);
        assert_eq!(rec.month, 6);
        assert_eq!(rec.year, 2025);
        assert_eq!(rec.full_date, d(2025, 6, rec.day));
    }
}

#[test]
fn seeding_prechecks_days_before_today() {
    let conn = mem_db();
    let today = d(2025, 6, 15);

    ensure_month_seeded(&conn, today).unwrap();

    let rows = load_month(&conn, today).unwrap();
    for rec in &rows {
        assert_eq!(rec.checked, rec.day < 15, "day {}", rec.day);
    }
}

#[test]
fn seeding_on_the_first_checks_nothing() {
    let conn = mem_db();
    let today = d(2025, 6, 1);

    ensure_month_seeded(&conn, today).unwrap();

    let rows = load_month(&conn, today).unwrap();
    assert!(rows.iter().all(|r| !r.checked));
}

#[test]
fn seeding_twice_changes_nothing() {
    let conn = mem_db();
    let today = d(2025, 6, 15);

    ensure_month_seeded(&conn, today).unwrap();
    let first = load_month(&conn, today).unwrap();

    ensure_month_seeded(&conn, today).unwrap();
    let second = load_month(&conn, today).unwrap();

    assert_eq!(first, second);
}

#[test]
fn months_are_keyed_by_year_and_month() {
    let conn = mem_db();

    ensure_month_seeded(&conn, d(2025, 6, 15)).unwrap();
    ensure_month_seeded(&conn, d(2026, 6, 10)).unwrap();

    assert!(month_is_seeded(&conn, d(2025, 6, 1)).unwrap());
    assert!(month_is_seeded(&conn, d(2026, 6, 1)).unwrap());
    assert!(!month_is_seeded(&conn, d(2024, 6, 1)).unwrap());

    // June 2026 rows do not leak into June 2025
    let rows_2025 = load_month(&conn, d(2025, 6, 20)).unwrap();
    assert_eq!(rows_2025.len(), 30);
    assert!(rows_2025.iter().all(|r| r.year == 2025));
}

#[test]
fn persist_then_reload_round_trips() {
    let conn = mem_db();
    let today = d(2025, 6, 15);
    ensure_month_seeded(&conn, today).unwrap();

    // truncate the streak to 9 and extend nothing
    let flags: BTreeMap<u32, bool> = (1..=30).map(|day| (day, day <= 9)).collect();
    persist_month(&conn, today, &flags).unwrap();

    let rows = load_month(&conn, today).unwrap();
    for rec in &rows {
        assert_eq!(rec.checked, flags[&rec.day], "day {}", rec.day);
    }

    let view = MonthView::new(rows, 30);
    assert_eq!(view.streak_len(), 9);
    assert!(view.holds_streak_invariant());
}

#[test]
fn seeded_month_satisfies_the_streak_invariant() {
    let conn = mem_db();
    let today = d(2025, 6, 15);
    ensure_month_seeded(&conn, today).unwrap();

    let view = MonthView::new(load_month(&conn, today).unwrap(), 30);
    assert_eq!(view.streak_len(), 14);
    assert!(view.holds_streak_invariant());
}
