use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::VitalsRecord;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Insert a vitals reading.
pub fn insert_vitals(conn: &Connection, record: &VitalsRecord) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO vitals (id, user_id, bp, pulse, sugar, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.id.to_string(),
            record.user_id,
            record.bp,
            record.pulse,
            record.sugar,
            record.created_at.format(DATETIME_FORMAT).to_string(),
        ],
    )?;
    Ok(())
}

/// All readings for one user, oldest first.
pub fn get_user_vitals(conn: &Connection, user_id: &str) -> Result<Vec<VitalsRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, bp, pulse, sugar, created_at
         FROM vitals
         WHERE user_id = ?1
         ORDER BY created_at ASC, rowid ASC",
    )?;
    let rows = stmt.query_map(params![user_id], row_to_vitals)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(DatabaseError::from)
}

/// Most recently inserted reading across all users.
pub fn get_latest_vitals(conn: &Connection) -> Result<Option<VitalsRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, bp, pulse, sugar, created_at
         FROM vitals
         ORDER BY rowid DESC
         LIMIT 1",
    )?;
    let mut rows = stmt.query_map([], row_to_vitals)?;
    match rows.next() {
        Some(row) => Ok(Some(row?)),
        None => Ok(None),
    }
}

fn row_to_vitals(row: &rusqlite::Row) -> Result<VitalsRecord, rusqlite::Error> {
    let id_str: String = row.get(0)?;
    let created_str: String = row.get(5)?;

    Ok(VitalsRecord {
        id: Uuid::parse_str(&id_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })?,
        user_id: row.get(1)?,
        bp: row.get(2)?,
        pulse: row.get(3)?,
        sugar: row.get(4)?,
        created_at: NaiveDateTime::parse_from_str(&created_str, DATETIME_FORMAT).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?,
    })
}
