//! SQLite-backed event store.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Row, params};

use super::{EventStore, seed_events};
use crate::error::{EventFinderError, EventFinderResult};
use crate::event::{Category, Event, NewEvent};
use crate::geo::EventFilter;

const EVENT_COLUMNS: &str =
    "id, name, date, time, category, district, place, description, lat, lng, paid, price";

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database at `path`.
    ///
    /// Creates the events table if it is missing and, when `seed` is set,
    /// inserts the sample events into an empty table.
    pub fn open(path: &Path, seed: bool) -> EventFinderResult<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        tracing::info!(path = %path.display(), "opened event database");
        Self::from_connection(conn, seed)
    }

    pub fn open_in_memory(seed: bool) -> EventFinderResult<Self> {
        Self::from_connection(Connection::open_in_memory()?, seed)
    }

    fn from_connection(conn: Connection, seed: bool) -> EventFinderResult<Self> {
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        if seed {
            store.seed_if_empty()?;
        }
        Ok(store)
    }

    fn conn(&self) -> EventFinderResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| EventFinderError::StoreUnavailable("connection mutex poisoned".into()))
    }

    fn init_schema(&self) -> EventFinderResult<()> {
        self.conn()?.execute_batch(
            "CREATE TABLE IF NOT EXISTS events (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT    NOT NULL,
                date        TEXT    NOT NULL,
                time        TEXT    NOT NULL,
                category    TEXT    NOT NULL,
                district    TEXT    DEFAULT '',
                place       TEXT    DEFAULT '',
                description TEXT    DEFAULT '',
                lat         REAL    NOT NULL,
                lng         REAL    NOT NULL,
                paid        INTEGER DEFAULT 0,
                price       REAL    DEFAULT 0
            );",
        )?;
        Ok(())
    }

    fn seed_if_empty(&self) -> EventFinderResult<()> {
        if self.count()? > 0 {
            return Ok(());
        }

        let samples = seed_events();
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        for event in &samples {
            insert(&tx, event)?;
        }
        tx.commit()?;

        tracing::info!(count = samples.len(), "seeded sample events");
        Ok(())
    }
}

impl EventStore for SqliteStore {
    fn list_events(&self, filter: &EventFilter) -> EventFinderResult<Vec<Event>> {
        let mut sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE 1=1");
        let mut params: Vec<&dyn ToSql> = Vec::new();

        if let Some(district) = &filter.district {
            sql.push_str(" AND district = ?");
            params.push(district);
        }
        if let Some(place) = &filter.place {
            sql.push_str(" AND place = ?");
            params.push(place);
        }
        if let Some(category) = &filter.category {
            sql.push_str(" AND category = ?");
            params.push(category);
        }
        sql.push_str(" ORDER BY id");

        let conn = self.conn()?;
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params.as_slice(), row_to_event)?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    fn get_event(&self, id: i64) -> EventFinderResult<Event> {
        self.conn()?
            .query_row(
                &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"),
                params![id],
                row_to_event,
            )
            .optional()?
            .ok_or(EventFinderError::EventNotFound(id))
    }

    fn insert_event(&self, event: &NewEvent) -> EventFinderResult<i64> {
        let conn = self.conn()?;
        insert(&conn, event)?;
        Ok(conn.last_insert_rowid())
    }

    fn delete_event(&self, id: i64) -> EventFinderResult<()> {
        let removed = self
            .conn()?
            .execute("DELETE FROM events WHERE id = ?1", params![id])?;

        if removed == 0 {
            return Err(EventFinderError::EventNotFound(id));
        }
        Ok(())
    }

    fn count(&self) -> EventFinderResult<usize> {
        let count: i64 = self
            .conn()?
            .query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn insert(conn: &Connection, event: &NewEvent) -> rusqlite::Result<usize> {
    conn.execute(
        "INSERT INTO events (name, date, time, category, district, place, description, lat, lng, paid, price)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            event.name,
            event.date,
            event.time,
            event.category,
            event.district,
            event.place,
            event.description,
            event.lat,
            event.lng,
            event.paid,
            event.price,
        ],
    )
}

fn row_to_event(row: &Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        date: row.get(2)?,
        time: row.get(3)?,
        category: row.get(4)?,
        district: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        place: row.get::<_, Option<String>>(6)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
        lat: row.get(8)?,
        lng: row.get(9)?,
        paid: row.get::<_, Option<bool>>(10)?.unwrap_or(false),
        price: row.get::<_, Option<f64>>(11)?.unwrap_or(0.0),
    })
}

impl ToSql for Category {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Category {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let name = value.as_str()?;
        Category::parse(name)
            .ok_or_else(|| FromSqlError::Other(format!("unknown category '{name}'").into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_event(name: &str, category: Category, district: &str) -> NewEvent {
        NewEvent {
            name: name.to_string(),
            date: "March 10, 2026".to_string(),
            time: "7:00 PM".to_string(),
            category,
            district: district.to_string(),
            place: "Kochi".to_string(),
            description: String::new(),
            lat: 9.9312,
            lng: 76.2673,
            paid: true,
            price: 150.0,
        }
    }

    #[test]
    fn seeds_empty_database_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("events.db");

        let store = SqliteStore::open(&path, true).unwrap();
        assert_eq!(store.count().unwrap(), 15);
        drop(store);

        let reopened = SqliteStore::open(&path, true).unwrap();
        assert_eq!(reopened.count().unwrap(), 15);
    }

    #[test]
    fn seeding_can_be_disabled() {
        let store = SqliteStore::open_in_memory(false).unwrap();
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn insert_then_get_roundtrips_fields() {
        let store = SqliteStore::open_in_memory(false).unwrap();
        let new = new_event("Jazz Night", Category::Music, "Kozhikode");

        let id = store.insert_event(&new).unwrap();
        let stored = store.get_event(id).unwrap();

        assert_eq!(stored, new.with_id(id));
    }

    #[test]
    fn ids_are_assigned_in_increasing_order() {
        let store = SqliteStore::open_in_memory(false).unwrap();
        let first = store.insert_event(&new_event("A", Category::Art, "")).unwrap();
        let second = store.insert_event(&new_event("B", Category::Art, "")).unwrap();
        assert!(second > first);
    }

    #[test]
    fn get_missing_event_is_not_found() {
        let store = SqliteStore::open_in_memory(true).unwrap();
        assert!(matches!(
            store.get_event(9999),
            Err(EventFinderError::EventNotFound(9999))
        ));
    }

    #[test]
    fn delete_removes_event() {
        let store = SqliteStore::open_in_memory(true).unwrap();

        store.delete_event(1).unwrap();

        assert_eq!(store.count().unwrap(), 14);
        assert!(matches!(
            store.get_event(1),
            Err(EventFinderError::EventNotFound(1))
        ));
    }

    #[test]
    fn delete_missing_event_is_not_found() {
        let store = SqliteStore::open_in_memory(true).unwrap();
        assert!(matches!(
            store.delete_event(9999),
            Err(EventFinderError::EventNotFound(9999))
        ));
        assert_eq!(store.count().unwrap(), 15);
    }

    #[test]
    fn list_applies_exact_match_filters_in_id_order() {
        let store = SqliteStore::open_in_memory(true).unwrap();

        let all = store.list_events(&EventFilter::default()).unwrap();
        let ids: Vec<_> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, (1..=15).collect::<Vec<_>>());

        let filter = EventFilter::new(Some("Ernakulam"), Some("Kochi"), Some("Tech"));
        let names: Vec<_> = store
            .list_events(&filter)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["AI Conference", "Startup Meetup"]);
    }

    #[test]
    fn unknown_category_filter_matches_nothing() {
        let store = SqliteStore::open_in_memory(true).unwrap();
        let filter = EventFilter::new(None, None, Some("Opera"));
        assert!(store.list_events(&filter).unwrap().is_empty());
    }

    #[test]
    fn poisoned_connection_is_store_unavailable() {
        let store = std::sync::Arc::new(SqliteStore::open_in_memory(false).unwrap());
        let holder = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _conn = holder.conn.lock().unwrap();
            panic!("panic while holding the connection");
        })
        .join();

        assert!(matches!(
            store.count(),
            Err(EventFinderError::StoreUnavailable(_))
        ));
    }

    #[test]
    fn seeded_paid_flags_survive_storage() {
        let store = SqliteStore::open_in_memory(true).unwrap();
        let conference = store.get_event(3).unwrap();

        assert_eq!(conference.name, "AI Conference");
        assert!(conference.paid);
        assert_eq!(conference.price, 500.0);

        let concert = store.get_event(1).unwrap();
        assert!(!concert.paid);
        assert_eq!(concert.price, 0.0);
    }
}
