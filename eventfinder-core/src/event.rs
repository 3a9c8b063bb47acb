//! Community event types.
//!
//! `Event` is the stored shape, `NewEvent` is what intake produces before the
//! store assigns an identifier, and `ListedEvent` is the response shape that
//! carries the request-scoped distance from the observer.

use std::fmt;

use serde::Serialize;

/// A stored community event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    /// Assigned by the store on creation, never changes afterwards
    pub id: i64,
    pub name: String,
    /// Canonical form: "March 10, 2026"
    pub date: String,
    /// Canonical form: "7:00 PM"
    pub time: String,
    pub category: Category,
    pub district: String,
    pub place: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub paid: bool,
    /// Always 0 when `paid` is false
    pub price: f64,
}

/// A validated event that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub time: String,
    pub category: Category,
    pub district: String,
    pub place: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
    pub paid: bool,
    pub price: f64,
}

impl NewEvent {
    /// Attach the identifier the store assigned.
    pub fn with_id(self, id: i64) -> Event {
        Event {
            id,
            name: self.name,
            date: self.date,
            time: self.time,
            category: self.category,
            district: self.district,
            place: self.place,
            description: self.description,
            lat: self.lat,
            lng: self.lng,
            paid: self.paid,
            price: self.price,
        }
    }
}

/// An event as returned to clients.
///
/// `distance_km` is only set when the caller supplied an observer location and
/// is serialized as `null` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub distance_km: Option<f64>,
}

impl From<Event> for ListedEvent {
    fn from(event: Event) -> Self {
        ListedEvent {
            event,
            distance_km: None,
        }
    }
}

/// Event category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Music,
    Tech,
    Sports,
    Art,
    Dance,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Music,
        Category::Tech,
        Category::Sports,
        Category::Art,
        Category::Dance,
    ];

    /// Case-sensitive exact match against the category names.
    pub fn parse(s: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Music => "Music",
            Category::Tech => "Tech",
            Category::Sports => "Sports",
            Category::Art => "Art",
            Category::Dance => "Dance",
        }
    }

    /// Category names in alphabetical order, for error messages.
    pub fn allowed() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::ALL.iter().map(Category::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
