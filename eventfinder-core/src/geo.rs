//! Distance filtering and nearest-first ordering of events.

use crate::error::{EventFinderError, EventFinderResult};
use crate::event::{Event, ListedEvent};

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two lat/lng points.
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lng2 - lng1).to_radians();

    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Round a distance to one decimal place for display.
pub fn round_km(distance: f64) -> f64 {
    (distance * 10.0).round() / 10.0
}

/// The caller's location, against which distances are measured
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub lat: f64,
    pub lng: f64,
}

impl Observer {
    /// Only a complete lat/lng pair makes an observer.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Observer { lat, lng }),
            _ => None,
        }
    }

    pub fn distance_to(&self, event: &Event) -> f64 {
        haversine_km(self.lat, self.lng, event.lat, event.lng)
    }
}

/// Exact-match filters on district, place and category.
/// `None` means no filter on that field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub district: Option<String>,
    pub place: Option<String>,
    pub category: Option<String>,
}

impl EventFilter {
    /// Build a filter from raw values. Blank values mean "no filter".
    pub fn new(district: Option<&str>, place: Option<&str>, category: Option<&str>) -> Self {
        EventFilter {
            district: non_blank(district),
            place: non_blank(place),
            category: non_blank(category),
        }
    }

    pub fn matches(&self, event: &Event) -> bool {
        field_matches(&self.district, &event.district)
            && field_matches(&self.place, &event.place)
            && field_matches(&self.category, event.category.as_str())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn field_matches(filter: &Option<String>, value: &str) -> bool {
    filter.as_deref().is_none_or(|f| f == value)
}

/// Everything a listing request can ask for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub observer: Option<Observer>,
    /// 0 means no radius limit
    pub radius_km: f64,
    pub filter: EventFilter,
}

impl ListQuery {
    /// Parse the raw `lat`, `lng` and `radius` values of a listing request.
    ///
    /// A value that is present must be a finite number; the radius must also
    /// be non-negative. A missing radius means no limit.
    pub fn from_raw(
        lat: Option<&str>,
        lng: Option<&str>,
        radius: Option<&str>,
        filter: EventFilter,
    ) -> EventFinderResult<Self> {
        let lat = lat.map(parse_number).transpose()?;
        let lng = lng.map(parse_number).transpose()?;
        let radius_km = radius.map(parse_number).transpose()?.unwrap_or(0.0);

        if radius_km < 0.0 {
            return Err(EventFinderError::MalformedInput(
                "radius must not be negative".to_string(),
            ));
        }

        Ok(ListQuery {
            observer: Observer::from_parts(lat, lng),
            radius_km,
            filter,
        })
    }
}

fn parse_number(raw: &str) -> EventFinderResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| {
            EventFinderError::MalformedInput("lat, lng and radius must be numbers".to_string())
        })
}

/// Filter, measure and order events for a listing response.
///
/// With an observer, events farther than `radius_km` are dropped (an event
/// exactly on the radius is kept) and the rest are sorted nearest-first, ties
/// broken by ascending id. Without an observer the input order is preserved
/// and no distance is attached.
pub fn filter_and_sort(events: Vec<Event>, query: &ListQuery) -> Vec<ListedEvent> {
    let candidates = events.into_iter().filter(|e| query.filter.matches(e));

    let Some(observer) = query.observer else {
        return candidates.map(ListedEvent::from).collect();
    };

    let mut measured: Vec<(f64, Event)> = candidates
        .map(|event| (observer.distance_to(&event), event))
        .filter(|(distance, _)| !(query.radius_km > 0.0 && *distance > query.radius_km))
        .collect();

    measured.sort_by(|(da, a), (db, b)| da.total_cmp(db).then_with(|| a.id.cmp(&b.id)));

    measured
        .into_iter()
        .map(|(distance, event)| ListedEvent {
            event,
            distance_km: Some(round_km(distance)),
        })
        .collect()
}
