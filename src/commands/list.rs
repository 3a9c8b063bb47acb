use anyhow::Result;
use eventfinder_core::geo::{EventFilter, ListQuery, Observer, filter_and_sort};
use eventfinder_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(
    store: &dyn EventStore,
    lat: Option<f64>,
    lng: Option<f64>,
    radius: f64,
    district: Option<String>,
    place: Option<String>,
    category: Option<String>,
) -> Result<()> {
    if !radius.is_finite() || radius < 0.0 {
        anyhow::bail!("--radius must be a non-negative number of km");
    }

    let observer = Observer::from_parts(lat, lng);
    if observer.is_none() && (lat.is_some() || lng.is_some()) {
        eprintln!("{}", "Both --lat and --lng are needed to sort by distance".yellow());
    }

    let query = ListQuery {
        observer,
        radius_km: radius,
        filter: EventFilter::new(district.as_deref(), place.as_deref(), category.as_deref()),
    };

    let events = filter_and_sort(store.list_events(&query.filter)?, &query);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for event in &events {
        println!("{}", event.render());
    }

    Ok(())
}
