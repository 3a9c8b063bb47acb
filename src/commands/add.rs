use anyhow::Result;
use eventfinder_core::intake::validate_and_normalize;
use eventfinder_core::store::EventStore;
use owo_colors::OwoColorize;
use serde_json::{Value, json};

use crate::render::Render;

/// Event details as given on the command line
pub struct Submission {
    pub name: String,
    pub date: String,
    pub time: String,
    pub category: String,
    pub lat: f64,
    pub lng: f64,
    pub district: Option<String>,
    pub place: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl Submission {
    /// The same payload shape the HTTP form submits, so both go through intake.
    fn to_payload(&self) -> Value {
        json!({
            "name": self.name,
            "date": self.date,
            "time": self.time,
            "category": self.category,
            "lat": self.lat,
            "lng": self.lng,
            "district": self.district,
            "place": self.place,
            "description": self.description,
            "paid": self.price.is_some(),
            "price": self.price,
        })
    }
}

pub fn run(store: &dyn EventStore, submission: Submission) -> Result<()> {
    let event = validate_and_normalize(&submission.to_payload())?;
    let id = store.insert_event(&event)?;

    println!("{} {}", "Added event".green(), id.to_string().bold());
    println!("{}", event.with_id(id).render());

    Ok(())
}
