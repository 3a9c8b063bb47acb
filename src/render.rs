//! Terminal rendering for eventfinder types.

use eventfinder_core::{Event, ListedEvent};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal output.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let location = match (self.place.is_empty(), self.district.is_empty()) {
            (false, false) => format!("{}, {}", self.place, self.district),
            (false, true) => self.place.clone(),
            (true, false) => self.district.clone(),
            (true, true) => String::new(),
        };

        format!(
            "{:>4} {} {} {} {} {}",
            self.id.dimmed(),
            self.name.bold(),
            format!("[{}]", self.category).cyan(),
            format!("{} {}", self.date, self.time).dimmed(),
            location,
            price_label(self.paid, self.price).yellow(),
        )
    }
}

impl Render for ListedEvent {
    fn render(&self) -> String {
        match self.distance_km {
            Some(km) => format!("{} {}", self.event.render(), format!("{km:.1} km").green()),
            None => self.event.render(),
        }
    }
}

pub fn price_label(paid: bool, price: f64) -> String {
    if paid {
        format!("Paid {price}")
    } else {
        "Free".to_string()
    }
}
