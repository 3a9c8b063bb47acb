use anyhow::Result;
use eventfinder_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::price_label;

pub fn run(store: &dyn EventStore, id: i64) -> Result<()> {
    let event = store.get_event(id)?;

    println!("{}", event.name.bold());
    println!("  {:<12}{} {}", "When:".dimmed(), event.date, event.time);
    println!("  {:<12}{}", "Category:".dimmed(), event.category);
    if !event.place.is_empty() || !event.district.is_empty() {
        println!("  {:<12}{}, {}", "Where:".dimmed(), event.place, event.district);
    }
    println!("  {:<12}{:.4}, {:.4}", "Location:".dimmed(), event.lat, event.lng);
    println!("  {:<12}{}", "Entry:".dimmed(), price_label(event.paid, event.price));
    if !event.description.is_empty() {
        println!();
        println!("  {}", event.description);
    }

    Ok(())
}
