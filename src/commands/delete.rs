use anyhow::Result;
use eventfinder_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(store: &dyn EventStore, id: i64) -> Result<()> {
    store.delete_event(id)?;
    println!("{}", format!("Event {id} deleted.").red());
    Ok(())
}
