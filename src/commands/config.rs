use std::path::Path;

use anyhow::Result;
use eventfinder_core::config::EventFinderConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventFinderConfig, explicit_path: Option<&Path>) -> Result<()> {
    let config_path = match explicit_path {
        Some(path) => path.to_path_buf(),
        None => EventFinderConfig::config_path()?,
    };

    println!("{}", "Paths".bold());
    println!("  Config:    {}", config_path.display());
    println!("  Database:  {}", config.database_path().display());
    if let Some(dir) = config.static_dir() {
        println!("  Pages:     {}", dir.display());
    }

    println!();
    println!("{}", "Server".bold());
    println!("  Address:   http://{}", config.bind_address());

    Ok(())
}
