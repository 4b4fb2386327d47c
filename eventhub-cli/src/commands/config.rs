use anyhow::Result;
use eventhub_core::config::{HubConfig, ViewMode};
use owo_colors::OwoColorize;

pub fn run(view: Option<&str>, organizer: Option<&str>) -> Result<()> {
    let config_path = HubConfig::config_path()?;
    let mut config = HubConfig::load()?;

    // --- Apply updates ---
    let changed = view.is_some() || organizer.is_some();

    if let Some(view) = view {
        config.default_view = view.parse::<ViewMode>().map_err(|e| anyhow::anyhow!(e))?;
    }

    if let Some(organizer) = organizer {
        config.organizer = if organizer.is_empty() {
            None
        } else {
            Some(organizer.to_string())
        };
    }

    if changed {
        config.save()?;
        println!("{}", "  Updated".green());
        println!();
    }

    // --- Show settings ---
    println!("{}", "Settings".bold());
    println!("  Config:        {}", config_path.display());
    println!("  Default view:  {}", config.default_view);
    println!(
        "  Organizer:     {}",
        config.organizer.as_deref().unwrap_or("(none)")
    );

    Ok(())
}
