use anyhow::Result;
use dialoguer::Input;
use eventhub_core::forms::RegistrationForm;
use eventhub_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::pluralize;
use crate::utils::tui::simulate_backend;

pub async fn run(
    store: &mut EventStore,
    id: &str,
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || email.is_none() || phone.is_none();

    {
        let Some(event) = store.get(id) else {
            let available: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
            anyhow::bail!("Event '{}' not found. Available: {}", id, available.join(", "));
        };

        if event.is_full() {
            anyhow::bail!("'{}' is fully booked", event.title);
        }

        println!(
            "  Registering for {} ({} {} left)",
            event.title.bold(),
            event.spots_left(),
            pluralize("spot", event.spots_left() as usize)
        );
    }

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };

    // --- Email ---
    let email = match email {
        Some(e) => e,
        None => Input::<String>::new()
            .with_prompt("  Email")
            .interact_text()?,
    };

    // --- Phone ---
    let phone = match phone {
        Some(p) => p,
        None => Input::<String>::new()
            .with_prompt("  Phone")
            .interact_text()?,
    };

    let form = RegistrationForm { name, email, phone };

    if let Err(errors) = form.validate() {
        for error in &errors {
            eprintln!("  {}", error.message.red());
        }
        anyhow::bail!("Registration not submitted");
    }

    simulate_backend("  Registering").await;

    let event = store.register(id, form)?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Registered for: {}", event.title).green()
    );
    println!(
        "  {}",
        format!(
            "You're attendee {} of {}. A confirmation email is on its way.",
            event.attendees, event.capacity
        )
        .dimmed()
    );

    Ok(())
}
