//! Address Book - demonstration entry point
//!
//! Builds a shared address book system, runs a short scripted session
//! against it and prints the results to stdout.

use address_book::{
    AddressBookService, AddressBookServiceImpl, Config, ContactDetails, ContactPatch, ContactQuery,
    SortKey,
};
use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn details(first: &str, last: &str, city: &str, state: &str, email: &str) -> ContactDetails {
    ContactDetails {
        first_name: first.to_string(),
        last_name: last.to_string(),
        address: "123 Main Street".to_string(),
        city: city.to_string(),
        state: state.to_string(),
        zip: "10001".to_string(),
        phone: "1234567890".to_string(),
        email: email.to_string(),
    }
}

async fn run(config: &Config) -> Result<()> {
    let service = AddressBookServiceImpl::new(config);

    service.create_address_book(&config.default_book_name).await?;
    service.create_address_book("Work").await?;

    service
        .add_contact(
            "Work",
            details("John", "Doe", "New York", "Newyork", "john.doe@example.com"),
        )
        .await?;
    service
        .add_contact(
            "Work",
            details("Amy", "Lee", "Boston", "Massachusetts", "amy.lee@example.com"),
        )
        .await?;
    service
        .add_contact(
            &config.default_book_name,
            details("Jane", "Roe", "new york", "Newyork", "jane.roe@example.com"),
        )
        .await?;

    if let Err(e) = service
        .add_contact(
            "Work",
            details("John", "Doe", "Austin", "Texas", "jdoe@example.com"),
        )
        .await
    {
        println!("Rejected: {}", e);
    }

    let patch = ContactPatch {
        phone: Some("9876543210".to_string()),
        ..Default::default()
    };
    let updated = service.update_contact("Work", "John", patch).await?;
    println!("Updated: {}", updated);

    service.sort_contacts("Work", SortKey::FirstName).await?;
    println!("Work contacts:");
    for contact in service.list_contacts("Work").await? {
        println!("  {}", contact);
    }

    println!("In New York:");
    for (book, contact) in service.search_by_city("New York").await {
        println!("  [{}] {}", book, contact.full_name());
    }

    let matches = service.search("Work", ContactQuery::by_name("Jon")).await?;
    println!("Search 'Jon': {} match(es)", matches.len());

    service.remove_contact("Work", "Doe").await?;
    service.remove_contact("Work", "Amy").await?;
    println!(
        "Work contacts after removal: {}",
        service.list_contacts("Work").await?.len()
    );

    let snapshot = service.snapshot().await;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize logging (stderr only so stdout carries the demo output)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting address book demo with default book '{}'",
        config.default_book_name
    );

    if let Err(e) = run(&config).await {
        error!("Demo failed: {}", e);
        eprintln!("Error: {}", e);
        return Err(e);
    }

    info!("Address book demo complete");
    Ok(())
}
