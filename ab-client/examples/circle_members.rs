//! Circle member listing against a running backend
//!
//! Reads `AB_API_*` settings from the environment (or `.env`), optionally
//! logs in, then loads the member list and prints it.
//!
//! Run: AB_USERNAME=admin AB_PASSWORD=... cargo run --example circle_members

use ab_client::logging::init_logger;
use ab_client::{AdminClient, AuthStore, CircleMembersStore, ClientConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger("info", false);

    let config = ClientConfig::from_env()?;
    println!("\nCircle members @ {}", config.api_base());
    println!("=====================================\n");

    let client = AdminClient::from_config(&config)?;

    if let (Ok(username), Ok(password)) = (std::env::var("AB_USERNAME"), std::env::var("AB_PASSWORD")) {
        let auth = AuthStore::new(client.clone());
        let user = auth.login(&username, &password).await?;
        println!("Logged in as {} <{}>", user.full_name(), user.email);
    }

    let store = CircleMembersStore::new(client);
    let mut updates = store.subscribe();
    let watcher = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            tracing::debug!(
                members = state.members.len(),
                loading = state.is_loading,
                "State changed"
            );
        }
    });

    store.load_members().await;
    let state = store.state();
    if let Some(error) = state.error {
        anyhow::bail!("Failed to load circle members: {error}");
    }

    for member in &state.members {
        let status = if member.is_active { "active" } else { "inactive" };
        println!(
            "  #{:<4} {:<20} {:<24} {} ({})",
            member.id, member.username, member.display_name, member.role_name, status
        );
    }
    println!("\n{} member(s)", state.members.len());

    drop(store);
    watcher.await?;
    Ok(())
}
