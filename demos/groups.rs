//! Lists the groups of an instance and prints their admins and invite links.
//!
//! Run with: `cargo run --example groups -- <instance>`

use evolution_client::{Client, ClientOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("evolution_client=info")
        .init();

    let Some(instance) = std::env::args().nth(1) else {
        eprintln!("usage: groups <instance>");
        std::process::exit(2);
    };

    let client = Client::from_options(&ClientOptions::from_env()?)?;
    let groups = client.groups();

    let all = groups.fetch_all_groups(&instance, true).await?;
    println!("{} groups on {}", all.len(), instance);

    for group in &all {
        println!();
        println!("{} ({})", group.subject, group.id);
        if let Some(size) = group.size {
            println!("  Members: {}", size);
        }
        if let Some(desc) = &group.desc {
            println!("  Description: {}", desc);
        }

        let admins: Vec<&str> = group
            .participants
            .iter()
            .filter(|p| p.is_admin())
            .map(|p| p.id.as_str())
            .collect();
        println!("  Admins: {}", admins.join(", "));

        // Only admins can read the invite code.
        match groups.invite_code(&instance, &group.id).await {
            Ok(invite) => println!("  Invite: {}", invite.invite_url),
            Err(e) => println!("  Invite unavailable: {}", e),
        }
    }

    Ok(())
}
