//! Example: Login to a Supernote cloud account
//!
//! Usage:
//!   cargo run --example login -- --email YOUR_EMAIL --password YOUR_PASSWORD [--proxy PROXY]

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};

const USAGE: &str =
    "Usage: cargo run --example login -- [--email EMAIL] [--password PASSWORD] [--proxy PROXY]";

#[tokio::main]
async fn main() {
    init_tracing();
    let creds = parse_credentials(USAGE);
    if !creds.positionals.is_empty() {
        usage_and_exit(USAGE);
    }

    println!("Logging in as: {}", creds.email);

    let client = match creds.client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            std::process::exit(1);
        }
    };

    match client.login(&creds.email, &creds.password).await {
        Ok(Some(token)) => {
            println!("Login successful!");
            println!("Token: {}...", &token[..token.len().min(12)]);
        }
        Ok(None) => {
            eprintln!("Login rejected");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Login failed: {}", e);
            std::process::exit(1);
        }
    }
}
