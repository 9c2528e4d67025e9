//! Example: List a folder in a Supernote cloud account
//!
//! Usage:
//!   cargo run --example ls -- --email YOUR_EMAIL --password YOUR_PASSWORD [FOLDER_ID]

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example ls -- [--email EMAIL] [--password PASSWORD] [--proxy PROXY] [FOLDER_ID]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let creds = parse_credentials(USAGE);
    if creds.positionals.len() > 1 {
        usage_and_exit(USAGE);
    }
    let folder_id = creds.positionals.first().map(String::as_str);

    let client = creds.client()?;
    let token = creds.login(&client).await?;

    println!("\nListing: {}\n", folder_id.unwrap_or("(root)"));

    match client.list_folder(&token, folder_id).await? {
        Some(entries) if entries.is_empty() => println!("  (empty)"),
        Some(entries) => {
            for entry in entries {
                let kind = if entry.is_folder() { "dir " } else { "file" };
                let size = if entry.is_file() {
                    format_size(entry.size)
                } else {
                    String::new()
                };
                println!("  {} {:<24} {} {}", kind, entry.id, entry.file_name, size);
            }
        }
        None => {
            eprintln!("Failed to list folder");
            std::process::exit(1);
        }
    }

    Ok(())
}

fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{}B", bytes)
    } else if bytes < 1_048_576 {
        format!("{:.1}KB", bytes as f64 / 1024.0)
    } else if bytes < 1_073_741_824 {
        format!("{:.1}MB", bytes as f64 / 1_048_576.0)
    } else {
        format!("{:.2}GB", bytes as f64 / 1_073_741_824.0)
    }
}
