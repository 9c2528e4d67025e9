//! Example: Upload a local file to a Supernote cloud folder
//!
//! Usage:
//!   cargo run --example upload -- --email YOUR_EMAIL --password YOUR_PASSWORD <LOCAL_FILE> [FOLDER_ID]

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};
use std::process;

const USAGE: &str = "Usage: cargo run --example upload -- [--email EMAIL] [--password PASSWORD] [--proxy PROXY] <LOCAL_FILE> [FOLDER_ID]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let creds = parse_credentials(USAGE);
    if creds.positionals.is_empty() || creds.positionals.len() > 2 {
        usage_and_exit(USAGE);
    }
    let local_file = &creds.positionals[0];
    let folder_id = creds.positionals.get(1).map(String::as_str);

    println!("Logging in...");
    let client = creds.client()?;
    let token = creds.login(&client).await?;

    println!("Uploading {} to {}...", local_file, folder_id.unwrap_or("(root)"));
    match client.upload_file(&token, local_file, folder_id).await {
        Ok(true) => println!("Upload complete!"),
        Ok(false) => {
            eprintln!("Upload rejected by the service");
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {:?}", e);
            process::exit(1);
        }
    }

    Ok(())
}
