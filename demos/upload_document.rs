//! Example: Upload a file into the "Document" folder
//!
//! Credentials come from SUPERNOTE_CLOUD_EMAIL and SUPERNOTE_CLOUD_PASSWORD.
//!
//! Usage:
//!   cargo run --example upload_document -- <LOCAL_FILE>

mod cli;

use cli::{init_tracing, parse_credentials, usage_and_exit};

const USAGE: &str = "Usage: cargo run --example upload_document -- <LOCAL_FILE>";
const DOCUMENT_FOLDER: &str = "Document";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let creds = parse_credentials(USAGE);
    let [local_file] = creds.positionals.as_slice() else {
        usage_and_exit(USAGE);
    };

    let client = creds.client()?;
    let token = creds.login(&client).await?;

    let Some(folder) = client.find_entry(&token, None, DOCUMENT_FOLDER).await? else {
        eprintln!("No \"{}\" folder in the cloud root", DOCUMENT_FOLDER);
        std::process::exit(1);
    };

    let ok = client.upload_file(&token, local_file, Some(&folder.id)).await?;
    println!("Uploaded {} to {}: {}", local_file, DOCUMENT_FOLDER, ok);

    Ok(())
}
