use std::env;
use std::process;

use supernote_cloud::CloudClient;
use tracing_subscriber::{EnvFilter, fmt};

pub const EMAIL_VAR: &str = "SUPERNOTE_CLOUD_EMAIL";
pub const PASSWORD_VAR: &str = "SUPERNOTE_CLOUD_PASSWORD";

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{usage}");
    process::exit(1);
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("supernote_cloud=debug"));
    fmt().with_env_filter(filter).with_target(false).init();
}

pub struct ArgParser {
    args: Vec<String>,
    usage: &'static str,
}

impl ArgParser {
    pub fn new(usage: &'static str) -> Self {
        let args: Vec<String> = env::args().skip(1).collect();

        if args.iter().any(|a| a == "--help" || a == "-h") {
            println!("{usage}");
            process::exit(0);
        }

        Self { args, usage }
    }

    /// Remove `--flag VALUE` for the first matching flag name and return VALUE.
    pub fn take_value(&mut self, names: &[&str]) -> Option<String> {
        let pos = self.args.iter().position(|a| names.contains(&a.as_str()))?;
        if pos + 1 >= self.args.len() {
            usage_and_exit(self.usage);
        }
        let mut taken = self.args.drain(pos..=pos + 1);
        taken.nth(1)
    }

    pub fn remaining(self) -> Vec<String> {
        self.args
    }
}

pub struct Credentials {
    pub email: String,
    pub password: String,
    pub proxy: Option<String>,
    pub positionals: Vec<String>,
}

/// Read credentials from `--email`/`--password`, falling back to the
/// `SUPERNOTE_CLOUD_EMAIL`/`SUPERNOTE_CLOUD_PASSWORD` environment variables.
pub fn parse_credentials(usage: &'static str) -> Credentials {
    let mut parser = ArgParser::new(usage);
    let email = parser
        .take_value(&["--email", "-e"])
        .or_else(|| env::var(EMAIL_VAR).ok())
        .filter(|v| !v.is_empty());
    let password = parser
        .take_value(&["--password", "-p"])
        .or_else(|| env::var(PASSWORD_VAR).ok())
        .filter(|v| !v.is_empty());
    let proxy = parser.take_value(&["--proxy"]);

    let (Some(email), Some(password)) = (email, password) else {
        eprintln!("Missing email or password ({EMAIL_VAR} / {PASSWORD_VAR})");
        usage_and_exit(usage);
    };

    Credentials {
        email,
        password,
        proxy,
        positionals: parser.remaining(),
    }
}

impl Credentials {
    pub fn client(&self) -> supernote_cloud::Result<CloudClient> {
        match &self.proxy {
            Some(proxy) => CloudClient::with_proxy(proxy),
            None => Ok(CloudClient::new()),
        }
    }

    /// Log in, exiting the process if the service rejects the credentials.
    #[allow(dead_code)] // Some demos only need the client.
    pub async fn login(&self, client: &CloudClient) -> supernote_cloud::Result<String> {
        match client.login(&self.email, &self.password).await? {
            Some(token) => Ok(token),
            None => {
                eprintln!("Login rejected for {}", self.email);
                process::exit(1);
            }
        }
    }
}
