//! Clack terminal client binary.
//!
//! # Usage
//!
//! ```bash
//! # Plain text session
//! clack --username alice
//!
//! # Encrypt text payloads with a shift of 7
//! clack --username alice --key 7 --download-dir ./downloads
//! ```

use std::{io, path::PathBuf};

use clack_app::{
    DEFAULT_SERVER_NAME, DEFAULT_SERVER_PORT, DEFAULT_USERNAME, Runtime, SessionConfig,
};
use clack_cli::TerminalDriver;
use clack_core::SystemEnv;
use clack_crypto::{CipherConfig, DEFAULT_ALPHABET};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Clack chat client
#[derive(Parser, Debug)]
#[command(name = "clack")]
#[command(about = "Line-oriented chat client for the Clack protocol")]
#[command(version)]
struct Args {
    /// Name stamped on outgoing messages
    #[arg(short, long, default_value = DEFAULT_USERNAME)]
    username: String,

    /// Server host
    #[arg(short, long, default_value = DEFAULT_SERVER_NAME)]
    server: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_SERVER_PORT)]
    port: u16,

    /// Cipher key; enables text encryption when given
    #[arg(short, long, allow_negative_numbers = true)]
    key: Option<i64>,

    /// Cipher alphabet
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    alphabet: String,

    /// Directory received files are written to
    #[arg(short, long, default_value = ".")]
    download_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            username: self.username.clone(),
            server_name: self.server.clone(),
            server_port: self.port,
            download_dir: self.download_dir.clone(),
            cipher: self.key.map(|key| CipherConfig { key, alphabet: self.alphabet.clone() }),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)).with(filter).init();

    let config = args.session_config();
    tracing::info!(%config, "starting session");

    let driver = TerminalDriver::new(io::stdin().lock(), io::stdout().lock());
    let mut runtime = Runtime::new(driver, SystemEnv, &config)?;

    Ok(runtime.run()?)
}
