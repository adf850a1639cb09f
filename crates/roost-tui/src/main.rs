//! Roost TUI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Verify a phone number with the default 6-digit code
//! roost-tui --kind phone --contact +911234567890
//!
//! # Verify an email with a 4-digit code, logging to a file
//! roost-tui --kind email --contact user@example.com --length 4 \
//!     --expected-code 1234 --log-file roost.log --log-level debug
//! ```

use std::{
    fs::File,
    io::{self, Write},
    sync::Mutex,
};

use clap::{Parser, ValueEnum};
use roost_app::{FlowConfig, VerificationKind, VerificationTarget};
use roost_tui::{FixedCodeVerifier, Navigator, OtpFlow, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Contact kind accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    /// Email address (continues to personal details).
    Email,
    /// Phone number (continues to success).
    Phone,
}

impl From<Kind> for VerificationKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Email => Self::Email,
            Kind::Phone => Self::Phone,
        }
    }
}

/// Roost verification terminal UI
#[derive(Parser, Debug)]
#[command(name = "roost-tui")]
#[command(about = "Terminal UI for the Roost one-time code verification flow")]
#[command(version)]
struct Args {
    /// Kind of contact being verified
    #[arg(short, long, value_enum, default_value = "phone")]
    kind: Kind,

    /// Email address or phone number the code was sent to
    #[arg(short, long)]
    contact: String,

    /// Number of characters in the code
    #[arg(short, long, default_value_t = roost_app::DEFAULT_CODE_LENGTH)]
    length: usize,

    /// Code the in-process verifier accepts
    #[arg(long, default_value = "123456")]
    expected_code: String,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long)]
    log_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Install the global subscriber.
///
/// The terminal is in the alternate screen while the flow runs, so logs
/// never go to stdout/stderr.
fn init_tracing(args: &Args) -> io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
        },
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(io::sink))
                .with(filter)
                .init();
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args)?;

    let kind = VerificationKind::from(args.kind);
    let target = VerificationTarget::new(kind, args.contact);
    let flow = OtpFlow::new(target, FlowConfig::with_code_length(args.length))?;

    tracing::info!(%kind, masked = %flow.masked_display(), "starting verification");

    let driver = TerminalDriver::new()?;
    let verifier = FixedCodeVerifier::new(args.expected_code);
    let mut runtime = Runtime::new(driver, verifier, flow, Navigator::for_verification(kind));

    let outcome = runtime.run().await?;

    // Restore the terminal before reporting
    drop(runtime);
    writeln!(io::stdout(), "{outcome}")?;

    Ok(())
}
