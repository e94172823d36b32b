//! DrishtiClient - subscribe to a detection server and print its stream
//!
//! Connects over TCP, reads length-prefixed detection-list frames, and
//! renders each one to stdout. The session ends when the server closes the
//! connection, on the first fatal framing error, or on Ctrl-C.

use clap::Parser;
use drishti_client::error::{Error, Result};
use drishti_client::session::Session;
use drishti_client::streaming::WireFormat;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Subscribe to and print an object-detection stream"
)]
struct Args {
    /// Host address of the detection server
    #[arg(short = 'a', long)]
    address: String,

    /// Host port of the detection server
    #[arg(short = 'p', long)]
    port: u16,

    /// Payload wire format used by the server
    #[arg(long, default_value = "postcard")]
    wire: WireFormat,

    /// Optional read timeout in seconds (blocking reads when omitted)
    #[arg(long)]
    read_timeout: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let endpoint = format!("{}:{}", args.address, args.port);

    log::info!("Connecting to detection server at {}", endpoint);
    let mut session = Session::connect(endpoint.as_str(), args.wire)?;
    log::info!("Connected to server (wire format: {})", args.wire);

    if let Some(secs) = args.read_timeout {
        session.set_read_timeout(Some(Duration::from_secs(secs)))?;
    }

    // Ctrl-C shuts the socket down out-of-band; the blocking read then
    // observes end-of-stream and the session winds down cleanly.
    let shutdown = session.shutdown_handle()?;
    ctrlc::set_handler(move || {
        log::info!("Received shutdown signal");
        shutdown.shutdown();
    })
    .map_err(|e| Error::Other(format!("Error setting Ctrl-C handler: {}", e)))?;

    let summary = session.run(|report| println!("{}", report))?;

    log::info!(
        "Session ended: {} detection lists received, {} payloads discarded",
        summary.frames,
        summary.decode_failures
    );

    Ok(())
}
