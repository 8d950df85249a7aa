use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use osctap_core::{Argument, DecodeError, Message, MessageSink, TimeTag, UdpSource};

const DEFAULT_PORT: u16 = 9000;

#[derive(Parser, Debug)]
#[command(name = "osctap")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("OSCTAP_BUILD_COMMIT"), " ", env!("OSCTAP_BUILD_DATE"), ")"
))]
#[command(
    about = "Listen for OSC over UDP and print each decoded message.",
    long_about = None,
    after_help = "Examples:\n  osctap\n  osctap 9001\n  osctap 9001 --json\n  osctap --timeout-ms 250"
)]
struct Cli {
    /// UDP port to listen on
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Bound (milliseconds) on each wait for readability; the stop signal
    /// is re-checked at least this often
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_ms: u64,

    /// Print one JSON object per message instead of plain text
    #[arg(long)]
    json: bool,

    /// Suppress the startup banner
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match listen(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn listen(cli: Cli) -> Result<(), CliError> {
    if cli.port < 1024 {
        eprintln!(
            "warning: port {} is in the reserved range (0-1023)",
            cli.port
        );
    }

    let stop = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&stop))
        .context("Failed to install SIGINT handler")?;
    #[cfg(unix)]
    signal_hook::flag::register(signal_hook::consts::SIGTERM, Arc::clone(&stop))
        .context("Failed to install SIGTERM handler")?;

    let mut source = UdpSource::bind(cli.port, Duration::from_millis(cli.timeout_ms)).map_err(
        |err| {
            CliError::new(
                format!("failed to bind UDP port {}: {}", cli.port, err),
                Some("is another process bound to this port?".to_string()),
            )
        },
    )?;

    if !cli.quiet {
        let port = source
            .local_addr()
            .map(|addr| addr.port())
            .unwrap_or(cli.port);
        eprintln!("osctap {} listening on port {}", env!("CARGO_PKG_VERSION"), port);
    }

    let mut sink = ConsoleSink { json: cli.json };
    osctap_core::run(&mut source, &mut sink, &stop)
        .map_err(|err| CliError::new(format!("receive failed: {err}"), None))?;

    if !cli.quiet {
        eprintln!("osctap: stopped");
    }
    Ok(())
}

/// Renders each decoded message to stdout; errors go to stderr.
struct ConsoleSink {
    json: bool,
}

#[derive(Serialize)]
struct MessageRecord<'a> {
    timetag: TimeTag,
    immediate: bool,
    address: &'a str,
    type_tags: &'a str,
    arguments: &'a [Argument],
}

impl MessageSink for ConsoleSink {
    fn on_message(&mut self, timetag: TimeTag, message: &Message) {
        if self.json {
            let record = MessageRecord {
                timetag,
                immediate: timetag.is_immediate(),
                address: &message.address,
                type_tags: &message.type_tags,
                arguments: &message.arguments,
            };
            match serde_json::to_string(&record) {
                Ok(line) => println!("{line}"),
                Err(err) => eprintln!("serialization error: {err}"),
            }
            return;
        }

        let mut line = format!("{timetag} {} ,{}", message.address, message.type_tags);
        for argument in &message.arguments {
            line.push(' ');
            line.push_str(&argument.to_string());
        }
        println!("{line}");
    }

    fn on_decode_error(&mut self, error: &DecodeError) {
        eprintln!("decode error: {error}");
    }
}
