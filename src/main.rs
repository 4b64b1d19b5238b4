//! Command-line entry point.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use teleprompter::{CrosstermKeys, FileWrapper, PrompterConfig, Session, TerminalGuard};

/// Stream a text file to the terminal word by word.
///
/// While playing: `>` speeds up, `<` slows down, `x` stops.
#[derive(Parser, Debug)]
#[command(name = "teleprompter", version)]
struct Cli {
    /// Text file to play.
    #[arg(default_value = "sampleQuotes.txt")]
    file: PathBuf,

    /// Starting delay between words, in milliseconds.
    #[arg(long, default_value_t = 200)]
    delay: u32,

    /// Column budget before a line is wrapped.
    #[arg(long, default_value_t = teleprompter::text::DEFAULT_WRAP_WIDTH)]
    wrap: usize,

    /// Block on key reads instead of polling for the end of playback.
    #[arg(long)]
    blocking_input: bool,
}

impl Cli {
    fn config(&self) -> PrompterConfig {
        let defaults = PrompterConfig::default();
        PrompterConfig {
            initial_delay_ms: self.delay,
            wrap_width: self.wrap,
            input_poll_timeout: if self.blocking_input {
                None
            } else {
                defaults.input_poll_timeout
            },
            ..defaults
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.config();
    let raw_mode = config.raw_mode;
    let session = Session::with_config(config)?;
    let tokens = FileWrapper::open(&cli.file, session.config().wrap_width)?;

    let report = {
        let _terminal = TerminalGuard::enter(raw_mode)?;
        session.run(tokens, io::stdout(), CrosstermKeys::new())?
    };

    println!();
    log::info!(
        "stopped by the {} loop at {}ms per word",
        report.ended_by,
        report.final_delay_ms
    );
    Ok(())
}
