//! CLI entry point.
//!
//! # Responsibility
//! - Build a `SessionConfig` from an optional JSON file plus flag overrides.
//! - Start a session and drive it with line commands read from stdin.
//!
//! # Invariants
//! - Logging setup failure is reported on stderr but never stops the session.

mod command;

use clap::Parser;
use shoplist_core::{
    init_logging_from, parse_id_allocation, start_session, IdAllocation, Navigator,
    SessionConfig,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use command::{execute, parse_command, Command};

#[derive(Parser)]
#[command(name = "shoplist")]
#[command(about = "Shared shopping lists with owner and guest roles", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed document with a top-level `shoppingLists` array
    #[arg(short, long)]
    seed: Option<PathBuf>,

    /// Absolute directory for rolling log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    /// Id allocation policy: count or monotonic
    #[arg(long, value_parser = parse_id_allocation)]
    id_allocation: Option<IdAllocation>,
}

impl Cli {
    fn session_config(&self) -> Result<SessionConfig, String> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path).map_err(|err| err.to_string())?,
            None => SessionConfig::default(),
        };
        if let Some(seed) = &self.seed {
            config.seed_path = Some(seed.clone());
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(policy) = self.id_allocation {
            config.id_allocation = policy;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.session_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging_from(&config) {
        eprintln!("warning: logging disabled: {err}");
    }

    let mut nav = start_session(&config);
    log::info!(
        "event=cli_start module=cli status=ok lists={} id_allocation={}",
        nav.collection().len(),
        config.id_allocation.as_str()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut nav, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Executes one command per input line until `quit` or end of input.
///
/// Unparsable lines are reported on stderr and skipped. Read and write
/// failures end the loop.
fn run(nav: &mut Navigator, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    for line in input.lines() {
        let command = match parse_command(&line?) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        let quit = command == Command::Quit;
        writeln!(output, "{}", execute(nav, command))?;
        if quit {
            break;
        }
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::run;
    use shoplist_core::{start_session, SessionConfig};
    use std::io::{self, Write};

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn runs_commands_until_quit() {
        let mut nav = start_session(&SessionConfig::default());
        let mut output = Vec::new();
        run(&mut nav, "create Snacks\n\nquit\ncreate Late\n".as_bytes(), &mut output)
            .expect("run should succeed");

        let output = String::from_utf8(output).expect("utf-8 output");
        assert_eq!(output, "created list 4\nbye\n");
        assert_eq!(nav.collection().len(), 4);
    }

    #[test]
    fn stops_at_first_failed_write() {
        let mut nav = start_session(&SessionConfig::default());
        let err = run(&mut nav, "create A\ncreate B\n".as_bytes(), ClosedPipe)
            .expect_err("write to a closed pipe should fail");

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(nav.collection().len(), 4);
    }
}

