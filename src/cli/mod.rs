//! Command-line driver: feeds line commands from a reader into a mounted
//! sign-in form and prints what a view would show after each one.

mod render;
mod script;

pub use render::{render_json, render_text};
pub use script::{parse_line, ScriptCommand, ScriptError, HELP};

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::auth::SimulatedAuthService;
use crate::config::{Config, ConfigError};
use crate::flow::{FocusTracker, SignInFlow, SignInHandle};
use crate::ui::signin::{SignInSnapshot, SignInState};

#[derive(Debug, Clone, Parser)]
#[command(name = "signin-flow", version, about = "Drive a sign-in form state machine from the terminal")]
pub struct Cli {
    /// Path to a config file (default: the platform config directory).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the simulated auth service latency.
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,

    /// Make every sign-in attempt fail with a service error.
    #[arg(long)]
    pub outage: bool,

    /// Print one JSON object per update instead of text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Load the config file and apply command-line overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(latency_ms) = self.latency_ms {
            config.auth.latency_ms = latency_ms;
        }
        if self.outage {
            config.auth.outage = true;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Mount a form backed by the simulated service and drive it from stdin.
pub async fn run(cli: Cli) -> anyhow::Result<SignInState> {
    let config = cli.resolve_config().context("loading configuration")?;
    tracing::info!(
        latency_ms = config.auth.latency_ms,
        accounts = config.auth.accounts.len(),
        outage = config.auth.outage,
        "Starting sign-in form"
    );

    let auth = Arc::new(SimulatedAuthService::from_config(&config.auth));
    let tracker = FocusTracker::new();
    let handle = SignInFlow::mount(auth, tracker.targets());

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let result = drive(&handle, &tracker, stdin, &mut stdout, cli.json).await;
    handle.unmount();
    result
}

/// Feed commands from `input` to the form, writing a rendering of every
/// update to `out`. Returns the final state.
///
/// While a sign-in request is in flight the next command is not read, the
/// same way a disabled form ignores input until the server answers.
pub async fn drive<R, W>(
    handle: &SignInHandle,
    tracker: &FocusTracker,
    input: R,
    out: &mut W,
    json: bool,
) -> anyhow::Result<SignInState>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let print = |out: &mut W, snapshot: &SignInSnapshot| -> std::io::Result<()> {
        let rendered = if json {
            render_json(snapshot, tracker.current())
        } else {
            render_text(snapshot, tracker.current())
        };
        writeln!(out, "{}", rendered)?;
        if !json {
            writeln!(out)?;
        }
        out.flush()
    };

    print(out, &handle.snapshot())?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                continue;
            }
        };

        match command {
            ScriptCommand::Quit => break,
            ScriptCommand::Help => writeln!(out, "{}", HELP)?,
            ScriptCommand::State => print(out, &handle.snapshot())?,
            command => {
                let Some(intent) = command.into_intent() else {
                    continue;
                };
                let snapshot = handle.send(intent).await?;
                print(out, &snapshot)?;

                if snapshot.state == SignInState::AwaitingResponse {
                    let settled = handle.settled().await?;
                    print(out, &settled)?;
                }
            }
        }
    }

    Ok(handle.state())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthService;
    use std::time::Duration;

    fn mount() -> (SignInHandle, FocusTracker) {
        let auth: Arc<dyn AuthService> = Arc::new(
            SimulatedAuthService::new(Duration::ZERO).with_account("a@b.com", "abcdef"),
        );
        let tracker = FocusTracker::new();
        let handle = SignInFlow::mount(auth, tracker.targets());
        (handle, tracker)
    }

    #[tokio::test]
    async fn drives_form_to_signed_in() {
        let (handle, tracker) = mount();
        let script = b"email a@b.com\nblur email\npassword abcdef\nsubmit\n" as &[u8];
        let mut out = Vec::new();

        let state = drive(&handle, &tracker, script, &mut out, false)
            .await
            .unwrap();

        assert_eq!(state, SignInState::SignedIn);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("state:   awaitingResponse"));
        assert!(text.contains("[loading] (disabled)"));
        assert!(text.contains("authenticated"));
    }

    #[tokio::test]
    async fn reports_parse_errors_and_keeps_going() {
        let (handle, tracker) = mount();
        let script = b"frobnicate\nemail nope\nblur email\nquit\nsubmit\n" as &[u8];
        let mut out = Vec::new();

        let state = drive(&handle, &tracker, script, &mut out, true)
            .await
            .unwrap();

        assert!(state.matches("emailErr.badFormat"));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("error: unknown command 'frobnicate'"));
        assert!(text.contains("\"focus\":\"email\""));
    }

    #[test]
    fn overrides_apply_on_top_of_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[auth]\nlatency_ms = 10\n").unwrap();

        let cli = Cli {
            config: Some(path),
            latency_ms: Some(0),
            outage: true,
            json: false,
        };
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.auth.latency_ms, 0);
        assert!(config.auth.outage);
    }
}
