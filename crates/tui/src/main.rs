//! Terminal entry point.

use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use clap::Parser;
use crossterm::event::{Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use kirana_agents::{AgentOrchestrator, CannedOrchestrator};
use kirana_app::{AppEvent, Controller, FileSettingsStore, UserAction};
use kirana_tui::shell::{KeyOutcome, UiShell};

#[derive(Debug, Parser)]
#[command(name = "kirana", about = "Supply-chain copilot demo dashboard")]
struct Cli {
    /// Skip the simulated operation latencies.
    #[arg(long)]
    instant: bool,

    /// Start in the light theme, overriding the stored preference.
    #[arg(long)]
    light: bool,

    /// Directory for settings and logs (defaults to the user data dir).
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli
        .data_dir
        .clone()
        .or_else(|| FileSettingsStore::default_path().and_then(|p| p.parent().map(PathBuf::from)))
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("failed to create data dir {}", data_dir.display()))?;

    // The shell owns the screen; diagnostics go to a log file.
    let log_file = std::fs::File::create(data_dir.join("kirana.log"))
        .context("failed to open log file")?;
    kirana_observability::init_with_writer(log_file);

    let orchestrator: Arc<dyn AgentOrchestrator> = if cli.instant {
        Arc::new(CannedOrchestrator::instant())
    } else {
        Arc::new(CannedOrchestrator::new())
    };
    let settings = Arc::new(FileSettingsStore::new(data_dir.join("settings.json")));

    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let mut controller = Controller::new(orchestrator, settings, events_tx);
    if cli.light && controller.state().theme.is_dark() {
        controller.handle(UserAction::ToggleTheme);
    }
    controller.start();

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, UiShell::new(controller), events_rx).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut shell: UiShell,
    mut events_rx: mpsc::UnboundedReceiver<AppEvent>,
) -> anyhow::Result<()> {
    let mut input_rx = spawn_input_reader();
    let mut ticker = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| {
            kirana_tui::render::draw(frame, shell.controller.state(), &shell.chrome);
        })?;

        tokio::select! {
            maybe_input = input_rx.recv() => {
                match maybe_input {
                    Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if shell.handle_key(key) == KeyOutcome::Quit {
                            break;
                        }
                    }
                    Some(_) => {}
                    None => break,
                }
            }
            maybe_event = events_rx.recv() => {
                if let Some(event) = maybe_event {
                    shell.controller.absorb(event);
                }
            }
            _ = ticker.tick() => {
                shell.on_tick();
            }
        }
    }

    Ok(())
}

/// Blocking crossterm reads on a dedicated thread, forwarded to the loop.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        loop {
            match crossterm::event::read() {
                Ok(event) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "input reader stopped");
                    break;
                }
            }
        }
    });
    rx
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)
        .context("failed to enter alternate screen")?;

    // Restore the terminal even if the shell panics mid-draw.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    Terminal::new(CrosstermBackend::new(stdout)).context("failed to build terminal")
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;
    Ok(())
}
