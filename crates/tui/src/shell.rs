//! Shell state and key dispatch.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use kirana_app::{Controller, Mode, UserAction};

/// Synthetic capture chunk fed to the recorder each tick while a voice
/// session is active; stands in for the platform audio stream in the demo.
const TICK_AUDIO_CHUNK: [u8; 32] = [0; 32];

/// Presentation-only state: panel chrome the domain never sees.
#[derive(Debug, Default)]
pub struct Chrome {
    /// Whether the orchestration-log side panel is open.
    pub show_logs: bool,
    /// In-progress file path entry for the Vision panel, when prompting.
    pub path_input: Option<String>,
    /// Tick counter driving the spinner animation.
    pub tick: u64,
}

/// What the event loop should do after a key press.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    Quit,
}

/// The terminal shell: controller plus chrome.
pub struct UiShell {
    pub controller: Controller,
    pub chrome: Chrome,
}

impl UiShell {
    pub fn new(controller: Controller) -> Self {
        Self {
            controller,
            chrome: Chrome::default(),
        }
    }

    /// Advance animations and feed the demo capture stream.
    pub fn on_tick(&mut self) {
        self.chrome.tick = self.chrome.tick.wrapping_add(1);
        if self.controller.state().recording {
            self.controller
                .handle(UserAction::PushAudioChunk(TICK_AUDIO_CHUNK.to_vec()));
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyOutcome::Quit;
        }

        // The path prompt swallows everything while it is open.
        if self.chrome.path_input.is_some() {
            self.handle_prompt_key(key);
            return KeyOutcome::Continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('1') => self.select_mode(Mode::ALL[0]),
            KeyCode::Char('2') => self.select_mode(Mode::ALL[1]),
            KeyCode::Char('3') => self.select_mode(Mode::ALL[2]),
            KeyCode::Char('4') => self.select_mode(Mode::ALL[3]),
            KeyCode::Char('5') => self.select_mode(Mode::ALL[4]),
            KeyCode::Char('l') => self.chrome.show_logs = !self.chrome.show_logs,
            KeyCode::Char('t') => self.controller.handle(UserAction::ToggleTheme),
            KeyCode::Char('g') => self.controller.handle(UserAction::CycleLanguage),
            KeyCode::Char('i') => self.controller.handle(UserAction::RefreshInsight),
            KeyCode::Char('f') => self.controller.handle(UserAction::RunForecast),
            KeyCode::Char('n') => self.controller.handle(UserAction::NegotiateSupply),
            KeyCode::Char('m') => self.controller.handle(UserAction::GenerateMarketing),
            KeyCode::Char('u') => {
                if self.controller.state().mode == Mode::Vision {
                    self.chrome.path_input = Some(String::new());
                }
            }
            KeyCode::Char('r') => {
                if self.controller.state().mode == Mode::Vision {
                    if self.controller.state().recording {
                        self.controller.handle(UserAction::StopRecording);
                    } else {
                        self.controller.handle(UserAction::StartRecording);
                    }
                }
            }
            _ => {}
        }
        KeyOutcome::Continue
    }

    fn select_mode(&mut self, mode: Mode) {
        self.controller.handle(UserAction::SelectMode(mode));
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(input) = self.chrome.path_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.chrome.path_input = None;
            }
            KeyCode::Enter => {
                let path = input.trim().to_string();
                self.chrome.path_input = None;
                if !path.is_empty() {
                    self.controller
                        .handle(UserAction::SubmitMediaFile(PathBuf::from(path)));
                }
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            _ => {}
        }
    }
}
