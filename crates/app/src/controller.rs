//! Coordinates user actions, tracked operation tasks, and state updates.
//!
//! Each orchestration trigger becomes a tokio task keyed by its
//! [`Operation`]; starting a new task of the same kind aborts the prior one
//! and bumps that operation's generation, so a superseded run can never
//! overwrite newer state (the reducer discards stale generations). Settles
//! arrive back through the event channel and are absorbed on the UI loop.

use std::collections::HashMap;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use kirana_agents::{AgentError, AgentOrchestrator};
use kirana_core::Language;

use crate::media::{MediaPayload, VoiceRecorder, read_media_file};
use crate::settings::{SettingsStore, load_theme, persist_theme};
use crate::state::{AppEvent, AppState, Mode, Operation, SettledPayload};

/// Everything the presentation layer can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    SelectMode(Mode),
    RefreshInsight,
    RunForecast,
    NegotiateSupply,
    GenerateMarketing,
    SubmitMediaFile(PathBuf),
    StartRecording,
    PushAudioChunk(Vec<u8>),
    StopRecording,
    ToggleTheme,
    SelectLanguage(Language),
    CycleLanguage,
}

/// The view controller.
pub struct Controller {
    state: AppState,
    orchestrator: Arc<dyn AgentOrchestrator>,
    settings: Arc<dyn SettingsStore>,
    recorder: VoiceRecorder,
    tasks: HashMap<Operation, AbortHandle>,
    generations: HashMap<Operation, u64>,
    events_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Controller {
    /// Build a controller, restoring the persisted theme.
    pub fn new(
        orchestrator: Arc<dyn AgentOrchestrator>,
        settings: Arc<dyn SettingsStore>,
        events_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        let theme = load_theme(settings.as_ref());
        Self {
            state: AppState::new(theme),
            orchestrator,
            settings,
            recorder: VoiceRecorder::new(),
            tasks: HashMap::new(),
            generations: HashMap::new(),
            events_tx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Kick off the session: the client starts on the dashboard, and every
    /// dashboard entry refreshes the insight.
    pub fn start(&mut self) {
        self.trigger_insight();
    }

    /// Handle a user action from the presentation layer.
    pub fn handle(&mut self, action: UserAction) {
        match action {
            UserAction::SelectMode(mode) => self.apply(AppEvent::ModeSelected(mode)),
            UserAction::RefreshInsight => self.trigger_insight(),
            UserAction::RunForecast => self.trigger_forecast(),
            UserAction::NegotiateSupply => self.trigger_negotiation(),
            UserAction::GenerateMarketing => self.trigger_marketing(),
            UserAction::SubmitMediaFile(path) => self.submit_media_file(path),
            UserAction::StartRecording => self.start_recording(),
            UserAction::PushAudioChunk(chunk) => {
                if let Err(err) = self.recorder.push_chunk(chunk) {
                    tracing::warn!(error = %err, "dropping audio chunk");
                }
            }
            UserAction::StopRecording => self.stop_recording(),
            UserAction::ToggleTheme => self.toggle_theme(),
            UserAction::SelectLanguage(language) => {
                self.apply(AppEvent::LanguageSelected(language));
            }
            UserAction::CycleLanguage => {
                let next = self.state.context.language.next();
                self.apply(AppEvent::LanguageSelected(next));
            }
        }
    }

    /// Absorb an event coming back from a spawned operation.
    pub fn absorb(&mut self, event: AppEvent) {
        if let AppEvent::OperationSettled { operation, .. } = &event {
            self.tasks.remove(operation);
        }
        self.apply(event);
    }

    /// Apply an event and react to mode transitions: entering the dashboard
    /// triggers exactly one insight refresh per entry.
    fn apply(&mut self, event: AppEvent) {
        let was_dashboard = self.state.mode == Mode::Dashboard;
        self.state.apply(event);
        if self.state.mode == Mode::Dashboard && !was_dashboard {
            self.trigger_insight();
        }
    }

    fn trigger_insight(&mut self) {
        let orchestrator = self.orchestrator.clone();
        let inventory = self.state.inventory.clone();
        let context = self.state.context.clone();
        self.spawn_operation(Operation::Insight, async move {
            orchestrator
                .generate_smart_insight(&inventory, &context)
                .await
                .map(SettledPayload::Insight)
        });
    }

    fn trigger_forecast(&mut self) {
        let orchestrator = self.orchestrator.clone();
        let context = self.state.context.clone();
        self.spawn_operation(Operation::Forecast, async move {
            orchestrator
                .predict_demand(&context)
                .await
                .map(SettledPayload::Forecast)
        });
    }

    fn trigger_negotiation(&mut self) {
        let orchestrator = self.orchestrator.clone();
        let items = self.item_names();
        let context = self.state.context.clone();
        self.spawn_operation(Operation::Negotiation, async move {
            orchestrator
                .negotiate_supply(&items, &context)
                .await
                .map(SettledPayload::Negotiation)
        });
    }

    fn trigger_marketing(&mut self) {
        let orchestrator = self.orchestrator.clone();
        let items = self.item_names();
        let context = self.state.context.clone();
        self.spawn_operation(Operation::Marketing, async move {
            orchestrator
                .generate_marketing_content(&items, &context)
                .await
                .map(SettledPayload::Marketing)
        });
    }

    fn submit_media_file(&mut self, path: PathBuf) {
        match read_media_file(&path) {
            Ok(payload) => self.ingest_media(payload),
            Err(err) => {
                tracing::warn!(error = %err, "media file rejected");
                self.apply(AppEvent::MediaRejected(err.to_string()));
            }
        }
    }

    fn start_recording(&mut self) {
        match self.recorder.start() {
            Ok(()) => self.apply(AppEvent::RecordingStarted),
            Err(err) => {
                tracing::warn!(error = %err, "cannot start recording");
                self.apply(AppEvent::MediaRejected(err.to_string()));
            }
        }
    }

    fn stop_recording(&mut self) {
        match self.recorder.stop() {
            Ok(payload) => {
                self.apply(AppEvent::RecordingStopped);
                self.ingest_media(payload);
            }
            Err(err) => {
                tracing::warn!(error = %err, "cannot stop recording");
            }
        }
    }

    /// Shared ingestion path for picked files and finished voice sessions:
    /// encode, audit, and let the settle merge the snapshot and navigate
    /// back to the dashboard.
    fn ingest_media(&mut self, payload: MediaPayload) {
        let capture = payload.encode();
        let orchestrator = self.orchestrator.clone();
        let context = self.state.context.clone();
        self.spawn_operation(Operation::Audit, async move {
            orchestrator
                .run_visual_audit(&capture, &context)
                .await
                .map(SettledPayload::Audit)
        });
    }

    fn toggle_theme(&mut self) {
        self.apply(AppEvent::ThemeToggled);
        if let Err(err) = persist_theme(self.settings.as_ref(), self.state.theme) {
            tracing::warn!(error = %err, "failed to persist theme");
        }
    }

    fn item_names(&self) -> Vec<String> {
        self.state
            .inventory
            .iter()
            .map(|item| item.name.clone())
            .collect()
    }

    /// Spawn a tracked operation task, superseding any in-flight run of the
    /// same kind.
    fn spawn_operation<F>(&mut self, operation: Operation, future: F)
    where
        F: Future<Output = Result<SettledPayload, AgentError>> + Send + 'static,
    {
        if let Some(prior) = self.tasks.remove(&operation) {
            tracing::debug!(operation = operation.as_str(), "superseding in-flight run");
            prior.abort();
        }

        let generation = {
            let counter = self.generations.entry(operation).or_insert(0);
            *counter += 1;
            *counter
        };
        self.apply(AppEvent::OperationStarted {
            operation,
            generation,
        });

        let events_tx = self.events_tx.clone();
        let handle = tokio::spawn(async move {
            let result = future.await.map_err(|err| err.to_string());
            // The receiver dropping means the UI is shutting down.
            let _ = events_tx.send(AppEvent::OperationSettled {
                operation,
                generation,
                result,
            });
        });
        self.tasks.insert(operation, handle.abort_handle());
    }
}
