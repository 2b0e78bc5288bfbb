//! AgendaGenerator implementation over the generateContent logic.

use crate::logic::draft_agenda;
use roomify_common::services::{AgendaBrief, AgendaGenerator, BoxFuture, BoxedError};
use roomify_config::AgendaConfig;

/// The Gemini-backed agenda generator.
pub struct GeminiAgendaGenerator {
    config: AgendaConfig,
}

impl GeminiAgendaGenerator {
    pub fn new(config: AgendaConfig) -> Self {
        Self { config }
    }
}

impl AgendaGenerator for GeminiAgendaGenerator {
    type Error = BoxedError;

    fn draft_agenda(&self, brief: AgendaBrief) -> BoxFuture<'_, String, Self::Error> {
        Box::pin(async move {
            draft_agenda(&self.config, &brief)
                .await
                .map_err(|err| BoxedError(Box::new(err)))
        })
    }
}
