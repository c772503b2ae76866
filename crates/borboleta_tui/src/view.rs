//! Player-facing text shared by the full-screen and line-mode front-ends.

use borboleta_core::{HistoryItem, excerpt};

/// Game title.
pub const TITLE: &str = "EFEITO BORBOLETA";
/// Tagline under the title.
pub const TAGLINE: &str = "Pequenas escolhas, consequências globais.";
/// Heading of the journey summary.
pub const JOURNEY_HEADING: &str = "RESUMO DA JORNADA";
/// Label preceding each past choice.
pub const CHOSE_LABEL: &str = "Você escolheu:";
/// Shown while a node is being generated.
pub const LOADING_TEXT: &str = "Recalculando a Realidade...";
/// End screen heading.
pub const END_HEADING: &str = "FIM DA LINHA DO TEMPO";
/// End screen closing line.
pub const END_TEXT: &str = "Sua jornada pelo Efeito Borboleta chegou ao fim.";
/// Label of the identity selector.
pub const IDENTITY_LABEL: &str = "Sua Identidade (Protagonista)";
/// Label of the theme selector.
pub const THEME_LABEL: &str = "Tema da Crise";

/// Characters of a past outcome shown in the journey summary.
pub const SUMMARY_OUTCOME_CHARS: usize = 80;

/// One journey summary entry: a quoted outcome excerpt and the choice taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyEntry {
    /// `"<first 80 chars>..."`
    pub outcome: String,
    /// Text of the choice made on that node
    pub choice: String,
}

/// Summary lines for `history`, oldest first.
pub fn journey(history: &[HistoryItem]) -> Vec<JourneyEntry> {
    history
        .iter()
        .map(|item| JourneyEntry {
            outcome: format!(
                "\"{}...\"",
                excerpt(item.node().outcome_text(), SUMMARY_OUTCOME_CHARS)
            ),
            choice: item.choice().text().clone(),
        })
        .collect()
}
