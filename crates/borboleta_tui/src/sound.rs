//! Ambience selection from a node's sound cue.

use borboleta_core::GameTheme;
use borboleta_interface::SoundLookup;

/// Police siren.
pub const SIREN: &str = "siren";
/// Rain with distant thunder.
pub const RAIN_THUNDER: &str = "rain-thunder";
/// Low suspense drone.
pub const SUSPENSE: &str = "suspense";
/// Wind through trees.
pub const FOREST_WIND: &str = "forest-wind";
/// Crackling fire.
pub const FIRE: &str = "fire";
/// Crowd murmur.
pub const CROWD: &str = "crowd";
/// Newsroom sting.
pub const NEWS: &str = "news";
/// Tense debate bed.
pub const TENSE_DEBATE: &str = "tense-debate";

type Rule = (&'static [&'static str], &'static str);

const CRIME_RULES: &[Rule] = &[
    (&["sirene", "polícia", "perseguição"], SIREN),
    (&["chuva", "noite"], RAIN_THUNDER),
    (&["tensão", "silêncio"], SUSPENSE),
];

const CLIMATE_RULES: &[Rule] = &[
    (&["floresta", "vento"], FOREST_WIND),
    (&["tempestade", "trovão"], RAIN_THUNDER),
    (&["fogo", "queimada"], FIRE),
];

const POLITICS_RULES: &[Rule] = &[
    (&["multidão", "protesto"], CROWD),
    (&["notícia", "urgente"], NEWS),
    (&["debate", "tensão"], TENSE_DEBATE),
];

const RANDOM_RULES: &[Rule] = &[
    (&["chuva", "tempestade"], RAIN_THUNDER),
    (&["floresta"], FOREST_WIND),
    (&["sirene"], SIREN),
];

/// Keyword table mapping a sound cue to a named ambience track.
///
/// Rules are checked in order against the lowercased cue; the first hit
/// wins and each theme falls back to its own default.
///
/// ```
/// use borboleta_core::GameTheme;
/// use borboleta_interface::SoundLookup;
/// use borboleta_tui::KeywordSoundLookup;
///
/// let lookup = KeywordSoundLookup;
/// assert_eq!(lookup.lookup("Sirenes ao longe", GameTheme::CrimesReais), "siren");
/// assert_eq!(lookup.lookup("", GameTheme::PoliticaGlobal), "tense-debate");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordSoundLookup;

impl KeywordSoundLookup {
    fn rules(theme: GameTheme) -> (&'static [Rule], &'static str) {
        match theme {
            GameTheme::CrimesReais => (CRIME_RULES, SUSPENSE),
            GameTheme::ClimaAmbiental => (CLIMATE_RULES, FOREST_WIND),
            GameTheme::PoliticaGlobal => (POLITICS_RULES, TENSE_DEBATE),
            GameTheme::Aleatorio => (RANDOM_RULES, SUSPENSE),
        }
    }
}

impl SoundLookup for KeywordSoundLookup {
    fn lookup(&self, sound_description: &str, theme: GameTheme) -> &'static str {
        let cue = sound_description.to_lowercase();
        let (rules, fallback) = Self::rules(theme);
        rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| cue.contains(k)))
            .map(|(_, track)| *track)
            .unwrap_or(fallback)
    }
}
