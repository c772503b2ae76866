//! Player identity and game theme.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the protagonist is addressed in the story.
///
/// Displays as the Portuguese label shown to the player and parses from
/// either the label or an ASCII slug, ignoring case.
///
/// # Examples
///
/// ```
/// use borboleta_core::PlayerIdentity;
///
/// let identity: PlayerIdentity = "nao-binario".parse().unwrap();
/// assert_eq!(identity, PlayerIdentity::NaoBinario);
/// assert_eq!(identity.to_string(), "Não-binário");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum PlayerIdentity {
    /// Masculine protagonist
    #[display("Homem")]
    Homem,
    /// Feminine protagonist
    #[display("Mulher")]
    Mulher,
    /// Non-binary protagonist
    #[display("Não-binário")]
    #[serde(rename = "Não-binário")]
    NaoBinario,
}

impl PlayerIdentity {
    /// ASCII identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            PlayerIdentity::Homem => "homem",
            PlayerIdentity::Mulher => "mulher",
            PlayerIdentity::NaoBinario => "nao-binario",
        }
    }
}

impl FromStr for PlayerIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        <Self as strum::IntoEnumIterator>::iter()
            .find(|identity| {
                identity.slug().eq_ignore_ascii_case(wanted)
                    || identity.to_string().to_lowercase() == wanted.to_lowercase()
            })
            .ok_or_else(|| format!("Unknown player identity: {}", s))
    }
}

/// Subject area the story draws its real events from.
///
/// # Examples
///
/// ```
/// use borboleta_core::GameTheme;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(GameTheme::iter().count(), 4);
/// assert_eq!("Política Global".parse::<GameTheme>().unwrap(), GameTheme::PoliticaGlobal);
/// assert_eq!(GameTheme::CrimesReais.slug(), "crimes-reais");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum GameTheme {
    /// True crime
    #[display("Crimes Reais")]
    #[serde(rename = "Crimes Reais")]
    CrimesReais,
    /// Climate and environment
    #[display("Clima Ambiental")]
    #[serde(rename = "Clima Ambiental")]
    ClimaAmbiental,
    /// World politics
    #[display("Política Global")]
    #[serde(rename = "Política Global")]
    PoliticaGlobal,
    /// Any of the above, chosen by the model
    #[display("Aleatório")]
    #[serde(rename = "Aleatório")]
    Aleatorio,
}

impl GameTheme {
    /// ASCII identifier accepted on the command line.
    pub fn slug(&self) -> &'static str {
        match self {
            GameTheme::CrimesReais => "crimes-reais",
            GameTheme::ClimaAmbiental => "clima-ambiental",
            GameTheme::PoliticaGlobal => "politica-global",
            GameTheme::Aleatorio => "aleatorio",
        }
    }
}

impl FromStr for GameTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        <Self as strum::IntoEnumIterator>::iter()
            .find(|theme| {
                theme.slug().eq_ignore_ascii_case(wanted)
                    || theme.to_string().to_lowercase() == wanted.to_lowercase()
            })
            .ok_or_else(|| format!("Unknown game theme: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_identity_parses_label_and_slug() {
        assert_eq!("MULHER".parse::<PlayerIdentity>(), Ok(PlayerIdentity::Mulher));
        assert_eq!(
            "não-binário".parse::<PlayerIdentity>(),
            Ok(PlayerIdentity::NaoBinario)
        );
        assert!("robô".parse::<PlayerIdentity>().is_err());
    }

    #[test]
    fn test_theme_display_round_trips_through_parse() {
        for theme in GameTheme::iter() {
            assert_eq!(theme.to_string().parse::<GameTheme>(), Ok(theme));
            assert_eq!(theme.slug().parse::<GameTheme>(), Ok(theme));
        }
    }

    #[test]
    fn test_serde_uses_portuguese_labels() {
        let json = serde_json::to_string(&GameTheme::ClimaAmbiental).unwrap();
        assert_eq!(json, "\"Clima Ambiental\"");
        let identity: PlayerIdentity = serde_json::from_str("\"Não-binário\"").unwrap();
        assert_eq!(identity, PlayerIdentity::NaoBinario);
    }
}
