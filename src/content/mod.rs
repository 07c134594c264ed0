pub mod language;

use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

pub use language::LanguageCode;

#[derive(Embed)]
#[folder = "assets/"]
struct ContentAssets;

/// The two parallel content domains. Each ships the same eight groups per
/// language, so one engine serves both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    Words,
    Sentences,
}

impl Domain {
    pub fn asset_dir(self) -> &'static str {
        match self {
            Domain::Words => "words",
            Domain::Sentences => "sentences",
        }
    }

    /// i18n key for the domain label on the home menu.
    pub fn title_key(self) -> &'static str {
        match self {
            Domain::Words => "words",
            Domain::Sentences => "sentences",
        }
    }
}

/// One of the eight named item groups every dataset carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    Basic,
    Pronouns,
    Verbs,
    Nouns,
    Determiners,
    Adjectives,
    Adverbs,
    Prepositions,
}

/// All content groups for one language in one domain. Groups across two
/// datasets of the same domain are index-aligned: item i of a group is the
/// translation of item i in every other language's same group. That property
/// is authored, not checked here; tests/dataset_alignment.rs verifies it for
/// the shipped assets.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub basic: Vec<String>,
    #[serde(default)]
    pub pronouns: Vec<String>,
    #[serde(default)]
    pub verbs: Vec<String>,
    #[serde(default)]
    pub nouns: Vec<String>,
    #[serde(default)]
    pub determiners: Vec<String>,
    #[serde(default)]
    pub adjectives: Vec<String>,
    #[serde(default)]
    pub adverbs: Vec<String>,
    #[serde(default)]
    pub prepositions: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("no bundled dataset at {0}")]
    Missing(String),
    #[error("malformed dataset {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

impl Dataset {
    /// Load the bundled dataset for a domain/language pair. `None` means the
    /// quiz for that pair has no content; callers surface an explicit empty
    /// state rather than failing.
    pub fn load(domain: Domain, language: LanguageCode) -> Option<Self> {
        Self::decode(domain, language).ok()
    }

    fn decode(domain: Domain, language: LanguageCode) -> Result<Self, ContentError> {
        let path = format!("{}/{}.json", domain.asset_dir(), language.code());
        let file = ContentAssets::get(&path).ok_or_else(|| ContentError::Missing(path.clone()))?;
        serde_json::from_slice(&file.data).map_err(|source| ContentError::Malformed { path, source })
    }

    pub fn group(&self, group: Group) -> &[String] {
        match group {
            Group::Basic => &self.basic,
            Group::Pronouns => &self.pronouns,
            Group::Verbs => &self.verbs,
            Group::Nouns => &self.nouns,
            Group::Determiners => &self.determiners,
            Group::Adjectives => &self.adjectives,
            Group::Adverbs => &self.adverbs,
            Group::Prepositions => &self.prepositions,
        }
    }
}
