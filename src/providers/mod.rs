/*!
 * Provider implementations for translation services.
 *
 * This module contains the client implementation for the supported
 * machine-translation provider:
 * - DeepL: DeepL REST API integration
 */

use async_trait::async_trait;
use std::fmt::{self, Debug, Display};

use crate::errors::ProviderError;

/// Which half of a translation pair a language list describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageDirection {
    /// Languages the provider can translate from
    Source,
    /// Languages the provider can translate into
    Target,
}

/// A language supported by a translation provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOption {
    /// Human-readable language name, e.g. "English (British)"
    pub name: String,

    /// Provider language code, e.g. "EN-GB", passed through opaquely
    pub code: String,
}

impl Display for LanguageOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// Common trait for all translation providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing them to be used interchangeably in the translation pipeline.
#[async_trait]
pub trait TranslationProvider: Send + Sync + Debug {
    /// List the languages the provider supports in the given direction
    ///
    /// # Arguments
    /// * `direction` - Whether to list source or target languages
    ///
    /// # Returns
    /// * `Result<Vec<LanguageOption>, ProviderError>` - The supported languages, in provider order
    async fn languages(
        &self,
        direction: LanguageDirection,
    ) -> Result<Vec<LanguageOption>, ProviderError>;

    /// Translate an ordered batch of strings
    ///
    /// # Arguments
    /// * `texts` - The strings to translate, must be non-empty
    /// * `source_lang` - Language code of the input strings
    /// * `target_lang` - Language code to translate into
    ///
    /// # Returns
    /// * `Result<Vec<String>, ProviderError>` - Translations in the same order as `texts`
    async fn translate(
        &self,
        texts: &[String],
        source_lang: &str,
        target_lang: &str,
    ) -> Result<Vec<String>, ProviderError>;
}

pub mod deepl;
