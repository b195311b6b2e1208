/*!
 * Translation pipeline orchestration.
 *
 * Runs a complete resource-file translation: validate the inputs, parse the
 * document, gate on the schema version, extract the values, translate them,
 * and rewrite the document. Every step is a hard gate; the first failure
 * aborts the run and nothing is written.
 */

use log::{debug, info};

use crate::errors::{PipelineError, ValidationError};
use crate::providers::deepl::DeepL;
use crate::providers::TranslationProvider;
use crate::resource_processor::ResourceDocument;

/// Inputs of a single translation run.
///
/// A run is fully parameterized by these four values; there is no persisted
/// configuration and no ambient state.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// DeepL auth key
    pub auth_key: String,

    /// Raw bytes of the source resource document
    pub source: Vec<u8>,

    /// Language code of the source values
    pub source_lang: String,

    /// Language code to translate into
    pub target_lang: String,
}

/// Check the run inputs before any work is done.
///
/// Language codes are compared case-insensitively, matching how providers
/// treat them on the wire.
fn validate_request(request: &RunRequest) -> Result<(), ValidationError> {
    if request.auth_key.trim().is_empty() {
        return Err(ValidationError::EmptyAuthKey);
    }
    if request.source.is_empty() {
        return Err(ValidationError::EmptySource);
    }
    if request.source_lang.trim().is_empty() {
        return Err(ValidationError::MissingSourceLanguage);
    }
    if request.target_lang.trim().is_empty() {
        return Err(ValidationError::MissingTargetLanguage);
    }
    if request
        .source_lang
        .eq_ignore_ascii_case(&request.target_lang)
    {
        return Err(ValidationError::SameLanguage(request.source_lang.clone()));
    }
    Ok(())
}

/// Run a translation with a fresh DeepL client built from the request's key.
///
/// The client is constructed per run, so a corrected credential takes effect
/// on the next call without any other state change.
pub async fn run(request: &RunRequest) -> Result<Vec<u8>, PipelineError> {
    let provider = DeepL::new(request.auth_key.clone(), "");
    run_with_provider(&provider, request).await
}

/// Run a translation against the given provider.
///
/// Returns the serialized translated document on success. On any failure the
/// error is terminal for the run; no partial output is ever produced.
pub async fn run_with_provider<P: TranslationProvider>(
    provider: &P,
    request: &RunRequest,
) -> Result<Vec<u8>, PipelineError> {
    validate_request(request)?;

    let mut document = ResourceDocument::parse(&request.source)?;

    if !document.validate_version() {
        return Err(PipelineError::UnsupportedVersion);
    }

    let values = document.extract_values()?;
    info!(
        "Translating {} values from {} to {}",
        values.len(),
        request.source_lang,
        request.target_lang
    );

    // A document with no entries has nothing to translate; skip the provider
    // call so an empty batch cannot surface as a spurious count mismatch
    if values.is_empty() {
        debug!("Document has no translatable entries, skipping provider call");
        return Ok(document.serialize()?);
    }

    let translations = provider
        .translate(&values, &request.source_lang, &request.target_lang)
        .await?;

    if translations.len() != values.len() {
        return Err(PipelineError::CountMismatch {
            sent: values.len(),
            received: translations.len(),
        });
    }

    document.apply_values(&translations)?;

    let output = document.serialize()?;
    info!("Translated {} values", translations.len());

    Ok(output)
}
