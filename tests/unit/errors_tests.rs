/*!
 * Tests for error types and conversions
 */

use reswai::errors::{
    AppError, DocumentError, PipelineError, ProviderError, ValidationError,
};

#[test]
fn test_validationError_emptyAuthKey_shouldDisplayCorrectly() {
    let error = ValidationError::EmptyAuthKey;
    let display = format!("{}", error);
    assert!(display.contains("auth key is empty"));
}

#[test]
fn test_validationError_sameLanguage_shouldDisplayCode() {
    let error = ValidationError::SameLanguage("en".to_string());
    let display = format!("{}", error);
    assert!(display.contains("source and target languages are equal"));
    assert!(display.contains("en"));
}

#[test]
fn test_documentError_parse_shouldDisplayDetail() {
    let error = DocumentError::Parse("unexpected token".to_string());
    let display = format!("{}", error);
    assert!(display.contains("failed to parse resource XML"));
    assert!(display.contains("unexpected token"));
}

#[test]
fn test_documentError_missingValue_shouldDisplayKey() {
    let error = DocumentError::MissingValue {
        key: "AppTitle".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("AppTitle"));
    assert!(display.contains("no value element"));
}

#[test]
fn test_documentError_multipleValues_shouldDisplayKeyAndCount() {
    let error = DocumentError::MultipleValues {
        key: "AppTitle".to_string(),
        count: 3,
    };
    let display = format!("{}", error);
    assert!(display.contains("AppTitle"));
    assert!(display.contains("3"));
}

#[test]
fn test_documentError_countMismatch_shouldDisplayBothCounts() {
    let error = DocumentError::CountMismatch {
        expected: 5,
        actual: 2,
    };
    let display = format!("{}", error);
    assert!(display.contains("5"));
    assert!(display.contains("2"));
}

#[test]
fn test_providerError_requestFailed_shouldDisplayCorrectly() {
    let error = ProviderError::RequestFailed("Connection timeout".to_string());
    let display = format!("{}", error);
    assert!(display.contains("API request failed"));
    assert!(display.contains("Connection timeout"));
}

#[test]
fn test_providerError_parseError_shouldDisplayCorrectly() {
    let error = ProviderError::ParseError("Invalid JSON".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Failed to parse API response"));
    assert!(display.contains("Invalid JSON"));
}

#[test]
fn test_providerError_apiError_shouldDisplayStatusAndMessage() {
    let error = ProviderError::ApiError {
        status_code: 429,
        message: "Too many requests".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("429"));
    assert!(display.contains("Too many requests"));
}

#[test]
fn test_providerError_connectionError_shouldDisplayCorrectly() {
    let error = ProviderError::ConnectionError("Host unreachable".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Connection error"));
    assert!(display.contains("Host unreachable"));
}

#[test]
fn test_providerError_rateLimitExceeded_shouldDisplayCorrectly() {
    let error = ProviderError::RateLimitExceeded("Retry after 60s".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Rate limit exceeded"));
    assert!(display.contains("Retry after 60s"));
}

#[test]
fn test_providerError_authenticationError_shouldDisplayCorrectly() {
    let error = ProviderError::AuthenticationError("Invalid auth key".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Authentication error"));
    assert!(display.contains("Invalid auth key"));
}

#[test]
fn test_providerError_quotaExceeded_shouldDisplayCorrectly() {
    let error = ProviderError::QuotaExceeded("Character limit reached".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Translation quota exceeded"));
    assert!(display.contains("Character limit reached"));
}

#[test]
fn test_pipelineError_fromValidationError_shouldWrapCorrectly() {
    let error: PipelineError = ValidationError::EmptySource.into();
    assert!(matches!(error, PipelineError::Validation(_)));
    let display = format!("{}", error);
    assert!(display.contains("invalid input"));
    assert!(display.contains("source document is empty"));
}

#[test]
fn test_pipelineError_fromProviderError_shouldWrapCorrectly() {
    let provider_error = ProviderError::RequestFailed("Test error".to_string());
    let error: PipelineError = provider_error.into();
    assert!(matches!(error, PipelineError::Provider(_)));
    let display = format!("{}", error);
    assert!(display.contains("provider error"));
    assert!(display.contains("Test error"));
}

#[test]
fn test_pipelineError_unsupportedVersion_shouldNameExpectedVersion() {
    let error = PipelineError::UnsupportedVersion;
    let display = format!("{}", error);
    assert!(display.contains("2.0"));
}

#[test]
fn test_pipelineError_countMismatch_shouldDisplaySentAndReceived() {
    let error = PipelineError::CountMismatch {
        sent: 4,
        received: 3,
    };
    let display = format!("{}", error);
    assert!(display.contains("sent 4"));
    assert!(display.contains("received 3"));
}

#[test]
fn test_appError_fromIoError_shouldWrapAsFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let app_error: AppError = io_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("File error"));
    assert!(display.contains("File not found"));
}

#[test]
fn test_appError_fromAnyhowError_shouldWrapAsUnknown() {
    let anyhow_error = anyhow::anyhow!("Something went wrong");
    let app_error: AppError = anyhow_error.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Unknown error"));
    assert!(display.contains("Something went wrong"));
}

#[test]
fn test_appError_fromPipelineError_shouldWrapCorrectly() {
    let app_error: AppError = PipelineError::UnsupportedVersion.into();
    let display = format!("{}", app_error);
    assert!(display.contains("Pipeline error"));
}

#[test]
fn test_providerError_debug_shouldBeImplemented() {
    let error = ProviderError::RequestFailed("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("RequestFailed"));
}

#[test]
fn test_documentError_debug_shouldBeImplemented() {
    let error = DocumentError::EmptyValue {
        key: "k1".to_string(),
    };
    let debug = format!("{:?}", error);
    assert!(debug.contains("EmptyValue"));
    assert!(debug.contains("k1"));
}

#[test]
fn test_appError_debug_shouldBeImplemented() {
    let error = AppError::File("test".to_string());
    let debug = format!("{:?}", error);
    assert!(debug.contains("File"));
}
