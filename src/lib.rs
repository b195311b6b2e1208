/*!
 * # reswai - .resw resource file translator
 *
 * A Rust library for automatic translation of Windows `.resw` localization
 * resource files using the DeepL API.
 *
 * ## Features
 *
 * - Parse `.resw` resource documents and extract their translatable values
 * - Translate value batches through the DeepL REST API
 * - Rewrite documents in place, preserving all non-value structure
 *   (headers, comments, attributes, whitespace) byte for byte
 * - Strict validation at every step: schema version, entry shape,
 *   translation counts
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `resource_processor`: Resource file parsing and rewriting
 * - `providers`: Client implementations for translation providers:
 *   - `providers::deepl`: DeepL API client
 * - `pipeline`: Translation run orchestration
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod errors;
pub mod pipeline;
pub mod providers;
pub mod resource_processor;

// Re-export main types for easier usage
pub use errors::{AppError, DocumentError, PipelineError, ProviderError, ValidationError};
pub use pipeline::{run, run_with_provider, RunRequest};
pub use providers::{LanguageDirection, LanguageOption, TranslationProvider};
pub use resource_processor::{ResourceDocument, ResourceEntry};
