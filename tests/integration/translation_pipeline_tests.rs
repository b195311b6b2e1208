/*!
 * Integration tests for the full translation pipeline.
 *
 * Tests end-to-end translation workflows with realistic .resw content.
 */

use std::fs;

use reswai::errors::PipelineError;
use reswai::pipeline::{run_with_provider, RunRequest};
use reswai::resource_processor::ResourceDocument;

use crate::common::mock_providers::MockTranslator;
use crate::common::{create_temp_dir, create_test_file};

/// A realistic .resw document in the shape Visual Studio generates,
/// with the full resmimetype/version/reader/writer header block and
/// a comment between entries
fn realistic_resw() -> String {
    r#"<?xml version="1.0" encoding="utf-8"?>
<root>
  <!--
    Microsoft ResX Schema

    Version 2.0
  -->
  <resheader name="resmimetype">
    <value>text/microsoft-resx</value>
  </resheader>
  <resheader name="version">
    <value>2.0</value>
  </resheader>
  <resheader name="reader">
    <value>System.Resources.ResXResourceReader, System.Windows.Forms</value>
  </resheader>
  <resheader name="writer">
    <value>System.Resources.ResXResourceWriter, System.Windows.Forms</value>
  </resheader>
  <data name="k1" xml:space="preserve">
    <value>Hello</value>
  </data>
  <!-- Main window strings -->
  <data name="k2" xml:space="preserve">
    <value>World</value>
  </data>
</root>
"#
    .to_string()
}

fn request_for(source: &str) -> RunRequest {
    RunRequest {
        auth_key: "test-key:fx".to_string(),
        source: source.as_bytes().to_vec(),
        source_lang: "en".to_string(),
        target_lang: "fr".to_string(),
    }
}

#[tokio::test]
async fn test_fullPipeline_withScriptedTranslations_shouldRewriteOnlyValues() {
    let provider = MockTranslator::with_translations(vec!["Bonjour", "Monde"]);
    let source = realistic_resw();
    let request = request_for(&source);

    let output = run_with_provider(&provider, &request).await.unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("<value>Bonjour</value>"));
    assert!(output.contains("<value>Monde</value>"));

    // Everything except the two entry values is byte-identical
    let expected = source
        .replace("<value>Hello</value>", "<value>Bonjour</value>")
        .replace("<value>World</value>", "<value>Monde</value>");
    assert_eq!(output, expected);
}

#[tokio::test]
async fn test_fullPipeline_withIdentityProvider_shouldReproduceInput() {
    let provider = MockTranslator::new();
    let source = realistic_resw();
    let request = request_for(&source);

    let output = run_with_provider(&provider, &request).await.unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), source);
}

#[tokio::test]
async fn test_fullPipeline_withDuplicateSourceStrings_shouldCorrelateByPosition() {
    let source = realistic_resw().replace(
        "  <data name=\"k2\" xml:space=\"preserve\">\n    <value>World</value>\n  </data>\n",
        "  <data name=\"k2\" xml:space=\"preserve\">\n    <value>Yes</value>\n  </data>\n  \
<data name=\"k3\" xml:space=\"preserve\">\n    <value>No</value>\n  </data>\n  \
<data name=\"k4\" xml:space=\"preserve\">\n    <value>Yes</value>\n  </data>\n",
    );
    let provider = MockTranslator::with_translations(vec!["Bonjour", "Oui", "Non", "Oui bis"]);
    let request = request_for(&source);

    let output = run_with_provider(&provider, &request).await.unwrap();
    let document = ResourceDocument::parse(&output).unwrap();
    let values = document.extract_values().unwrap();

    // The two identical source strings received different translations,
    // each landing at its own position
    assert_eq!(
        values,
        vec![
            "Bonjour".to_string(),
            "Oui".to_string(),
            "Non".to_string(),
            "Oui bis".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_fullPipeline_withCountMismatch_shouldProduceNoOutput() {
    let provider = MockTranslator::with_translations(vec!["Bonjour", "Monde", "Extra"]);
    let request = request_for(&realistic_resw());

    let result = run_with_provider(&provider, &request).await;
    assert!(matches!(
        result,
        Err(PipelineError::CountMismatch {
            sent: 2,
            received: 3
        })
    ));
}

#[tokio::test]
async fn test_fullPipeline_withFileRoundTrip_shouldWriteTranslatedFile() {
    let temp_dir = create_temp_dir().unwrap();
    let dir = temp_dir.path().to_path_buf();
    let input_path = create_test_file(&dir, "Resources.resw", &realistic_resw()).unwrap();

    let provider = MockTranslator::with_translations(vec!["Bonjour", "Monde"]);
    let source = fs::read(&input_path).unwrap();
    let request = RunRequest {
        auth_key: "test-key:fx".to_string(),
        source,
        source_lang: "en".to_string(),
        target_lang: "fr".to_string(),
    };

    let output = run_with_provider(&provider, &request).await.unwrap();
    let output_path = dir.join("Resources.fr.resw");
    fs::write(&output_path, &output).unwrap();

    let written = fs::read(&output_path).unwrap();
    let document = ResourceDocument::parse(&written).unwrap();
    assert!(document.validate_version());
    assert_eq!(
        document.extract_values().unwrap(),
        vec!["Bonjour".to_string(), "Monde".to_string()]
    );
}
