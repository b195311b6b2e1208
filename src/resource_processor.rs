use quick_xml::events::{BytesText, Event};
use quick_xml::{Reader, Writer};
use quick_xml::events::BytesStart;
use log::debug;

use crate::errors::DocumentError;

// @module: Resource file (.resw) parsing and rewriting

/// Resource schema version supported by the rewriter
pub const SUPPORTED_VERSION: &str = "2.0";

// @struct: Single translatable resource entry
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    // @field: Name attribute of the data element, opaque, never translated
    pub key: String,

    // @field: One slot per value element found under the data element
    value_texts: Vec<ValueText>,
}

/// The text content of one `<value>` element
#[derive(Debug, Clone)]
struct ValueText {
    /// Index of the text event inside the document event stream,
    /// `None` when the value element is empty
    event_index: Option<usize>,

    /// Unescaped text content, empty when `event_index` is `None`
    text: String,
}

impl ResourceEntry {
    /// The entry value, if the entry holds exactly one value element with text
    pub fn value(&self) -> Option<&str> {
        match self.value_texts.as_slice() {
            [single] if single.event_index.is_some() => Some(&single.text),
            _ => None,
        }
    }
}

/// Document-level `<resheader>` metadata field
#[derive(Debug, Clone)]
struct ResHeader {
    name: String,
    text: String,
}

/// In-memory representation of a .resw resource document.
///
/// The full XML event stream is retained so that serialization reproduces
/// every non-value byte of the input (headers, comments, attributes,
/// whitespace) unchanged. Entries index into that stream; extraction and
/// application both walk the same entry order, so the positional mapping
/// between source and translated values is deterministic.
#[derive(Debug)]
pub struct ResourceDocument {
    // @field: Owned XML events in document order
    events: Vec<Event<'static>>,

    // @field: Translatable entries in document order
    entries: Vec<ResourceEntry>,

    // @field: resheader name/text pairs for version validation
    headers: Vec<ResHeader>,
}

impl ResourceDocument {
    /// Parse a resource document from raw bytes.
    ///
    /// # Arguments
    /// * `bytes` - UTF-8 encoded XML content of a .resw file
    ///
    /// # Returns
    /// * `Result<ResourceDocument, DocumentError>` - The parsed document, or
    ///   `DocumentError::Parse` when the input is not well-formed
    pub fn parse(bytes: &[u8]) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_reader(bytes);
        let mut buf = Vec::new();

        let mut events: Vec<Event<'static>> = Vec::new();
        let mut entries: Vec<ResourceEntry> = Vec::new();
        let mut headers: Vec<ResHeader> = Vec::new();

        let mut saw_root = false;
        let mut current_entry: Option<ResourceEntry> = None;
        let mut data_depth = 0usize;
        let mut in_value = false;
        let mut pending_value: Option<ValueText> = None;
        let mut current_header: Option<ResHeader> = None;
        let mut header_depth = 0usize;

        loop {
            let event = reader
                .read_event_into(&mut buf)
                .map_err(|e| DocumentError::Parse(e.to_string()))?;

            if matches!(event, Event::Eof) {
                break;
            }

            let owned = event.into_owned();

            match &owned {
                Event::Start(e) => {
                    saw_root = true;
                    if in_value {
                        return Err(DocumentError::Parse(
                            "unexpected markup inside <value> element".to_string(),
                        ));
                    }
                    if current_header.is_some() {
                        header_depth += 1;
                    } else if let Some(_) = &current_entry {
                        data_depth += 1;
                        if e.name().as_ref() == b"value" {
                            in_value = true;
                            pending_value = Some(ValueText {
                                event_index: None,
                                text: String::new(),
                            });
                        }
                    } else if e.name().as_ref() == b"data" {
                        current_entry = Some(ResourceEntry {
                            key: name_attribute(e)?.unwrap_or_default(),
                            value_texts: Vec::new(),
                        });
                        data_depth = 0;
                    } else if e.name().as_ref() == b"resheader" {
                        if let Some(name) = name_attribute(e)? {
                            current_header = Some(ResHeader {
                                name,
                                text: String::new(),
                            });
                        }
                        header_depth = 0;
                    }
                }
                Event::Empty(e) => {
                    saw_root = true;
                    if in_value {
                        return Err(DocumentError::Parse(
                            "unexpected markup inside <value> element".to_string(),
                        ));
                    }
                    if current_header.is_none() {
                        if let Some(entry) = current_entry.as_mut() {
                            if e.name().as_ref() == b"value" {
                                entry.value_texts.push(ValueText {
                                    event_index: None,
                                    text: String::new(),
                                });
                            }
                        } else if e.name().as_ref() == b"data" {
                            entries.push(ResourceEntry {
                                key: name_attribute(e)?.unwrap_or_default(),
                                value_texts: Vec::new(),
                            });
                        } else if e.name().as_ref() == b"resheader" {
                            if let Some(name) = name_attribute(e)? {
                                headers.push(ResHeader {
                                    name,
                                    text: String::new(),
                                });
                            }
                        }
                    }
                }
                Event::End(_) => {
                    if in_value {
                        in_value = false;
                        data_depth = data_depth.saturating_sub(1);
                        if let (Some(entry), Some(value)) =
                            (current_entry.as_mut(), pending_value.take())
                        {
                            entry.value_texts.push(value);
                        }
                    } else if current_header.is_some() {
                        if header_depth == 0 {
                            if let Some(header) = current_header.take() {
                                headers.push(header);
                            }
                        } else {
                            header_depth -= 1;
                        }
                    } else if current_entry.is_some() {
                        if data_depth == 0 {
                            if let Some(entry) = current_entry.take() {
                                entries.push(entry);
                            }
                        } else {
                            data_depth -= 1;
                        }
                    }
                }
                Event::Text(t) => {
                    let text = t
                        .unescape()
                        .map_err(|e| DocumentError::Parse(e.to_string()))?;
                    if in_value {
                        if let Some(value) = pending_value.as_mut() {
                            value.event_index = Some(events.len());
                            value.text = text.into_owned();
                        }
                    } else if let Some(header) = current_header.as_mut() {
                        // .NET discards insignificant whitespace on load, so
                        // whitespace-only nodes do not count towards the header text
                        if !text.trim().is_empty() {
                            header.text.push_str(&text);
                        }
                    }
                }
                Event::CData(_) | Event::PI(_) | Event::Comment(_) => {
                    if in_value {
                        return Err(DocumentError::Parse(
                            "unexpected markup inside <value> element".to_string(),
                        ));
                    }
                }
                _ => {}
            }

            events.push(owned);
            buf.clear();
        }

        if in_value || current_entry.is_some() || current_header.is_some() {
            return Err(DocumentError::Parse(
                "unexpected end of document".to_string(),
            ));
        }

        if !saw_root {
            return Err(DocumentError::Parse("document has no root element".to_string()));
        }

        debug!("Parsed resource document with {} entries", entries.len());

        Ok(ResourceDocument {
            events,
            entries,
            headers,
        })
    }

    /// Check that the document declares the supported resource schema version.
    ///
    /// Returns true only when a `resheader` named `version` holds exactly
    /// `2.0`. Any other version, a missing header or an empty header value
    /// fails, and callers must abort before extraction.
    pub fn validate_version(&self) -> bool {
        self.headers
            .iter()
            .any(|h| h.name == "version" && h.text == SUPPORTED_VERSION)
    }

    /// Number of translatable entries in the document
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in document order
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Extract the translatable values in document order.
    ///
    /// Fails with `MissingValue` / `MultipleValues` when an entry does not
    /// hold exactly one value element (treated as corruption, never guessed
    /// around), and with `EmptyValue` when a value is empty or all
    /// whitespace.
    pub fn extract_values(&self) -> Result<Vec<String>, DocumentError> {
        let mut values = Vec::with_capacity(self.entries.len());

        for entry in &self.entries {
            let value = Self::single_value(entry)?;
            values.push(value.text.clone());
        }

        Ok(values)
    }

    /// Overwrite entry values positionally with translated text.
    ///
    /// Requires exactly one value per entry; performs no mutation at all on
    /// a count mismatch. Walks entries in the same document order used by
    /// `extract_values`, so `values[i]` lands in the entry that contributed
    /// source string `i`.
    pub fn apply_values(&mut self, values: &[String]) -> Result<(), DocumentError> {
        if values.len() != self.entries.len() {
            return Err(DocumentError::CountMismatch {
                expected: self.entries.len(),
                actual: values.len(),
            });
        }

        // Resolve every rewrite target before touching the event stream
        let mut targets = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let value = Self::single_value(entry)?;
            match value.event_index {
                Some(index) => targets.push(index),
                None => {
                    return Err(DocumentError::EmptyValue {
                        key: entry.key.clone(),
                    })
                }
            }
        }

        for (i, value) in values.iter().enumerate() {
            self.events[targets[i]] = Event::Text(BytesText::new(value).into_owned());
            self.entries[i].value_texts[0].text = value.clone();
        }

        Ok(())
    }

    /// Serialize the document back to XML bytes.
    ///
    /// Every event other than substituted value text is emitted exactly as
    /// it was read.
    pub fn serialize(&self) -> Result<Vec<u8>, DocumentError> {
        let mut writer = Writer::new(Vec::new());

        for event in &self.events {
            writer
                .write_event(event.clone())
                .map_err(|e| DocumentError::Serialize(e.to_string()))?;
        }

        Ok(writer.into_inner())
    }

    // @validates: Exactly one non-empty value element per entry
    fn single_value(entry: &ResourceEntry) -> Result<&ValueText, DocumentError> {
        match entry.value_texts.as_slice() {
            [] => Err(DocumentError::MissingValue {
                key: entry.key.clone(),
            }),
            [single] => {
                if single.text.trim().is_empty() {
                    Err(DocumentError::EmptyValue {
                        key: entry.key.clone(),
                    })
                } else {
                    Ok(single)
                }
            }
            many => Err(DocumentError::MultipleValues {
                key: entry.key.clone(),
                count: many.len(),
            }),
        }
    }
}

/// Read the unescaped `name` attribute of an element, if present
fn name_attribute(element: &BytesStart) -> Result<Option<String>, DocumentError> {
    let attribute = element
        .try_get_attribute("name")
        .map_err(|e| DocumentError::Parse(e.to_string()))?;

    match attribute {
        Some(attr) => {
            let value = attr
                .unescape_value()
                .map_err(|e| DocumentError::Parse(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}
