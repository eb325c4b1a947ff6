//! Serialization of KML trees to text.
//!
//! `kml::KmlWriter` emits a single unbroken line. The compact output is then
//! replayed through an indenting `quick_xml::Writer` so the files stay
//! readable and diff cleanly between runs.

use crate::core::{KmlOutput, Storage};
use crate::utils::error::Result;
use kml::{Kml, KmlDocument, KmlVersion, KmlWriter};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::io::Write;

const XML_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";
const INDENT_SIZE: usize = 2;

/// Wrap `elements` in the top-level `<kml>` container.
pub fn kml_root(elements: Vec<Kml>) -> Kml {
    Kml::KmlDocument(KmlDocument {
        version: KmlVersion::V22,
        attrs: HashMap::from([("xmlns".to_string(), KML_NAMESPACE.to_string())]),
        elements,
    })
}

/// Write `kml` to `sink` as a complete document.
///
/// Nothing reaches `sink` unless the tree serialized successfully.
pub fn write_kml<W: Write>(kml: &Kml, mut sink: W) -> Result<()> {
    let mut compact = Vec::from(XML_HEAD.as_bytes());
    KmlWriter::from_writer(&mut compact).write(kml)?;

    let mut indented = Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE);
    let mut reader = Reader::from_reader(compact.as_slice());
    let mut buf = Vec::new();
    // Whitespace-only text is layout unless it is the whole content of a leaf element.
    let mut after_start = false;
    let mut pending_blank: Option<Event<'static>> = None;
    loop {
        let event = reader.read_event_into(&mut buf)?;
        let blank =
            matches!(&event, Event::Text(text) if text.iter().all(u8::is_ascii_whitespace));
        match event {
            Event::Eof => break,
            event if blank => {
                if after_start {
                    pending_blank = Some(event.into_owned());
                }
            }
            event => {
                if let Some(blank) = pending_blank.take() {
                    if matches!(event, Event::End(_)) {
                        indented.write_event(blank)?;
                    }
                }
                after_start = matches!(event, Event::Start(_));
                indented.write_event(event)?;
            }
        }
        buf.clear();
    }

    let mut document = indented.into_inner();
    document.push(b'\n');
    sink.write_all(&document)?;
    sink.flush()?;
    Ok(())
}

/// Render `output` and store it under its file name.
///
/// Returns the path the document was written to.
pub async fn save<S: Storage>(storage: &S, base_path: &str, output: &KmlOutput) -> Result<String> {
    let mut data = Vec::new();
    write_kml(&output.document, &mut data)?;

    tracing::debug!("Writing {} ({} bytes) to storage", output.file_name, data.len());
    storage.write_file(&output.file_name, &data).await?;

    Ok(format!("{}/{}", base_path, output.file_name))
}
