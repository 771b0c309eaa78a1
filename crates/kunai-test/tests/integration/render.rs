//! Card documents rendered end to end.

use kunai_test::app::card::read_documents;
use kunai_test::app::error::AppError;
use kunai_test::app::render::render_all;
use kunai_test::core::config::WriterConfig;

use super::helpers::*;

const DOCUMENT: &str = r#"[
  {
    "properties": [
      { "name": "FN", "value": "Jane Doe" },
      { "name": "N", "value": "Doe;Jane;;;", "raw": true },
      { "group": "item1", "name": "TEL", "value": "+1-555-0100",
        "params": [{ "name": "TYPE", "value": "cell" }, { "name": "PREF" }] },
      { "name": "CATEGORIES", "value": ["friends", "work"] }
    ]
  },
  { "version": "3.0", "properties": [{ "name": "FN", "value": "John Roe" }] }
]"#;

fn writer_config(sequenced: bool) -> WriterConfig {
    WriterConfig {
        version: "4.0".to_string(),
        sequenced,
    }
}

#[test_log::test]
fn renders_document_exactly() {
    let cards = read_documents(DOCUMENT.as_bytes()).expect("document");
    let mut out = Vec::new();
    render_all(&mut out, &cards, &writer_config(true)).expect("render");

    assert_eq!(
        String::from_utf8(out).expect("UTF-8"),
        "BEGIN:VCARD\r\n\
         VERSION:4.0\r\n\
         FN:Jane Doe\r\n\
         N:Doe;Jane;;;\r\n\
         item1.TEL;TYPE=cell;PREF:+1-555-0100\r\n\
         CATEGORIES:friends,work\r\n\
         END:VCARD\r\n\
         BEGIN:VCARD\r\n\
         VERSION:3.0\r\n\
         FN:John Roe\r\n\
         END:VCARD\r\n"
    );
}

#[test]
fn sequenced_and_plain_writers_agree() {
    let cards = read_documents(DOCUMENT.as_bytes()).expect("document");

    let mut sequenced = Vec::new();
    render_all(&mut sequenced, &cards, &writer_config(true)).expect("sequenced");

    let mut plain = Vec::new();
    render_all(&mut plain, &cards, &writer_config(false)).expect("plain");

    assert_eq!(sequenced, plain);
}

#[test]
fn closed_sink_stops_rendering() {
    let cards = read_documents(DOCUMENT.as_bytes()).expect("document");

    let err = render_all(&mut ClosedSink, &cards, &writer_config(true)).expect_err("closed");
    assert!(matches!(err, AppError::RfcError(RfcError::SinkWrite(_))));
}
