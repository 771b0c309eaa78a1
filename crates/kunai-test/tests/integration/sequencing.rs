//! Opt-in envelope sequencing.

use super::helpers::*;

#[test_log::test]
fn sequenced_writer_guards_envelope() {
    let mut out = Vec::new();
    let mut writer = SequencedWriter::new(VCardWriter::new(&mut out));

    assert!(matches!(
        writer.end_vcard(),
        Err(RfcError::OutOfSequence {
            state: CardState::NotStarted,
            ..
        })
    ));

    writer.start_vcard_latest().expect("start");
    writer
        .print_content_line(&ContentLine::new("FN", PreEscaped::trusted("Jane")))
        .expect("FN");
    writer.end_vcard().expect("end");

    assert!(matches!(
        writer.print_content_line(&ContentLine::new("FN", PreEscaped::trusted("Late"))),
        Err(RfcError::OutOfSequence {
            state: CardState::Ended,
            ..
        })
    ));

    assert_eq!(
        String::from_utf8(out).expect("UTF-8"),
        "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Jane\r\nEND:VCARD\r\n"
    );
}

#[test]
fn failed_start_keeps_state() {
    let mut sink = ClosedSink;
    let mut writer = SequencedWriter::new(VCardWriter::new(&mut sink));

    assert!(matches!(
        writer.start_vcard_latest(),
        Err(RfcError::SinkWrite(_))
    ));
    assert_eq!(writer.state(), CardState::NotStarted);
}

#[test]
fn sequenced_writer_works_behind_trait_object() {
    let mut out = Vec::new();
    {
        let mut writer = SequencedWriter::new(VCardWriter::new(&mut out));
        let dynamic: &mut dyn VCardWrite = &mut writer;

        dynamic.start_vcard_latest().expect("start");
        dynamic.end_vcard().expect("end");
        assert!(dynamic.end_vcard().is_err());
    }

    assert_eq!(out, b"BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD\r\n");
}
