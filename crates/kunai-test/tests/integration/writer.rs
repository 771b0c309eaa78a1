//! Folding and content lines through the public writer API.

use super::helpers::*;

#[test_log::test]
fn vcard_with_folded_note() {
    let note = "Met at the conference; talked about caching, folding and more. ".repeat(2);

    let output = capture(|w| {
        w.start_vcard_latest().expect("start");
        w.print_content_line(&ContentLine::new("FN", PreEscaped::escape_text("Jane Doe")))
            .expect("FN");
        w.print_content_line(&ContentLine::new("NOTE", PreEscaped::escape_text(&note)))
            .expect("NOTE");
        w.end_vcard().expect("end");
    });

    let lines = physical_lines(&output);
    assert_eq!(lines[0], "BEGIN:VCARD");
    assert_eq!(lines[1], "VERSION:4.0");
    assert_eq!(lines[2], "FN:Jane Doe");
    assert_eq!(*lines.last().expect("END line"), "END:VCARD");

    // NOTE spans several physical lines, all continuations start with a space.
    let note_lines = &lines[3..lines.len() - 1];
    assert!(note_lines.len() > 1);
    assert!(note_lines[0].starts_with("NOTE:"));
    for continuation in &note_lines[1..] {
        assert!(continuation.starts_with(' '));
    }
    for line in lines.iter().copied() {
        assert!(line.strip_prefix(' ').unwrap_or(line).chars().count() <= 75);
    }

    let unfolded = output.replace("\r\n ", "");
    assert!(unfolded.contains(&format!(
        "NOTE:{}\r\n",
        note.replace(';', "\\;").replace(',', "\\,")
    )));
}

#[test]
fn print_line_is_available_to_callers() {
    let output = capture(|w| {
        w.print_line("X-CUSTOM:one").expect("line");
        w.print_line("X-CUSTOM:two").expect("line");
    });

    assert_eq!(output, "X-CUSTOM:one\r\nX-CUSTOM:two\r\n");
}

#[test]
fn unicode_value_folds_on_character_boundaries() {
    let output = capture(|w| {
        w.print_content_line(&ContentLine::new(
            "NOTE",
            PreEscaped::escape_text(&"ÄÖÜ".repeat(30)),
        ))
        .expect("NOTE");
    });

    let lines = physical_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].chars().count(), 75);
    assert_eq!(lines[1].chars().count(), 1 + 95 - 75);
}

#[test]
fn version_line_uses_given_identifier() {
    let output = capture(|w| {
        w.start_vcard(&VCardVersion::V3).expect("start");
        w.end_vcard().expect("end");
    });

    assert_eq!(output, "BEGIN:VCARD\r\nVERSION:3.0\r\nEND:VCARD\r\n");
}

#[test]
fn closed_sink_reports_write_failure() {
    let mut sink = ClosedSink;
    let mut writer = VCardWriter::new(&mut sink);

    let err = writer.start_vcard_latest().expect_err("sink is closed");
    assert!(matches!(err, RfcError::SinkWrite(_)));
    assert!(err.to_string().starts_with("Sink write failed"));
}

#[test]
fn parameters_written_in_supplied_order() {
    let output = capture(|w| {
        w.print_content_line(
            &ContentLine::new("EMAIL", PreEscaped::trusted("jane@example.com")).with_params([
                VCardParameter::pref(1),
                VCardParameter::type_param("work"),
                VCardParameter::type_param("internet"),
                VCardParameter::flag("X-PRIMARY"),
            ]),
        )
        .expect("EMAIL");
    });

    assert_eq!(
        output,
        "EMAIL;PREF=1;TYPE=work;TYPE=internet;X-PRIMARY:jane@example.com\r\n"
    );
}
