//! Parsing tests against exported-card fixtures.

use super::fixtures::*;
use crate::rfc::vcard::{EmailItem, EmailType, PhoneItem, PhoneType, VCard, parse, serialize};

/// Parses and re-serializes, returning the output lines.
fn reserialize(input: &str) -> Vec<String> {
    let mut card = parse(input);
    serialize(&mut card).lines().map(String::from).collect()
}

#[test_log::test]
fn parse_basic_card() {
    let lines = reserialize(VCARD_BASIC);
    assert_eq!(
        lines,
        vec![
            "BEGIN:VCARD",
            "VERSION:3.0",
            "FN:John Doe",
            "N:Doe;John;;;",
            "ORG:Example Corp",
            "TITLE:Software Engineer",
            "END:VCARD",
        ]
    );
}

#[test]
fn parse_item_groups_verbatim() {
    let card = parse(VCARD_ITEMS);
    let props = card.properties();

    assert_eq!(props.get("item1.X-ABLABEL"), Some("Mobile"));
    assert_eq!(
        props.get("item1.TEL;PREF=1;TYPE=CELL"),
        Some("+1-555-123-4567")
    );
    assert_eq!(
        props.get("item2.EMAIL;CHARSET=UTF-8;TYPE=WORK"),
        Some("jane@example.com")
    );
    assert_eq!(
        props.get("item3.URL;TYPE=HOME"),
        Some("https://linkedin.com/in/jane")
    );
    assert_eq!(card.next_item_index(), Some(4));
}

#[test]
fn parse_crlf_line_endings() {
    let lines = reserialize(VCARD_CRLF);
    assert_eq!(
        lines,
        vec!["BEGIN:VCARD", "VERSION:3.0", "FN:Test User", "END:VCARD"]
    );
}

#[test]
fn parse_skips_blank_lines() {
    let lines = reserialize(VCARD_BLANK_LINES);
    assert_eq!(
        lines,
        vec!["BEGIN:VCARD", "VERSION:3.0", "FN:Test User", "END:VCARD"]
    );
}

#[test]
fn parse_photo_payload() {
    let card = parse(VCARD_PHOTO);
    let photo = card
        .properties()
        .get("PHOTO;ENCODING=BASE64;TYPE=JPEG")
        .unwrap();
    assert!(photo.starts_with("iVBORw0KGgo"));
    assert!(photo.ends_with("=="));
}

#[test]
fn parse_note_with_colon() {
    let card = parse("NOTE:This is a test note with special characters: @#$%");
    assert_eq!(
        card.properties().get("NOTE"),
        Some("This is a test note with special characters: @#$%")
    );
}

#[test]
fn parse_drops_dangling_line() {
    let mut card = parse(VCARD_DANGLING_LINE);
    let output = serialize(&mut card);

    assert!(!output.contains("INVALID_LINE_WITHOUT_COLON"));
    assert_eq!(
        output,
        "BEGIN:VCARD\nVERSION:3.0\nFN:Test User\nEND:VCARD"
    );
}

#[test]
fn parse_keeps_key_case() {
    let card = parse("fn:lower\nFN:upper\nFn:mixed");
    assert_eq!(card.properties().len(), 3);
    assert_eq!(card.properties().get("fn"), Some("lower"));
    assert_eq!(card.properties().get("Fn"), Some("mixed"));
}

#[test]
fn adder_after_gap_uses_max_plus_one() {
    let mut card = parse(VCARD_ITEM_GAP);
    card.add_phone(PhoneItem::new("New Phone", "+1-555-999-8888", PhoneType::Cell));

    let output = serialize(&mut card);
    assert!(output.contains("item4.X-ABLABEL:New Phone"));
    assert!(output.contains("item4.TEL;PREF=1;TYPE=cell:+1-555-999-8888"));
    assert!(!output.contains("item2."));
}

#[test]
fn parse_complex_card() {
    let card = parse(VCARD_COMPLEX);
    let props = card.properties();

    assert_eq!(props.len(), 20);
    assert_eq!(props.get("NOTE"), Some("Experienced developer with 10+ years"));
    assert_eq!(
        props.get("item6.ADR;CHARSET=UTF-8"),
        Some("123 Oak Street;Springfield;IL;62701;USA")
    );
    assert_eq!(card.next_item_index(), Some(7));
}

#[test]
fn modify_after_parse() {
    let mut card = VCard::from("BEGIN:VCARD\nVERSION:3.0\nFN:Original Name\nEND:VCARD");
    card.set_name(Some("Modified"), Some("Name"))
        .set_organization(Some("New Company"))
        .add_email(EmailItem::new("New Email", "new@example.com", EmailType::Work));

    assert_eq!(
        card.to_vcard_string(),
        "BEGIN:VCARD\n\
         VERSION:3.0\n\
         FN:Modified Name\n\
         END:VCARD\n\
         N:Name;Modified;;;\n\
         ORG:New Company\n\
         item1.X-ABLABEL:New Email\n\
         item1.EMAIL;CHARSET=UTF-8;TYPE=work:new@example.com"
    );
}

#[test]
fn raw_newline_in_value_splits_on_reparse() {
    let mut card = VCard::new();
    card.set_note(Some("first line\nsecond: line"));

    let mut reparsed = parse(&card.to_vcard_string());
    assert_eq!(reparsed.properties().get("NOTE"), Some("first line"));
    assert_eq!(reparsed.properties().get("second"), Some(" line"));
    assert!(reparsed.to_vcard_string().contains("second: line"));
}
