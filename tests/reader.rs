use bcbp::{
    Error,
    block::Item,
    reader::{Reader, Truncation},
};

#[test]
fn slices_by_character() {
    let r = Reader::new("M1MÜLLER/JÖRG");

    assert_eq!(r.len(), 13);
    assert_eq!(r.char_at(3), Some('Ü'));
    assert_eq!(r.get(2..8), Some("MÜLLER"));
    assert_eq!(r.inclusive(9..=12), Some("JÖRG"));
    assert_eq!(r.tail(9), Some("JÖRG"));
    assert_eq!(r.tail(13), Some(""));
}

#[test]
fn never_reads_past_the_end() {
    let r = Reader::new("M1DOE");

    assert_eq!(r.char_at(5), None);
    assert_eq!(r.get(3..6), None);
    assert_eq!(r.get(4..3), None);
    assert_eq!(r.inclusive(0..=5), None);
    assert_eq!(r.inclusive(0..=usize::MAX), None);
    assert_eq!(r.tail(6), None);
}

#[test]
fn empty_text() {
    let r = Reader::new("");

    assert!(r.is_empty());
    assert_eq!(r.get(0..0), Some(""));
    assert_eq!(r.char_at(0), None);
}

#[test]
fn gated_items() {
    let r = Reader::new(">618");
    let item = Item::new(10, 2, 2);

    assert_eq!(r.gated(0, 4, &item), Ok(Some("18")));
    assert_eq!(r.gated(0, 3, &item), Ok(None));
    assert_eq!(
        r.gated(1, 4, &item),
        Err(Error::Truncated {
            item: 10,
            needed: 5,
            found: 4,
        })
    );
}

#[test]
fn gated_items_past_the_end_can_be_absent() {
    let r = Reader::new(">618");
    let item = Item::new(10, 2, 2);

    assert_eq!(r.gated_with(1, 4, &item, Truncation::Absent), Ok(None));
    assert_eq!(r.gated_with(0, 4, &item, Truncation::Absent), Ok(Some("18")));
}

#[test]
fn gated_offsets_do_not_overflow() {
    let r = Reader::new(">618");
    let item = Item::new(10, 2, 2);

    assert_eq!(
        r.gated(usize::MAX - 1, 4, &item),
        Err(Error::Truncated {
            item: 10,
            needed: usize::MAX,
            found: 4,
        })
    );
    assert_eq!(r.gated_with(usize::MAX, 4, &item, Truncation::Absent), Ok(None));
}
