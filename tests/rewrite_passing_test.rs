// Passing and neighbour note repair on hand-spelled sequences

use pitch_speller::{Accidental, Enumerator, NoteName, RewritePassing, Speller};

fn spelled(notes: &[(i32, NoteName)]) -> Enumerator {
    let mut e = Enumerator::new();
    for (i, &(p, n)) in notes.iter().enumerate() {
        e.add(p, 0, false).unwrap();
        e.rename(i, n).expect("letter should spell the pitch");
    }
    e
}

fn middle(e: &Enumerator) -> (NoteName, Accidental, i8) {
    let s = e.spelling(1).unwrap();
    (s.name, s.accidental, s.octave)
}

#[test]
fn test_lower_neighbour_cb_becomes_b() {
    use NoteName::*;
    let mut e = spelled(&[(48, C), (47, C), (48, C)]);
    assert_eq!(e.accidental(1).unwrap(), Accidental::Flat);
    assert_eq!(e.rewrite_passing(), 1);
    assert_eq!(middle(&e), (B, Accidental::Natural, 2));
}

#[test]
fn test_upper_neighbour_cs_becomes_db() {
    use NoteName::*;
    let mut e = spelled(&[(48, C), (49, C), (48, C)]);
    assert_eq!(e.rewrite_passing(), 1);
    assert_eq!(middle(&e), (D, Accidental::Flat, 3));
}

#[test]
fn test_descending_passing_from_c() {
    use NoteName::*;
    let mut e = spelled(&[(48, C), (47, C), (45, A)]);
    assert_eq!(e.rewrite_passing(), 1);
    assert_eq!(middle(&e), (B, Accidental::Natural, 2));
}

#[test]
fn test_ascending_passing_to_c() {
    use NoteName::*;
    let mut e = spelled(&[(45, A), (47, C), (48, C)]);
    assert_eq!(e.rewrite_passing(), 1);
    assert_eq!(middle(&e), (B, Accidental::Natural, 2));
}

#[test]
fn test_descending_passing_to_a() {
    use NoteName::*;
    let mut e = spelled(&[(48, C), (46, A), (45, A)]);
    assert_eq!(e.rewrite_passing(), 1);
    assert_eq!(middle(&e), (B, Accidental::Flat, 2));
}

#[test]
fn test_ascending_passing_from_a() {
    use NoteName::*;
    let mut e = spelled(&[(45, A), (46, A), (48, C)]);
    assert_eq!(e.rewrite_passing(), 1);
    assert_eq!(middle(&e), (B, Accidental::Flat, 2));
}

#[test]
fn test_only_the_pattern_is_touched() {
    use NoteName::*;
    let mut e = spelled(&[(48, C), (48, C), (47, C), (48, C), (50, D)]);
    let before = e.spelled();
    assert_eq!(e.rewrite_passing(), 1);
    let after = e.spelled();
    for i in [0, 1, 3, 4] {
        assert_eq!(before[i], after[i], "note {} changed", i);
    }
    assert_eq!(e.spelling(2).unwrap().to_string(), "B2");
}

#[test]
fn test_rewrite_is_idempotent() {
    use NoteName::*;
    let mut e = spelled(&[
        (48, C),
        (47, C),
        (48, C),
        (49, C),
        (48, C),
        (46, A),
        (45, A),
    ]);
    e.rewrite_passing();
    let once = e.spelled();
    assert_eq!(e.rewrite_passing(), 0);
    assert_eq!(e.spelled(), once);
}

#[test]
fn test_clean_line_is_left_alone() {
    use NoteName::*;
    let mut e = spelled(&[(60, C), (62, D), (64, E), (65, F), (67, G)]);
    let before = e.spelled();
    assert_eq!(e.rewrite_passing(), 0);
    assert_eq!(e.spelled(), before);
}

#[test]
fn test_rewrite_speller() {
    use NoteName::*;
    let mut rp = RewritePassing::new(spelled(&[(48, C), (49, C), (48, C)]));
    rp.spell().unwrap();
    assert_eq!(rp.name(1).unwrap(), D);
    assert_eq!(rp.accidental(1).unwrap(), Accidental::Flat);
}
