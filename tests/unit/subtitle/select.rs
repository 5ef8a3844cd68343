use super::*;

fn subs() -> Vec<Subtitle> {
    vec![Subtitle::new(0.0, 2.0, "A"), Subtitle::new(2.0, 5.0, "B")]
}

#[test]
fn start_is_inclusive_and_end_exclusive() {
    let subs = subs();
    assert_eq!(active_subtitle(&subs, 0.0).unwrap().text, "A");
    assert_eq!(active_subtitle(&subs, 1.999).unwrap().text, "A");
    assert_eq!(active_subtitle(&subs, 2.0).unwrap().text, "B");
    assert_eq!(active_subtitle(&subs, 4.999).unwrap().text, "B");
}

#[test]
fn none_outside_every_interval() {
    let subs = subs();
    assert!(active_subtitle(&subs, 5.0).is_none());
    assert!(active_subtitle(&subs, -0.1).is_none());
    assert!(active_subtitle(&[], 1.0).is_none());
}

#[test]
fn gaps_yield_none() {
    let subs = vec![Subtitle::new(0.0, 1.0, "A"), Subtitle::new(3.0, 4.0, "B")];
    assert!(active_subtitle(&subs, 2.0).is_none());
}

#[test]
fn overlaps_resolve_to_lowest_index() {
    let subs = vec![
        Subtitle::new(1.0, 4.0, "late-listed-first"),
        Subtitle::new(0.0, 5.0, "wide"),
    ];
    assert_eq!(active_subtitle(&subs, 2.0).unwrap().text, "late-listed-first");
    assert_eq!(active_subtitle(&subs, 0.5).unwrap().text, "wide");
}

#[test]
fn unsorted_input_still_matches() {
    let subs = vec![Subtitle::new(4.0, 6.0, "second"), Subtitle::new(0.0, 2.0, "first")];
    assert_eq!(active_subtitle(&subs, 1.0).unwrap().text, "first");
    assert_eq!(active_subtitle(&subs, 5.0).unwrap().text, "second");
}

#[test]
fn selection_matches_brute_force_membership() {
    let subs = vec![
        Subtitle::new(0.0, 1.5, "a"),
        Subtitle::new(1.0, 2.0, "b"),
        Subtitle::new(2.5, 3.0, "c"),
    ];
    for i in -10..40 {
        let t = f64::from(i) * 0.1;
        let expected = subs.iter().position(|s| s.start <= t && t < s.end);
        let got = active_subtitle(&subs, t).map(|s| s.text.as_str());
        assert_eq!(got, expected.map(|i| subs[i].text.as_str()), "t={t}");
    }
}
