use rewardsdesk::ui::components::data_table::trail::{Reveal, RowTrail};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_rows_enter_one_after_another() {
    let mut trail = RowTrail::new();
    trail.observe(&ids(&["a", "b", "c"]));

    assert_eq!(trail.reveal("a"), Reveal::Entering);
    assert_eq!(trail.reveal("b"), Reveal::Hidden);
    assert!(!trail.is_settled());

    trail.advance();
    assert_eq!(trail.reveal("b"), Reveal::Entering);
    assert_eq!(trail.reveal("c"), Reveal::Hidden);

    for _ in 0..4 {
        trail.advance();
    }
    assert_eq!(trail.reveal("c"), Reveal::Shown);
    assert!(trail.is_settled());
}

#[test]
fn test_known_rows_stay_shown() {
    let mut trail = RowTrail::new();
    trail.observe(&ids(&["a"]));
    for _ in 0..3 {
        trail.advance();
    }
    trail.observe(&ids(&["a", "b"]));
    assert_eq!(trail.reveal("a"), Reveal::Shown);
    assert_eq!(trail.reveal("b"), Reveal::Entering);
}

#[test]
fn test_rows_leaving_the_page_are_forgotten() {
    let mut trail = RowTrail::new();
    trail.observe(&ids(&["a"]));
    trail.observe(&ids(&["b"]));
    assert_eq!(trail.reveal("a"), Reveal::Hidden);
}
