use rewardsdesk::ui::components::data_table::pagination::{step_page_size, NavButton, NavState};
use rewardsdesk::ui::components::data_table::{visible_range, PaginationState, VisibleRange};

fn state(current_page: usize, page_size: usize, total_count: usize, selected_count: usize) -> PaginationState {
    PaginationState {
        total_count,
        page_count: total_count.div_ceil(page_size).max(1),
        current_page,
        page_size,
        selected_count,
    }
}

#[test]
fn test_visible_range_middle_page() {
    assert_eq!(visible_range(2, 20, 45), VisibleRange { from: 21, to: 40 });
}

#[test]
fn test_visible_range_last_page_is_clamped() {
    assert_eq!(visible_range(3, 20, 45), VisibleRange { from: 41, to: 45 });
}

#[test]
fn test_visible_range_without_rows() {
    assert_eq!(visible_range(1, 10, 0), VisibleRange { from: 0, to: 0 });
}

#[test]
fn test_label_shows_range_or_selection() {
    assert_eq!(state(2, 20, 45, 0).label(), "Showing 21 to 40 of 45");
    assert_eq!(state(2, 20, 45, 3).label(), "3 of 45 selected");
}

#[test]
fn test_nav_on_first_page() {
    assert_eq!(
        state(1, 20, 45, 0).nav(),
        NavState {
            first: false,
            previous: false,
            next: true,
            last: true,
        }
    );
}

#[test]
fn test_nav_on_last_page() {
    let nav = state(3, 20, 45, 0).nav();
    assert!(nav.first && nav.previous);
    assert!(!nav.next && !nav.last);
}

#[test]
fn test_single_page_disables_everything() {
    let nav = state(1, 10, 4, 0).nav();
    assert!(!nav.first && !nav.previous && !nav.next && !nav.last);
}

#[test]
fn test_button_targets() {
    let middle = state(2, 20, 45, 0);
    assert_eq!(middle.target(NavButton::First), Some(1));
    assert_eq!(middle.target(NavButton::Previous), Some(1));
    assert_eq!(middle.target(NavButton::Next), Some(3));
    assert_eq!(middle.target(NavButton::Last), Some(3));

    let first = state(1, 20, 45, 0);
    assert_eq!(first.target(NavButton::Previous), None);
    assert_eq!(first.target(NavButton::First), None);
}

#[test]
fn test_step_page_size() {
    let options = [10, 20, 50, 100];
    assert_eq!(step_page_size(&options, 10, true), Some(20));
    assert_eq!(step_page_size(&options, 20, false), Some(10));
    assert_eq!(step_page_size(&options, 100, true), None);
    assert_eq!(step_page_size(&options, 10, false), None);
    // Sizes outside the list move to the nearest offered one
    assert_eq!(step_page_size(&options, 30, true), Some(50));
    assert_eq!(step_page_size(&options, 30, false), Some(20));
}
