use std::sync::Arc;

use crossterm::event::KeyCode;
use rewardsdesk::ui::components::data_table::{DataTable, TableConfig};

use super::fixtures::{key, member_columns, member_id, member_table, members, render_table, Page};

fn count_containing(lines: &[String], needle: &str) -> usize {
    lines.iter().filter(|line| line.contains(needle)).count()
}

#[test]
fn test_initial_loading_draws_skeleton_header_and_rows() {
    let mut table = member_table();
    let mut page = Page::new(Vec::new());
    page.is_loading = true;

    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "▒▒▒▒▒▒▒▒"), 5);
    assert_eq!(count_containing(&lines, "░░░░░░"), 1);
    assert_eq!(count_containing(&lines, "Name"), 0);
}

#[test]
fn test_refetching_keeps_real_header() {
    let mut table = member_table();
    let mut page = Page::new(members(1, 3));
    page.is_fetching = true;

    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "▒▒▒▒▒▒▒▒"), page.page_size);
    assert_eq!(count_containing(&lines, "Name"), 1);
    assert_eq!(count_containing(&lines, "Member 2"), 0);
}

#[test]
fn test_populated_rows_and_footer() {
    let mut table = member_table();
    let page = Page::new(members(1, 3));

    let lines = render_table(&mut table, &page, 120, 30);
    for name in ["Member 1", "Member 2", "Member 3"] {
        assert_eq!(count_containing(&lines, name), 1, "{name} missing");
    }
    assert_eq!(count_containing(&lines, "No team"), 2);
    assert_eq!(count_containing(&lines, "Showing 1 to 3 of 3"), 1);
    assert_eq!(count_containing(&lines, "Page 1 of 1"), 1);
}

#[test]
fn test_selection_shows_bulk_bar_and_count() {
    let mut table = member_table();
    let page = Page::new(members(1, 3));
    table.handle_key_events(key(KeyCode::Char(' ')), &page.props());

    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "1 of 3 selected"), 1);
    assert_eq!(count_containing(&lines, "Export"), 1);
    assert_eq!(count_containing(&lines, "Showing"), 0);
    assert_eq!(count_containing(&lines, "[x]"), 1);
}

#[test]
fn test_empty_state() {
    let mut table = member_table();
    let page = Page::new(Vec::new());

    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "No members yet"), 1);
    assert_eq!(count_containing(&lines, "Invite someone to get started."), 1);
    assert_eq!(count_containing(&lines, "Enter Reset filters"), 1);
    assert_eq!(count_containing(&lines, "Showing 0 to 0 of 0"), 1);
}

#[test]
fn test_toolbar_only_when_configured() {
    let mut bare = DataTable::new(Arc::new(TableConfig::new(member_columns())), member_id);
    let page = Page::new(members(1, 3));
    let lines = render_table(&mut bare, &page, 120, 30);
    assert!(lines[0].starts_with('╭'), "unexpected first line: {}", lines[0]);

    let mut table = member_table();
    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines[..3], "Search members"), 1);
    assert_eq!(count_containing(&lines, "Search members"), 1);
    assert_eq!(count_containing(&lines, "All roles"), 1);
}

#[test]
fn test_open_menu_is_drawn() {
    let mut table = member_table();
    let page = Page::new(members(1, 3));
    table.handle_key_events(key(KeyCode::Down), &page.props());
    table.handle_key_events(key(KeyCode::Enter), &page.props());

    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "Actions"), 1);
    assert_eq!(count_containing(&lines, "Promote"), 1);
    assert_eq!(count_containing(&lines, "Remove"), 1);
}

#[test]
fn test_menu_closes_when_row_leaves_the_page() {
    let mut table = member_table();
    let page = Page::new(members(1, 3));
    table.handle_key_events(key(KeyCode::Enter), &page.props());
    assert_eq!(table.open_menu(), Some("1"));

    let next = Page::new(members(4, 3));
    render_table(&mut table, &next, 120, 30);
    assert_eq!(table.open_menu(), None);
}

#[test]
fn test_rows_trail_in_when_animated() {
    let mut table = DataTable::new(Arc::new(super::fixtures::member_config().animation(true)), member_id);
    let page = Page::new(members(1, 3));

    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "Member 1"), 1);
    assert_eq!(count_containing(&lines, "Member 3"), 0);
    assert!(table.is_animating());

    for _ in 0..4 {
        table.tick();
    }
    let lines = render_table(&mut table, &page, 120, 30);
    assert_eq!(count_containing(&lines, "Member 3"), 1);
    assert!(!table.is_animating());
}
