use rewardsdesk::ui::components::data_table::{HeaderCheckbox, RowSelection};

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_header_state_reflects_current_page() {
    let page = ids(&["1", "2", "3"]);
    let mut selection = RowSelection::new();
    assert_eq!(selection.header_state(&page), HeaderCheckbox::Unchecked);

    selection.select("2");
    assert_eq!(selection.header_state(&page), HeaderCheckbox::Indeterminate);

    selection.select("1");
    selection.select("3");
    assert_eq!(selection.header_state(&page), HeaderCheckbox::Checked);
}

#[test]
fn test_rows_on_other_pages_do_not_affect_header() {
    let mut selection = RowSelection::new();
    selection.select("11");
    selection.select("12");
    assert_eq!(selection.header_state(&ids(&["1", "2"])), HeaderCheckbox::Unchecked);
    assert_eq!(selection.header_state(&[]), HeaderCheckbox::Unchecked);
}

#[test]
fn test_toggle_page_keeps_other_pages() {
    let page = ids(&["1", "2"]);
    let mut selection = RowSelection::new();
    selection.select("11");
    selection.select("1");

    // Partially selected page becomes fully selected
    selection.toggle_page(&page);
    assert_eq!(selection.ids(), ids(&["1", "11", "2"]));

    // Fully selected page is cleared, other pages untouched
    selection.toggle_page(&page);
    assert_eq!(selection.ids(), ids(&["11"]));
}

#[test]
fn test_toggle_and_clear() {
    let mut selection = RowSelection::new();
    selection.toggle("7");
    assert!(selection.is_selected("7"));
    selection.toggle("7");
    assert!(selection.is_empty());

    selection.select("1");
    selection.select("1");
    assert_eq!(selection.len(), 1);
    selection.deselect("1");
    selection.select("2");
    selection.clear();
    assert!(selection.is_empty());
}

#[test]
fn test_header_symbols() {
    assert_eq!(HeaderCheckbox::Checked.symbol(), "[x]");
    assert_eq!(HeaderCheckbox::Unchecked.symbol(), "[ ]");
    assert_eq!(HeaderCheckbox::Indeterminate.symbol(), "[-]");
}
