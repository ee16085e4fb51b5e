use rewardsdesk::ui::components::data_table::bulk_actions::{is_visible, request, BulkRequest};
use rewardsdesk::ui::components::data_table::{BulkActionConfig, RowSelection};

fn actions() -> Vec<BulkActionConfig> {
    vec![
        BulkActionConfig::new("export", "Export"),
        BulkActionConfig::new("remove", "Remove").destructive(),
    ]
}

fn selection(ids: &[&str]) -> RowSelection {
    let mut selection = RowSelection::new();
    for id in ids {
        selection.select(*id);
    }
    selection
}

#[test]
fn test_bar_needs_selection_and_actions() {
    assert!(!is_visible(0, &actions()));
    assert!(!is_visible(2, &[]));
    assert!(is_visible(1, &actions()));
}

#[test]
fn test_request_carries_every_selected_id() {
    // Ids selected on other pages are included
    let selected = selection(&["3", "27", "41"]);
    assert_eq!(
        request(&actions(), 1, &selected, false),
        Some(BulkRequest {
            action_id: "remove".to_string(),
            row_ids: vec!["27".to_string(), "3".to_string(), "41".to_string()],
        })
    );
}

#[test]
fn test_no_request_while_pending_or_empty() {
    let selected = selection(&["3"]);
    assert_eq!(request(&actions(), 0, &selected, true), None);
    assert_eq!(request(&actions(), 0, &RowSelection::new(), false), None);
    assert_eq!(request(&actions(), 5, &selected, false), None);
}
