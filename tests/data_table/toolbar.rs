use std::collections::BTreeMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewardsdesk::ui::components::data_table::toolbar::{
    self, choices, cycle_choice, options_for, select_label, SelectChoice, Toolbar, ToolbarOutcome,
};
use rewardsdesk::ui::components::data_table::{
    DynamicFilterOptions, FilterConfig, FilterValueMap, SelectOption, ToolbarAction,
};

use super::fixtures::{ctrl, key, member_config};

fn values(pairs: &[(&str, &str)]) -> FilterValueMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn roles() -> Vec<SelectOption> {
    vec![SelectOption::new("admin", "Admin"), SelectOption::new("member", "Member")]
}

#[test]
fn test_all_choice_is_sent_as_empty_string() {
    assert_eq!(SelectChoice::All.wire_value(), "");
    assert_eq!(SelectChoice::Value("admin".to_string()).wire_value(), "admin");

    let next = toolbar::select(&values(&[("role", "admin")]), "role", &SelectChoice::All);
    assert_eq!(next.get("role").map(String::as_str), Some(""));
}

#[test]
fn test_changes_carry_the_full_map() {
    let current = values(&[("q", "ana"), ("role", "admin"), ("team", "ops")]);

    let next = toolbar::select(&current, "role", &SelectChoice::Value("member".to_string()));
    assert_eq!(next, values(&[("q", "ana"), ("role", "member"), ("team", "ops")]));

    let cleared = toolbar::clear_search(&current, "q");
    assert_eq!(cleared, values(&[("q", ""), ("role", "admin"), ("team", "ops")]));
}

#[test]
fn test_clear_affordance_only_with_text() {
    assert!(toolbar::shows_clear(&values(&[("q", "x")]), "q"));
    assert!(!toolbar::shows_clear(&values(&[("q", "")]), "q"));
    assert!(!toolbar::shows_clear(&values(&[]), "q"));
}

#[test]
fn test_dynamic_options_come_from_the_host() {
    let team = FilterConfig::dynamic_select("team", "All teams");
    let mut dynamic = DynamicFilterOptions::new();
    assert!(options_for(&team, &dynamic).is_empty());

    dynamic.insert("team".to_string(), vec![SelectOption::new("ops", "Ops")]);
    assert_eq!(options_for(&team, &dynamic), &[SelectOption::new("ops", "Ops")]);

    // Static selects ignore dynamic options
    let role = FilterConfig::select("role", "All roles", roles());
    dynamic.insert("role".to_string(), Vec::new());
    assert_eq!(options_for(&role, &dynamic).len(), 2);
}

#[test]
fn test_choices_start_with_all() {
    assert_eq!(
        choices(&roles()),
        vec![
            SelectChoice::All,
            SelectChoice::Value("admin".to_string()),
            SelectChoice::Value("member".to_string()),
        ]
    );
}

#[test]
fn test_cycle_choice_wraps() {
    let options = roles();
    assert_eq!(cycle_choice(&options, None, true), SelectChoice::Value("admin".to_string()));
    assert_eq!(cycle_choice(&options, Some("member"), true), SelectChoice::All);
    assert_eq!(cycle_choice(&options, Some(""), false), SelectChoice::Value("member".to_string()));
    // Values no longer offered restart from "all"
    assert_eq!(cycle_choice(&options, Some("gone"), true), SelectChoice::Value("admin".to_string()));
}

#[test]
fn test_select_label() {
    let role = FilterConfig::select("role", "All roles", roles());
    assert_eq!(select_label(&role, &roles(), None), "All roles");
    assert_eq!(select_label(&role, &roles(), Some("admin")), "Admin");
    assert_eq!(select_label(&role, &roles(), Some("ghost")), "ghost");

    let unnamed = FilterConfig::select("role", "", roles());
    assert_eq!(select_label(&unnamed, &roles(), Some("")), "Todos");
}

#[test]
fn test_visibility() {
    assert!(!toolbar::is_visible(&[], &[]));
    assert_eq!(toolbar::height(&[], &[]), 0);
    assert!(toolbar::is_visible(&[FilterConfig::search("q", "Search")], &[]));
    assert!(toolbar::is_visible(&[], &[ToolbarAction::new("invite", "Invite", 'i')]));
    assert_eq!(toolbar::height(&[], &[ToolbarAction::new("invite", "Invite", 'i')]), 3);
}

#[test]
fn test_typing_in_search() {
    let config = member_config();
    let dynamic = DynamicFilterOptions::new();
    let current = values(&[("role", "admin")]);
    let mut bar = Toolbar::new();

    assert!(bar.focus_search(&config.filters));
    assert!(bar.is_editing());

    let outcome = bar.handle_key(key(KeyCode::Char('a')), &config.filters, &current, &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("q", "a"), ("role", "admin")])));

    let typed = values(&[("q", "an"), ("role", "admin")]);
    let outcome = bar.handle_key(key(KeyCode::Backspace), &config.filters, &typed, &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("q", "a"), ("role", "admin")])));

    let outcome = bar.handle_key(ctrl('u'), &config.filters, &typed, &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("q", ""), ("role", "admin")])));

    // Backspace on an empty search changes nothing
    let outcome = bar.handle_key(key(KeyCode::Backspace), &config.filters, &BTreeMap::new(), &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Consumed);

    assert_eq!(
        bar.handle_key(key(KeyCode::Esc), &config.filters, &current, &dynamic),
        ToolbarOutcome::Consumed
    );
    assert!(!bar.is_focused());
}

#[test]
fn test_modified_chars_are_not_typed() {
    let config = member_config();
    let dynamic = DynamicFilterOptions::new();
    let current = values(&[("q", "ab")]);
    let mut bar = Toolbar::new();
    bar.focus_search(&config.filters);

    for modified in [ctrl('c'), KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)] {
        let outcome = bar.handle_key(modified, &config.filters, &current, &dynamic);
        assert_eq!(outcome, ToolbarOutcome::Consumed);
    }
    assert!(bar.is_editing());

    // Shifted letters are still text
    let shifted = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
    let outcome = bar.handle_key(shifted, &config.filters, &current, &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("q", "abC")])));
}

#[test]
fn test_tab_moves_between_filters() {
    let config = member_config();
    let dynamic = DynamicFilterOptions::new();
    let current = FilterValueMap::new();
    let mut bar = Toolbar::new();

    bar.focus_next(&config.filters);
    assert!(bar.is_editing(), "Search is focused first");

    bar.handle_key(key(KeyCode::Tab), &config.filters, &current, &dynamic);
    assert!(bar.is_focused() && !bar.is_editing());

    let outcome = bar.handle_key(key(KeyCode::Right), &config.filters, &current, &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("role", "admin")])));

    let outcome = bar.handle_key(key(KeyCode::Backspace), &config.filters, &values(&[("role", "admin")]), &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("role", "")])));

    // Keys a select does not use fall through to the table
    let outcome = bar.handle_key(key(KeyCode::Char('n')), &config.filters, &current, &dynamic);
    assert_eq!(outcome, ToolbarOutcome::Ignored);

    bar.handle_key(key(KeyCode::Tab), &config.filters, &current, &dynamic);
    bar.handle_key(key(KeyCode::Tab), &config.filters, &current, &dynamic);
    assert!(!bar.is_focused(), "Tab past the last filter releases focus");
}

#[test]
fn test_dynamic_select_without_options_only_offers_all() {
    let config = member_config();
    let mut bar = Toolbar::new();
    bar.focus_next(&config.filters);
    bar.focus_next(&config.filters);
    bar.focus_next(&config.filters);

    let outcome = bar.handle_key(
        key(KeyCode::Right),
        &config.filters,
        &FilterValueMap::new(),
        &DynamicFilterOptions::new(),
    );
    assert_eq!(outcome, ToolbarOutcome::Changed(values(&[("team", "")])));
}
