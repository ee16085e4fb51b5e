use ratatui::text::Line;
use rewardsdesk::ui::components::data_table::columns::truncate;
use rewardsdesk::ui::components::data_table::config::lookup_path;
use rewardsdesk::ui::components::data_table::{
    render_cell, renderer_for, Accessor, ColumnConfig, ColumnKind, ColumnType,
};
use rewardsdesk::utils::number::NumberFormat;
use serde_json::{json, Value};

use super::fixtures::{line_text, member, member_columns, Member};

fn cell(row: &Member, column: &ColumnConfig<Member>) -> Option<String> {
    render_cell(row, column).map(|line| line_text(&line))
}

fn column(id: &str) -> ColumnConfig<Member> {
    member_columns()
        .into_iter()
        .find(|c| c.id == id)
        .unwrap()
}

#[test]
fn test_registry_covers_data_types() {
    for tag in [
        ColumnType::Avatar,
        ColumnType::String,
        ColumnType::Link,
        ColumnType::Relation,
        ColumnType::Badge,
        ColumnType::Date,
        ColumnType::Number,
        ColumnType::Custom,
    ] {
        assert!(renderer_for::<Member>(tag).is_some(), "{tag:?} should have a renderer");
    }
    assert!(renderer_for::<Member>(ColumnType::Actions).is_none());
    assert!(renderer_for::<Member>(ColumnType::Selection).is_none());
}

#[test]
fn test_actions_and_selection_columns_render_nothing() {
    let row = member(2);
    assert_eq!(cell(&row, &ColumnConfig::new("actions", "", ColumnKind::Actions)), None);
    assert_eq!(cell(&row, &ColumnConfig::new("select", "", ColumnKind::Selection)), None);
}

#[test]
fn test_renderer_ignores_mismatched_kind() {
    let render = renderer_for::<Member>(ColumnType::Badge).unwrap();
    let kind = ColumnKind::String {
        value: Accessor::path("name"),
        fallback: None,
        max_width: None,
    };
    assert_eq!(render(&member(2), &kind), None);
}

#[test]
fn test_string_column() {
    let row = member(2);
    assert_eq!(cell(&row, &ColumnConfig::text("name", "Name", "name")).as_deref(), Some("Member 2"));

    let missing = ColumnConfig::new(
        "nickname",
        "Nickname",
        ColumnKind::String {
            value: Accessor::path("nickname"),
            fallback: Some("-".to_string()),
            max_width: None,
        },
    );
    assert_eq!(cell(&row, &missing).as_deref(), Some("-"));

    let short = ColumnConfig::new(
        "name",
        "Name",
        ColumnKind::String {
            value: Accessor::path("name"),
            fallback: None,
            max_width: Some(5),
        },
    );
    assert_eq!(cell(&row, &short).as_deref(), Some("Memb…"));
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("Mechanical keyboard", 8), "Mechani…");
    assert_eq!(truncate("short", 8), "short");
    assert_eq!(truncate("anything", 0), "");
    assert_eq!(truncate("Café com leite", 4), "Caf…");

    // Wide characters take two cells each
    assert_eq!(truncate("抽奖奖品", 8), "抽奖奖品");
    assert_eq!(truncate("抽奖奖品", 6), "抽奖…");
    assert_eq!(truncate("🎁🎁🎁", 4), "🎁…");
}

#[test]
fn test_avatar_column() {
    let row = member(12);
    let text = cell(&row, &column("name")).unwrap();
    assert!(text.contains(" M1 "), "Avatar chip should hold the initials: {text}");
    assert!(text.contains("Member 12"));

    let with_subtitle = ColumnConfig::new(
        "name",
        "Name",
        ColumnKind::Avatar {
            name: Accessor::path("name"),
            subtitle: Some(Accessor::path("email")),
        },
    );
    assert!(cell(&row, &with_subtitle).unwrap().contains("member12@example.com"));

    let mut nameless = row.clone();
    nameless.name = String::new();
    assert!(cell(&nameless, &column("name")).unwrap().contains(" ? "));
}

#[test]
fn test_link_column_falls_back_to_href() {
    let link = ColumnConfig::new(
        "email",
        "Email",
        ColumnKind::Link {
            label: Accessor::path("nickname"),
            href: Some(Accessor::path("email")),
        },
    );
    assert_eq!(cell(&member(3), &link).as_deref(), Some("member3@example.com"));

    let mut no_email = member(3);
    no_email.email = None;
    assert_eq!(cell(&no_email, &link), None);
}

#[test]
fn test_relation_column() {
    assert_eq!(cell(&member(2), &column("team")).as_deref(), Some("Platform"));
    // Odd members have no team
    assert_eq!(cell(&member(3), &column("team")).as_deref(), Some("No team"));
}

#[test]
fn test_badge_column() {
    assert_eq!(cell(&member(1), &column("role")).as_deref(), Some(" Admin "));
    assert_eq!(cell(&member(2), &column("role")).as_deref(), Some(" Member "));

    let mut guest = member(2);
    guest.role = "guest".to_string();
    assert_eq!(cell(&guest, &column("role")).as_deref(), Some(" guest "));
}

#[test]
fn test_date_column() {
    assert_eq!(cell(&member(2), &column("joined")).as_deref(), Some("09/03/2025"));

    let mut odd = member(2);
    odd.joined = "sometime".to_string();
    assert_eq!(cell(&odd, &column("joined")).as_deref(), Some("sometime"));

    let unix = ColumnConfig::new(
        "points",
        "When",
        ColumnKind::Date {
            value: Accessor::with(|_: &Member| Some(json!(86_400))),
            format: "%Y-%m-%d".to_string(),
            fallback: None,
        },
    );
    assert_eq!(cell(&member(2), &unix).as_deref(), Some("1970-01-02"));

    let missing = ColumnConfig::new(
        "left",
        "Left",
        ColumnKind::Date {
            value: Accessor::path("left_at"),
            format: "%Y".to_string(),
            fallback: Some("Still here".to_string()),
        },
    );
    assert_eq!(cell(&member(2), &missing).as_deref(), Some("Still here"));
}

#[test]
fn test_number_column() {
    assert_eq!(cell(&member(2), &column("points")).as_deref(), Some("2,000"));

    let from_text = ColumnConfig::new(
        "id",
        "Id",
        ColumnKind::Number {
            value: Accessor::with(|_: &Member| Some(Value::String(" 1234.5 ".to_string()))),
            format: NumberFormat::default().with_decimals(1),
            fallback: Some("n/a".to_string()),
        },
    );
    assert_eq!(cell(&member(2), &from_text).as_deref(), Some("1,234.5"));

    let not_a_number = ColumnConfig::new(
        "role",
        "Role",
        ColumnKind::Number {
            value: Accessor::path("role"),
            format: NumberFormat::default(),
            fallback: Some("n/a".to_string()),
        },
    );
    assert_eq!(cell(&member(2), &not_a_number).as_deref(), Some("n/a"));
}

#[test]
fn test_custom_column() {
    let custom = ColumnConfig::custom("double", "Double", |m: &Member| Line::from(format!("{}", m.id * 2)));
    assert_eq!(cell(&member(21), &custom).as_deref(), Some("42"));
}

#[test]
fn test_lookup_path() {
    let value = json!({ "team": { "name": "Ops", "tags": ["a", "b"] } });
    assert_eq!(lookup_path(&value, "team.name"), Some(&json!("Ops")));
    assert_eq!(lookup_path(&value, "team.tags.1"), Some(&json!("b")));
    assert_eq!(lookup_path(&value, "team.tags.9"), None);
    assert_eq!(lookup_path(&value, "team.name.first"), None);
}

#[test]
fn test_accessor_treats_null_as_missing() {
    let mut row = member(2);
    row.email = None;
    assert_eq!(Accessor::<Member>::path("email").resolve(&row), None);
    assert_eq!(
        Accessor::<Member>::path("email").resolve_text(&member(2)).as_deref(),
        Some("member2@example.com")
    );
}
