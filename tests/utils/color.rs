use rewardsdesk::utils::color::avatar_color;

#[test]
fn test_avatar_color_is_stable() {
    assert_eq!(avatar_color("Ana Souza"), avatar_color("Ana Souza"));
}

#[test]
fn test_avatar_color_spreads_names() {
    let names = ["Ana", "Bruno", "Carla", "Diego", "Elisa", "Fábio", "Gabi", "Heitor"];
    let mut colors: Vec<_> = names.iter().map(|name| format!("{:?}", avatar_color(name))).collect();
    colors.sort();
    colors.dedup();
    assert!(colors.len() > 1, "Different names should not all share a colour");
}
