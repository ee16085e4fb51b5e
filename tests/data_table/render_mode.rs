use rewardsdesk::ui::components::data_table::RenderMode;

#[test]
fn test_derive_modes() {
    assert_eq!(RenderMode::derive(true, true, 0), RenderMode::InitialLoading);
    assert_eq!(RenderMode::derive(false, true, 4), RenderMode::Refetching);
    assert_eq!(RenderMode::derive(true, true, 4), RenderMode::Refetching);
    assert_eq!(RenderMode::derive(false, true, 0), RenderMode::Empty);
    assert_eq!(RenderMode::derive(false, false, 0), RenderMode::Empty);
    assert_eq!(RenderMode::derive(false, false, 4), RenderMode::Populated);
}

#[test]
fn test_skeleton_rows() {
    // First load always draws five rows, whatever the page size
    assert_eq!(RenderMode::InitialLoading.skeleton_rows(50), Some(5));
    assert_eq!(RenderMode::Refetching.skeleton_rows(20), Some(20));
    assert_eq!(RenderMode::Empty.skeleton_rows(20), None);
    assert_eq!(RenderMode::Populated.skeleton_rows(20), None);
}

#[test]
fn test_header_and_interaction() {
    assert!(!RenderMode::InitialLoading.shows_real_header());
    assert!(RenderMode::Refetching.shows_real_header());
    assert!(RenderMode::Populated.is_interactive());
    assert!(!RenderMode::Refetching.is_interactive());
    assert!(!RenderMode::Empty.is_interactive());
}
