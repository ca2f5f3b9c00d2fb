use super::*;

// =============================================================
// InfoPanel
// =============================================================

#[test]
fn panel_starts_closed() {
    let panel = InfoPanel::default();
    assert!(!panel.is_open());
    assert_eq!(panel.content(), None);
}

#[test]
fn opening_shows_loading_text() {
    let mut panel = InfoPanel::default();
    panel.open_info(Some(4));
    assert_eq!(panel, InfoPanel::Loading(4));
    assert_eq!(panel.content().as_deref(), Some(LOADING_TEXT));
}

#[test]
fn loaded_details_replace_loading() {
    let mut panel = InfoPanel::default();
    panel.open_info(Some(4));
    assert!(panel.info_loaded(4, "<b>Karijini</b>".to_owned()));
    assert_eq!(panel.content().as_deref(), Some("<b>Karijini</b>"));
    assert_eq!(panel.current(), Some(4));
}

#[test]
fn stale_details_are_dropped() {
    let mut panel = InfoPanel::default();
    panel.open_info(Some(4));
    panel.open_info(Some(5));
    assert!(!panel.info_loaded(4, "old".to_owned()));
    assert_eq!(panel, InfoPanel::Loading(5));
}

#[test]
fn details_after_close_are_dropped() {
    let mut panel = InfoPanel::default();
    panel.open_info(Some(4));
    panel.open_info(None);
    assert!(!panel.info_loaded(4, "late".to_owned()));
    assert!(!panel.info_failed(4, "timeout"));
    assert_eq!(panel, InfoPanel::Closed);
}

#[test]
fn failure_shows_message() {
    let mut panel = InfoPanel::default();
    panel.open_info(Some(4));
    assert!(panel.info_failed(4, "error"));
    assert_eq!(panel.content().as_deref(), Some("Error retrieving info: error"));
}

// =============================================================
// LoadingIndicator
// =============================================================

#[test]
fn indicator_starts_loading_without_title() {
    let indicator = LoadingIndicator::new();
    assert_eq!(indicator.state(), LoadState::Loading);
    assert_eq!(indicator.title(), None);
}

#[test]
fn indicator_title_is_replaced_or_cleared() {
    let mut indicator = LoadingIndicator::new();
    indicator.set_state(LoadState::Error, Some("Server unreachable"));
    assert_eq!(indicator.title(), Some("Server unreachable"));
    indicator.set_state(LoadState::Okay, Some(""));
    assert_eq!(indicator.state(), LoadState::Okay);
    assert_eq!(indicator.title(), None);
}

#[test]
fn states_map_to_icon_classes() {
    assert_eq!(LoadState::Loading.icon_class(), "icon-loading-anim");
    assert_eq!(LoadState::Okay.icon_class(), "icon-check2");
    assert_eq!(LoadState::Error.icon_class(), "icon-exclamation-triangle");
}
