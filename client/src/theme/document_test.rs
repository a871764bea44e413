use super::*;

#[test]
fn default_marker_is_present_only_for_dark() {
    let marker = RootMarker::default();
    assert!(marker.present_for(false));
    assert!(!marker.present_for(true));
}

#[test]
fn light_marker_inverts_presence() {
    let marker = RootMarker { class: "light-mode", marks_dark: false };
    assert!(marker.present_for(true));
    assert!(!marker.present_for(false));
}

#[test]
fn color_scheme_follows_label() {
    assert_eq!(RootMarker::color_scheme(true), "light");
    assert_eq!(RootMarker::color_scheme(false), "dark");
}

#[test]
fn recording_root_tracks_history() {
    let root = RecordingRoot::new();
    assert_eq!(root.last(), None);
    root.apply(true);
    root.apply(false);
    assert_eq!(root.applied(), vec![true, false]);
    assert_eq!(root.last(), Some(false));
}

#[test]
fn later_claim_supersedes_earlier_one() {
    let root = RecordingRoot::new();
    let first = root.claim();
    assert!(root.holds(first));

    let second = root.clone().claim();
    assert!(!root.holds(first));
    assert!(root.holds(second));
}
