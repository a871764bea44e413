use std::cell::RefCell;
use std::rc::Rc;

use super::*;

// =============================================================
// parse_external_change
// =============================================================

#[test]
fn parse_accepts_watched_key_with_valid_value() {
    assert_eq!(parse_external_change("theme", Some("theme"), Some("dark")), Some(false));
    assert_eq!(parse_external_change("theme", Some("theme"), Some("light")), Some(true));
}

#[test]
fn parse_rejects_other_keys() {
    assert_eq!(parse_external_change("theme", Some("sidebar"), Some("dark")), None);
}

#[test]
fn parse_rejects_invalid_value() {
    assert_eq!(parse_external_change("theme", Some("theme"), Some("blue")), None);
}

#[test]
fn parse_rejects_removed_key_and_cleared_storage() {
    assert_eq!(parse_external_change("theme", Some("theme"), None), None);
    assert_eq!(parse_external_change("theme", None, None), None);
}

// =============================================================
// CrossTabSync
// =============================================================

#[test]
fn deliver_notifies_subscribers_with_parsed_value() {
    let sync = CrossTabSync::new("theme");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let _sub = sync.subscribe(Box::new(move |v| sink.borrow_mut().push(v)));

    assert_eq!(sync.deliver(Some("theme"), Some("dark")), Some(false));
    assert_eq!(sync.deliver(Some("theme"), Some("blue")), None);
    assert_eq!(sync.deliver(Some("other"), Some("light")), None);

    assert_eq!(*seen.borrow(), vec![false]);
}

#[test]
fn cross_tab_sync_has_no_standing_value() {
    let sync = CrossTabSync::new("theme");
    sync.deliver(Some("theme"), Some("light"));
    assert_eq!(sync.current_value(), None);
}
