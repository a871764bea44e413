use super::*;
use crate::theme::signal::ManualSignal;
use crate::theme::sync::CrossTabSync;

struct Harness {
    backend: MemoryBackend,
    system: ManualSignal,
    sync: CrossTabSync,
    root: RecordingRoot,
}

impl Harness {
    fn new(system: Option<bool>) -> Self {
        Self {
            backend: MemoryBackend::new(),
            system: ManualSignal::new(system),
            sync: CrossTabSync::new(ThemeScope::site().storage_key),
            root: RecordingRoot::new(),
        }
    }

    fn with_stored(self, value: &str) -> Self {
        let backend = self.backend.with_entry(ThemeScope::site().storage_key, value);
        Self { backend, ..self }
    }

    fn build(&self, scope: ThemeScope) -> ThemeContext {
        ThemeContext::new(
            scope,
            ThemeParts {
                backend: Box::new(self.backend.clone()),
                system: Box::new(self.system.clone()),
                external: Box::new(self.sync.clone()),
                root: Box::new(self.root.clone()),
            },
        )
    }

    fn site(&self) -> ThemeContext {
        self.build(ThemeScope::site())
    }
}

// =============================================================
// Initialization
// =============================================================

#[test]
fn init_without_stored_value_follows_system() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    assert_eq!(ctx.preference(), Preference::system(true));
    assert_eq!(h.root.applied(), vec![true]);
}

#[test]
fn init_with_stored_value_is_user_provenance() {
    let h = Harness::new(Some(true)).with_stored("dark");
    let ctx = h.site();
    assert_eq!(ctx.preference(), Preference::user(false));
    assert_eq!(h.root.last(), Some(false));
}

#[test]
fn init_with_malformed_stored_value_falls_back_to_system() {
    let h = Harness::new(Some(false)).with_stored("blue");
    let ctx = h.site();
    assert_eq!(ctx.preference(), Preference::system(false));
}

#[test]
fn init_with_unavailable_storage_falls_back_to_system() {
    let h = Harness::new(Some(false)).with_stored("light");
    h.backend.set_failing(true);
    let ctx = h.site();
    assert_eq!(ctx.preference(), Preference::system(false));
}

#[test]
fn init_without_media_query_support_uses_scope_fallback() {
    let h = Harness {
        system: ManualSignal::unsupported(),
        ..Harness::new(None)
    };
    let ctx = h.site();
    assert_eq!(ctx.preference(), Preference::system(ThemeScope::site().fallback_light));
    assert_eq!(ctx.attached_signals(), 1);
}

#[test]
fn init_never_writes_storage() {
    let h = Harness::new(Some(true));
    let _ctx = h.site();
    assert_eq!(h.backend.writes(), 0);
}

// =============================================================
// Explicit transitions
// =============================================================

#[test]
fn toggle_twice_restores_value_and_stays_user() {
    for system in [true, false] {
        let h = Harness::new(Some(system));
        let ctx = h.site();
        let original = ctx.is_light();

        ctx.toggle();
        assert_eq!(ctx.is_light(), !original);
        ctx.toggle();

        assert_eq!(ctx.is_light(), original);
        assert_eq!(ctx.provenance(), Provenance::User);
    }
}

#[test]
fn toggle_persists_each_choice() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    ctx.toggle();
    assert_eq!(h.backend.peek("theme").as_deref(), Some("dark"));
    assert_eq!(h.backend.writes(), 1);
    assert_eq!(h.root.last(), Some(false));
}

#[test]
fn set_light_is_seen_by_fresh_instance() {
    for value in [true, false] {
        let h = Harness::new(Some(!value));
        {
            let ctx = h.site();
            ctx.set_light(value);
        }
        let fresh = h.site();
        assert_eq!(fresh.preference(), Preference::user(value));
    }
}

#[test]
fn set_light_with_failing_storage_still_applies() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    h.backend.set_failing(true);
    ctx.set_light(false);
    assert_eq!(ctx.preference(), Preference::user(false));
    assert_eq!(h.root.last(), Some(false));
}

// =============================================================
// System signal
// =============================================================

#[test]
fn system_changes_update_value_without_writing() {
    let h = Harness::new(Some(true));
    let ctx = h.site();

    h.system.emit(false);
    assert_eq!(ctx.preference(), Preference::system(false));
    h.system.emit(true);
    assert_eq!(ctx.preference(), Preference::system(true));

    assert_eq!(h.backend.writes(), 0);
    assert_eq!(h.root.applied(), vec![true, false, true]);
}

#[test]
fn system_changes_ignored_after_user_choice() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    ctx.set_light(true);

    h.system.emit(false);

    assert_eq!(ctx.preference(), Preference::user(true));
}

#[test]
fn system_changes_ignored_when_stored_value_present() {
    let h = Harness::new(Some(true)).with_stored("light");
    let ctx = h.site();
    h.system.emit(false);
    assert!(ctx.is_light());
}

// =============================================================
// Cross-tab sync
// =============================================================

#[test]
fn external_dark_write_is_adopted_as_user_without_local_write() {
    let h = Harness::new(Some(true));
    let ctx = h.site();

    h.sync.deliver(Some("theme"), Some("dark"));

    assert_eq!(ctx.preference(), Preference::user(false));
    assert_eq!(h.backend.writes(), 0);
    assert_eq!(h.root.last(), Some(false));
}

#[test]
fn external_invalid_write_is_ignored() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    let before = ctx.preference();

    h.sync.deliver(Some("theme"), Some("blue"));

    assert_eq!(ctx.preference(), before);
    assert_eq!(h.root.applied(), vec![true]);
}

#[test]
fn external_write_stops_system_following() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    h.sync.deliver(Some("theme"), Some("light"));
    h.system.emit(false);
    assert_eq!(ctx.preference(), Preference::user(true));
}

// =============================================================
// Observers
// =============================================================

#[test]
fn observers_see_every_transition_until_dropped() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = ctx.observe(move |p| sink.borrow_mut().push(p));

    h.system.emit(false);
    ctx.toggle();
    drop(sub);
    ctx.toggle();

    assert_eq!(*seen.borrow(), vec![Preference::system(false), Preference::user(true)]);
}

// =============================================================
// Teardown and scopes
// =============================================================

#[test]
fn drop_deregisters_listeners() {
    let h = Harness::new(Some(true));
    let ctx = h.site();
    assert_eq!(h.system.listener_count(), 1);
    assert_eq!(h.sync.listener_count(), 1);

    drop(ctx);

    assert_eq!(h.system.listener_count(), 0);
    assert_eq!(h.sync.listener_count(), 0);
    h.system.emit(false);
    assert_eq!(h.root.applied(), vec![true]);
}

#[test]
fn site_scope_leaves_document_untouched_on_drop() {
    let h = Harness::new(Some(false));
    drop(h.site());
    assert_eq!(h.root.applied(), vec![false]);
}

#[test]
fn admin_scope_defaults_dark_and_ignores_system() {
    let h = Harness::new(Some(true));
    let ctx = h.build(ThemeScope::admin());

    assert_eq!(ctx.preference(), Preference::system(false));
    assert_eq!(h.system.listener_count(), 0);
    h.system.emit(true);
    assert!(!ctx.is_light());
}

#[test]
fn admin_scope_restores_light_on_drop() {
    let h = Harness::new(None);
    let ctx = h.build(ThemeScope::admin());
    ctx.set_light(false);
    drop(ctx);
    assert_eq!(h.root.applied(), vec![false, false, true]);
    assert_eq!(h.backend.peek("admin-theme").as_deref(), Some("dark"));
}

// =============================================================
// Route changes: incoming page mounts before the outgoing one drops
// =============================================================

#[test]
fn admin_teardown_after_site_mount_keeps_site_marker() {
    let h = Harness::new(Some(false));
    let admin = h.build(ThemeScope::admin());
    let site = h.site();
    assert!(!site.is_light());

    drop(admin);

    assert_eq!(h.root.last(), Some(site.is_light()));
    assert_eq!(h.root.applied(), vec![false, false]);
}

#[test]
fn admin_teardown_after_light_site_mount_applies_nothing() {
    let h = Harness::new(Some(true)).with_stored("light");
    let admin = h.build(ThemeScope::admin());
    let site = h.site();

    drop(admin);

    assert_eq!(h.root.applied(), vec![false, true]);
    assert!(site.is_light());
}

#[test]
fn site_teardown_after_admin_mount_keeps_admin_marker() {
    let h = Harness::new(Some(true));
    let site = h.site();
    let admin = h.build(ThemeScope::admin());

    drop(site);
    assert_eq!(h.root.last(), Some(false));

    drop(admin);
    assert_eq!(h.root.last(), Some(true));
}

#[test]
fn site_transitions_after_admin_drop_still_reach_document() {
    let h = Harness::new(Some(false));
    let admin = h.build(ThemeScope::admin());
    let site = h.site();
    drop(admin);

    h.system.emit(true);
    assert!(site.is_light());
    assert_eq!(h.root.last(), Some(true));
}

#[test]
fn inert_contexts_resolve_to_unresolved_preference() {
    for scope in [ThemeScope::site(), ThemeScope::admin()] {
        let ctx = ThemeContext::new(scope, ThemeParts::inert());
        assert_eq!(ctx.preference(), scope.unresolved());
    }
}

#[test]
fn inert_parts_build_a_usable_context() {
    let ctx = ThemeContext::new(ThemeScope::site(), ThemeParts::inert());
    assert_eq!(ctx.preference(), Preference::system(true));
    assert_eq!(ctx.attached_signals(), 0);
    ctx.toggle();
    assert_eq!(ctx.preference(), Preference::user(false));
}
