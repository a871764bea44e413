use super::*;

#[test]
fn unknown_device_gets_full_budget() {
    assert_eq!(DeviceHints::default().motion_budget(), MotionBudget::Full);
}

#[test]
fn reduced_motion_preference_wins() {
    let hints = DeviceHints {
        cores: Some(16),
        memory_gb: Some(32.0),
        reduced_motion: true,
        ..DeviceHints::default()
    };
    assert_eq!(hints.motion_budget(), MotionBudget::Minimal);
}

#[test]
fn save_data_is_minimal() {
    let hints = DeviceHints { save_data: true, ..DeviceHints::default() };
    assert_eq!(hints.motion_budget(), MotionBudget::Minimal);
}

#[test]
fn few_cores_or_little_memory_is_reduced() {
    let cores = DeviceHints { cores: Some(2), ..DeviceHints::default() };
    assert_eq!(cores.motion_budget(), MotionBudget::Reduced);

    let memory = DeviceHints { cores: Some(8), memory_gb: Some(1.0), ..DeviceHints::default() };
    assert_eq!(memory.motion_budget(), MotionBudget::Reduced);
}

#[test]
fn capable_device_is_full() {
    let hints = DeviceHints { cores: Some(4), memory_gb: Some(2.0), ..DeviceHints::default() };
    assert_eq!(hints.motion_budget(), MotionBudget::Full);
}

#[test]
fn detect_without_browser_is_unknown() {
    assert_eq!(DeviceHints::detect(), DeviceHints::default());
}
