use std::collections::BTreeMap;

use super::*;
use crate::theme::store::MemoryBackend;

#[test]
fn save_then_load_returns_value() {
    let backend = MemoryBackend::new();
    let mut value = BTreeMap::new();
    value.insert("projects".to_owned(), 3_u32);
    save_json(&backend, "counts", &value);
    assert_eq!(load_json::<BTreeMap<String, u32>>(&backend, "counts"), Some(value));
}

#[test]
fn load_missing_key_is_none() {
    let backend = MemoryBackend::new();
    assert_eq!(load_json::<u32>(&backend, "absent"), None);
}

#[test]
fn load_corrupt_value_is_none() {
    let backend = MemoryBackend::new().with_entry("counts", "{not json");
    assert_eq!(load_json::<BTreeMap<String, u32>>(&backend, "counts"), None);
}

#[test]
fn save_to_unavailable_storage_is_noop() {
    let backend = MemoryBackend::new();
    backend.set_failing(true);
    save_json(&backend, "counts", &1_u32);
    backend.set_failing(false);
    assert_eq!(backend.peek("counts"), None);
}
