use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn keep_alive_returns_same_instance() {
    let cache = ViewCache::default();
    let first = cache.retain(ViewId::Generate, true, || Arc::new(AtomicUsize::new(0)));
    first.fetch_add(3, Ordering::Relaxed);

    let second = cache.retain(ViewId::Generate, true, || Arc::new(AtomicUsize::new(0)));
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.load(Ordering::Relaxed), 3);
}

#[test]
fn keep_alive_runs_init_once() {
    let cache = ViewCache::default();
    let mut calls = 0;
    for _ in 0..3 {
        let _: u32 = cache.retain(ViewId::Generate, true, || {
            calls += 1;
            7
        });
    }
    assert_eq!(calls, 1);
}

#[test]
fn without_keep_alive_state_is_fresh_and_unstored() {
    let cache = ViewCache::default();
    let first = cache.retain(ViewId::Profile, false, || Arc::new(AtomicUsize::new(1)));
    let second = cache.retain(ViewId::Profile, false, || Arc::new(AtomicUsize::new(1)));
    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!cache.contains(ViewId::Profile));
}

#[test]
fn views_have_separate_slots() {
    let cache = ViewCache::default();
    let _: u32 = cache.retain(ViewId::Generate, true, || 1);
    let other: u32 = cache.retain(ViewId::Login, true, || 2);
    assert_eq!(other, 2);
}

#[test]
fn mismatched_type_is_replaced() {
    let cache = ViewCache::default();
    let _: u32 = cache.retain(ViewId::Generate, true, || 1);
    let text: String = cache.retain(ViewId::Generate, true, || "draft".to_owned());
    assert_eq!(text, "draft");
    let again: String = cache.retain(ViewId::Generate, true, String::new);
    assert_eq!(again, "draft");
}

#[test]
fn evict_all_drops_state() {
    let cache = ViewCache::default();
    let _: u32 = cache.retain(ViewId::Generate, true, || 1);
    let _: u32 = cache.retain(ViewId::Login, true, || 1);

    cache.evict_all();
    assert!(!cache.contains(ViewId::Generate));
    assert!(!cache.contains(ViewId::Login));
    let fresh: u32 = cache.retain(ViewId::Generate, true, || 9);
    assert_eq!(fresh, 9);
}

#[test]
fn clones_share_slots() {
    let cache = ViewCache::default();
    let shared = cache.clone();
    let _: u32 = cache.retain(ViewId::Generate, true, || 5);
    assert!(shared.contains(ViewId::Generate));
}

#[test]
fn init_may_use_the_cache() {
    let cache = ViewCache::default();
    let outer: u32 = cache.retain(ViewId::Generate, true, || {
        let inner: u32 = cache.retain(ViewId::Profile, true, || 4);
        inner + 1
    });
    assert_eq!(outer, 5);
    assert!(cache.contains(ViewId::Profile));
}

#[test]
fn value_stored_during_init_wins() {
    let cache = ViewCache::default();
    let kept: u32 = cache.retain(ViewId::Generate, true, || {
        let _: u32 = cache.retain(ViewId::Generate, true, || 1);
        2
    });
    assert_eq!(kept, 1);
    let again: u32 = cache.retain(ViewId::Generate, true, || 3);
    assert_eq!(again, 1);
}
