// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the toast store through its public API.

use iced_toasted::config::{self, Config, Edge, LayoutConfig};
use iced_toasted::store::{Change, ToastStore};
use iced_toasted::toast::{Toast, ToastKind};
use iced_toasted::ui::toaster::Toaster;
use std::time::{Duration, Instant};
use tempfile::tempdir;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn is_pseudo_uuid(id: &str) -> bool {
    let bytes = id.as_bytes();
    bytes.len() == 36
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => *b == b'-',
            14 => *b == b'4',
            19 => b"89ab".contains(b),
            _ => b.is_ascii_digit() || (b'a'..=b'f').contains(b),
        })
}

#[test]
fn submit_without_id_generates_pseudo_uuid() {
    let (mut store, _sender) = ToastStore::channel();
    store.submit(Toast::info("no id", 0), Instant::now());
    store.submit(Toast::info("empty id", 0).with_id(""), Instant::now());

    let ids: Vec<&str> = store.toasts().map(|t| t.id()).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|id| is_pseudo_uuid(id)), "{ids:?}");
    assert_ne!(ids[0], ids[1]);
}

#[test]
fn distinct_ids_are_tracked_in_submission_order() {
    let (mut store, _sender) = ToastStore::channel();
    let now = Instant::now();
    store.submit(Toast::info("one", 0).with_id("1"), now);
    store.submit(Toast::warning("two", 0).with_id("2"), now);

    let ids: Vec<&str> = store.toasts().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn matching_id_updates_without_moving() {
    let (mut store, _sender) = ToastStore::channel();
    let now = Instant::now();
    store.submit(Toast::info("one", 0).with_id("1"), now);
    store.submit(Toast::info("two", 0).with_id("2"), now);
    store.submit(Toast::info("three", 0).with_id("3"), now);

    let change = store.submit(Toast::error("two, again", 500).with_id("2"), now);
    assert_eq!(
        change,
        Change::Updated {
            id: "2".to_string(),
            index: 1
        }
    );
    assert_eq!(store.len(), 3);

    let middle = store.toasts().nth(1).unwrap().toast();
    assert_eq!(middle.message, "two, again");
    assert_eq!(middle.kind, ToastKind::Error);
    assert_eq!(middle.duration, 500);
}

#[test]
fn toast_expires_after_its_duration() {
    let (mut store, _sender) = ToastStore::channel();
    let start = Instant::now();
    store.submit(Toast::success("done", 100), start);
    assert_eq!(store.len(), 1);

    store.tick(start + ms(50));
    assert_eq!(store.len(), 1);

    store.tick(start + ms(100));
    assert!(store.is_empty());
}

#[test]
fn resubmission_postpones_expiry() {
    let (mut store, _sender) = ToastStore::channel();
    let start = Instant::now();
    store.submit(Toast::info("first", 100).with_id("job"), start);
    store.submit(Toast::info("second", 300).with_id("job"), start + ms(80));

    // old deadline passed, but it was cancelled
    store.tick(start + ms(120));
    assert_eq!(store.len(), 1);

    store.tick(start + ms(379));
    assert_eq!(store.len(), 1);

    store.tick(start + ms(380));
    assert!(store.is_empty());
}

#[test]
fn zero_duration_never_expires() {
    let (mut store, _sender) = ToastStore::channel();
    let start = Instant::now();
    store.submit(Toast::error("sticky", 0), start);

    for hours in 1..=24 {
        store.tick(start + Duration::from_secs(hours * 3_600));
    }
    assert_eq!(store.len(), 1);
    assert_eq!(store.pending_timers(), 0);
}

#[test]
fn teardown_silences_timers_and_source() {
    let (mut store, sender) = ToastStore::channel();
    let start = Instant::now();
    for i in 0..5u64 {
        store.submit(Toast::info(format!("toast {i}"), 10 * (i as i64 + 1)), start);
    }
    assert_eq!(store.pending_timers(), 5);

    store.teardown();
    assert_eq!(store.pending_timers(), 0);
    assert!(store.tick(start + ms(10_000)).is_empty());
    assert_eq!(store.len(), 5);

    assert!(sender.send(Toast::info("after teardown", 0)).is_err());
    store.teardown();
}

#[test]
fn dropping_the_store_unsubscribes() {
    let (store, sender) = ToastStore::channel();
    drop(store);
    assert!(!sender.is_subscribed());
}

#[test]
fn background_thread_can_deliver() {
    let (mut store, sender) = ToastStore::channel();
    let worker = std::thread::spawn(move || {
        sender
            .send(Toast::success("from worker", 0))
            .expect("store is subscribed");
    });
    worker.join().unwrap();

    store.tick(Instant::now());
    assert_eq!(store.len(), 1);
}

#[test]
fn toaster_uses_saved_layout() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let saved = Config {
        layout: LayoutConfig {
            align: Edge::End,
            justify: Edge::End,
            reverse: true,
        },
        ..Config::default()
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(warning, None);

    let (mut toaster, _sender) = Toaster::channel(&loaded);
    assert_eq!(toaster.layout(), saved.layout);

    let now = Instant::now();
    toaster.push(Toast::info("old", 0).with_id("old"), now);
    toaster.push(Toast::info("new", 0).with_id("new"), now);
    let shown: Vec<&str> = toaster
        .cards(now)
        .iter()
        .filter_map(|card| card.toast.id())
        .collect();
    assert_eq!(shown, vec!["new", "old"]);
}
