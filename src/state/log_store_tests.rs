//! Tests for the log store.

use super::*;
use crate::model::Severity;
use crate::view_state::{visible_range, RecordIndex};
use std::thread;

fn record(severity: i32, message: &str) -> LogRecord {
    LogRecord::new(severity, "src/engine/main.rs", 10, message)
}

fn filled(n: usize) -> LogStore {
    let store = LogStore::new();
    for i in 0..n {
        store.append(record(Severity::INFO_CODE, &format!("message {i}")));
    }
    store
}

#[test]
fn new_store_is_empty() {
    let store = LogStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.get(0).is_none());
}

#[test]
fn append_preserves_insertion_order() {
    let store = LogStore::new();
    store.append(record(Severity::INFO_CODE, "first"));
    store.append(record(Severity::ERROR_CODE, "second"));
    store.append(record(99, "third"));

    let messages: Vec<String> = store
        .snapshot()
        .iter()
        .map(|r| r.message().to_string())
        .collect();
    assert_eq!(messages, vec!["first", "second", "third"]);
}

#[test]
fn labels_follow_severity_table() {
    let store = LogStore::new();
    for code in [Severity::INFO_CODE, Severity::ERROR_CODE, 99] {
        store.append(record(code, "x"));
    }
    let labels: Vec<&str> = store
        .snapshot()
        .iter()
        .map(|r| r.severity().label())
        .collect();
    assert_eq!(labels, vec!["INFO", "ERROR", "INVALID"]);
}

#[test]
fn sink_converts_events_into_records() {
    let store = LogStore::new();
    store.on_log(LogEvent {
        severity: Severity::WARNING_CODE,
        file: "C:\\game\\src\\audio.cpp".to_string(),
        line: 77,
        message: "buffer underrun".to_string(),
        ..LogEvent::default()
    });

    let stored = store.get(0).unwrap();
    assert_eq!(stored.severity(), Severity::Warning);
    assert_eq!(stored.source(), "audio.cpp:77");
}

#[test]
fn snapshot_visible_copies_only_the_range() {
    let store = filled(1000);

    let slice = store.snapshot_visible(|total| visible_range(total, 20.0, 4000.0, 200.0, false));

    assert_eq!(slice.total, 1000);
    assert_eq!(slice.range.start_index, RecordIndex::new(200));
    assert_eq!(slice.records.len(), 10);
    assert_eq!(slice.records[0].message(), "message 200");
    assert_eq!(slice.records[9].message(), "message 209");
}

#[test]
fn snapshot_visible_clamps_out_of_bounds_range() {
    let store = filled(3);

    let slice = store.snapshot_visible(|_| {
        VisibleRange::new(RecordIndex::new(2), RecordIndex::new(50))
    });

    assert_eq!(slice.range.end_index, RecordIndex::new(3));
    assert_eq!(slice.records.len(), 1);
}

#[test]
fn snapshot_visible_on_empty_store() {
    let store = LogStore::new();
    let slice = store.snapshot_visible(|total| visible_range(total, 20.0, 0.0, 200.0, true));
    assert_eq!(slice.total, 0);
    assert!(slice.records.is_empty());
}

#[test]
fn concurrent_appends_lose_nothing() {
    // GIVEN a store shared by several producer threads
    let store = Arc::new(LogStore::new());
    let producers = 8;
    let per_producer = 500;

    // WHEN each thread appends concurrently with a reader
    let handles: Vec<_> = (0..producers)
        .map(|p| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..per_producer {
                    store.append(record(Severity::INFO_CODE, &format!("{p}:{i}")));
                }
            })
        })
        .collect();
    let reader = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for _ in 0..100 {
                let slice = store.snapshot_visible(|total| {
                    visible_range(total, 1.0, 0.0, 20.0, true)
                });
                assert!(slice.range.end_index.get() <= slice.total);
                assert_eq!(slice.records.len(), slice.range.len());
            }
        })
    };
    for handle in handles {
        handle.join().unwrap();
    }
    reader.join().unwrap();

    // THEN every record is present, and each producer's records kept their order
    assert_eq!(store.len(), producers * per_producer);
    let snapshot = store.snapshot();
    for p in 0..producers {
        let own: Vec<usize> = snapshot
            .iter()
            .filter_map(|r| {
                let (who, seq) = r.message().split_once(':')?;
                (who == p.to_string()).then(|| seq.parse().unwrap())
            })
            .collect();
        assert_eq!(own, (0..per_producer).collect::<Vec<_>>());
    }
}

#[test]
fn store_survives_a_poisoned_lock() {
    let store = Arc::new(filled(1));
    let poisoner = Arc::clone(&store);
    let _ = thread::spawn(move || {
        let _guard = poisoner.records.lock().unwrap();
        panic!("poison the store");
    })
    .join();

    store.append(record(Severity::INFO_CODE, "after"));
    assert_eq!(store.len(), 2);
}
