//! Monitor cycle and loop behavior with in-memory ports.

use std::sync::Arc;
use std::time::Duration;

use shopee_watch::application::{CycleReport, Monitor, MonitorConfig};
use shopee_watch::domain::{ProductKey, StockStatus, Watchlist};
use shopee_watch::port::{Event, StockChangeEvent};
use shopee_watch::testkit::domain::{product_url, record};
use shopee_watch::testkit::{MemoryStore, RecordingNotifier, ScriptedClock, StubCatalog};

const WIDGET: ProductKey = ProductKey::new(111, 222);
const GADGET: ProductKey = ProductKey::new(333, 444);

struct Harness {
    store: Arc<MemoryStore>,
    catalog: Arc<StubCatalog>,
    notifier: RecordingNotifier,
    clock: Arc<ScriptedClock>,
    monitor: Monitor,
}

fn harness(store: MemoryStore, catalog: StubCatalog, sleeps: usize) -> Harness {
    let store = Arc::new(store);
    let catalog = Arc::new(catalog);
    let notifier = RecordingNotifier::new();
    let clock = Arc::new(ScriptedClock::new(sleeps));
    let monitor = Monitor::new(
        store.clone(),
        catalog.clone(),
        Arc::new(notifier.clone()),
        clock.clone(),
        MonitorConfig {
            interval: Duration::from_secs(30),
        },
    );
    Harness {
        store,
        catalog,
        notifier,
        clock,
        monitor,
    }
}

fn stock_changed(name: &str, key: ProductKey, previous: i64, current: i64) -> Event {
    Event::StockChanged(StockChangeEvent {
        name: name.into(),
        url: product_url(key),
        previous,
        current,
    })
}

#[tokio::test]
async fn sold_out_product_notifies_once_and_stores_zero() {
    let h = harness(
        MemoryStore::with(vec![record(111, 222, "Widget", 5)]),
        StubCatalog::new().with_product(WIDGET, "Widget", 0),
        1,
    );

    let report = h.monitor.run_cycle().await;

    assert_eq!(
        report,
        CycleReport {
            checked: 1,
            skipped: 0,
            changed: 1,
        }
    );
    let events = h.notifier.events();
    assert_eq!(events, vec![stock_changed("Widget", WIDGET, 5, 0)]);
    let Event::StockChanged(change) = &events[0] else {
        unreachable!();
    };
    assert_eq!(change.status(), StockStatus::OutOfStock);
    assert_eq!(
        h.store.snapshot(),
        Watchlist::from(vec![record(111, 222, "Widget", 0)])
    );
    assert_eq!(h.store.save_count(), 1);
}

#[tokio::test]
async fn restocked_product_notifies_in_stock() {
    let h = harness(
        MemoryStore::with(vec![record(111, 222, "Widget", 0)]),
        StubCatalog::new().with_product(WIDGET, "Widget", 3),
        1,
    );

    h.monitor.run_cycle().await;

    let events = h.notifier.events();
    assert_eq!(events, vec![stock_changed("Widget", WIDGET, 0, 3)]);
    let Event::StockChanged(change) = &events[0] else {
        unreachable!();
    };
    assert_eq!(change.status(), StockStatus::InStock(3));
    assert_eq!(h.store.snapshot().iter().next().map(|r| r.last_known_stock), Some(3));
}

#[tokio::test]
async fn unchanged_stock_is_silent_and_skips_save() {
    let h = harness(
        MemoryStore::with(vec![record(111, 222, "Widget", 7)]),
        StubCatalog::new().with_product(WIDGET, "Widget", 7),
        1,
    );

    let report = h.monitor.run_cycle().await;

    assert_eq!(report.changed, 0);
    assert!(h.notifier.is_empty());
    assert_eq!(h.store.save_count(), 0);
}

#[tokio::test]
async fn absent_product_is_skipped_and_left_untouched() {
    let h = harness(
        MemoryStore::with(vec![
            record(111, 222, "Widget", 5),
            record(333, 444, "Gadget", 1),
        ]),
        StubCatalog::new().with_product(GADGET, "Gadget", 0),
        1,
    );

    let report = h.monitor.run_cycle().await;

    assert_eq!(
        report,
        CycleReport {
            checked: 1,
            skipped: 1,
            changed: 1,
        }
    );
    assert_eq!(h.notifier.events(), vec![stock_changed("Gadget", GADGET, 1, 0)]);
    assert_eq!(
        h.store.snapshot(),
        Watchlist::from(vec![
            record(111, 222, "Widget", 5),
            record(333, 444, "Gadget", 0),
        ])
    );
}

#[tokio::test]
async fn stored_name_is_kept_while_alert_uses_fetched_name() {
    let h = harness(
        MemoryStore::with(vec![record(111, 222, "Widget", 2)]),
        StubCatalog::new().with_product(WIDGET, "Widget v2", 4),
        1,
    );

    h.monitor.run_cycle().await;

    assert_eq!(
        h.notifier.events(),
        vec![stock_changed("Widget v2", WIDGET, 2, 4)]
    );
    assert_eq!(
        h.store.snapshot(),
        Watchlist::from(vec![record(111, 222, "Widget", 4)])
    );
}

#[tokio::test]
async fn failed_save_still_notifies() {
    let h = harness(
        MemoryStore::with(vec![record(111, 222, "Widget", 5)]),
        StubCatalog::new().with_product(WIDGET, "Widget", 0),
        1,
    );
    h.store.fail_saves();

    let report = h.monitor.run_cycle().await;

    assert_eq!(report.changed, 1);
    assert_eq!(h.notifier.len(), 1);
    assert_eq!(
        h.store.snapshot(),
        Watchlist::from(vec![record(111, 222, "Widget", 5)])
    );
}

#[tokio::test]
async fn empty_watchlist_does_nothing() {
    let h = harness(MemoryStore::new(), StubCatalog::new(), 1);

    assert_eq!(h.monitor.run_cycle().await, CycleReport::default());
    assert_eq!(h.catalog.fetch_count(), 0);
    assert_eq!(h.store.save_count(), 0);
}

#[tokio::test]
async fn run_announces_once_then_sleeps_between_cycles() {
    let h = harness(
        MemoryStore::with(vec![record(111, 222, "Widget", 5)]),
        StubCatalog::new().with_product(WIDGET, "Widget", 5),
        3,
    );

    tokio::select! {
        () = h.monitor.run() => unreachable!("monitor loop returned"),
        () = h.clock.exhausted() => {}
    }

    assert_eq!(h.clock.sleeps(), vec![Duration::from_secs(30); 3]);
    assert_eq!(h.catalog.fetch_count(), 3);
    assert_eq!(h.notifier.events(), vec![Event::MonitorStarted]);
}
