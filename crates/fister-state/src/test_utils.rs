use crate::adapters::InMemorySlotStorage;
use crate::domain::codec::encode;
use crate::domain::errors::StorageError;
use crate::domain::notification::Notification;
use crate::domain::records::{Analytics, CatalogRecord, Seo, ServerEntry, UserRecord};
use crate::ports::outbound::{Notifier, SlotStorage, TimeSource};
use parking_lot::Mutex;
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Notifier that keeps every notification for inspection.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().push(notification);
    }
}

/// In-memory storage whose reads and writes can be made to fail, and which
/// counts successful writes per call.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    pub inner: InMemorySlotStorage,
    pub fail_writes: bool,
    pub fail_reads: bool,
    pub writes: usize,
}

impl FlakyStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with raw slot values.
    pub fn with_slots(slots: &[(&str, &str)]) -> Self {
        let mut storage = Self::new();
        for (key, value) in slots {
            storage.inner.set(key, value).unwrap();
        }
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.get(key).unwrap()
    }
}

impl SlotStorage for FlakyStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Io {
                message: "simulated read failure".to_string(),
            });
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::QuotaExceeded {
                required: key.len() + value.len(),
                quota: 0,
            });
        }
        self.inner.set(key, value)?;
        self.writes += 1;
        Ok(())
    }
}

/// Settable clock shared between clones.
#[derive(Debug, Clone)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(millis: u64) -> Self {
        Self {
            millis: Arc::new(AtomicU64::new(millis)),
        }
    }

    pub fn set(&self, millis: u64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now_millis(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

// =============================================================================
// GENERATED INPUTS
// =============================================================================

/// Printable text, non-ASCII included.
pub fn arb_text() -> impl Strategy<Value = String> {
    "\\PC{0,16}"
}

/// Finite decimal amounts, negative ones included.
pub fn arb_amount() -> impl Strategy<Value = f64> {
    -1.0e12..1.0e12f64
}

/// Opaque JSON of bounded depth, as found in services and orders.
pub fn arb_opaque() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        arb_text().prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn arb_extra() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("x_[a-z]{1,6}", arb_opaque(), 0..3)
        .prop_map(|m| m.into_iter().collect())
}

pub fn arb_server() -> impl Strategy<Value = ServerEntry> {
    let name = "[a-z][a-zA-Z0-9_]{0,8}".prop_filter("reserved", |k| k != "id");
    (
        any::<u64>(),
        prop::collection::btree_map(name, arb_text().prop_map(Value::from), 0..4),
    )
        .prop_map(|(id, fields)| ServerEntry {
            id,
            fields: fields.into_iter().collect(),
        })
}

pub fn arb_catalog() -> impl Strategy<Value = CatalogRecord> {
    (
        prop::collection::vec(arb_server(), 0..5),
        prop::collection::vec(arb_opaque(), 0..3),
        (arb_text(), arb_text()),
        (any::<u64>(), any::<u64>(), any::<u64>(), arb_amount()),
        arb_extra(),
    )
        .prop_map(
            |(servers, services, (website_title, website_description), counters, extra)| {
                let (todays_users, total_users, todays_orders, todays_payment) = counters;
                CatalogRecord {
                    servers,
                    services,
                    seo: Seo {
                        website_title,
                        website_description,
                    },
                    analytics: Analytics {
                        todays_users,
                        total_users,
                        todays_orders,
                        todays_payment,
                    },
                    extra,
                }
            },
        )
}

pub fn arb_user() -> impl Strategy<Value = UserRecord> {
    (
        arb_amount(),
        arb_amount(),
        any::<u64>(),
        prop::collection::vec(arb_opaque(), 0..4),
        arb_extra(),
    )
        .prop_map(
            |(balance, lifetime_recharge, numbers_purchased, active_orders, extra)| UserRecord {
                balance,
                lifetime_recharge,
                numbers_purchased,
                active_orders,
                extra,
            },
        )
}

/// Anything a slot might hold: stray text, foreign JSON, or a real record.
pub fn arb_stored_slot() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_text(),
        arb_opaque().prop_map(|v| encode(&v)),
        arb_catalog().prop_map(|c| encode(&c)),
        arb_user().prop_map(|u| encode(&u)),
    ]
}
