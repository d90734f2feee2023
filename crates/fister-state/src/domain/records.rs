//! # Records
//!
//! The two records owned by the store and their default shapes.
//!
//! Field names are camelCase on the wire so stored values stay readable by
//! the browser storefront.
//!
//! Only the required keys decide whether a stored record is usable. Every
//! other field falls back to its default on its own when the stored value
//! does not fit, and keys these types do not know are carried in `extra` so
//! they are written back unchanged.

use crate::domain::errors::ShapeInvalid;
use crate::domain::shape::{self, JsonKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{serde_as, DefaultOnError, DisplayFromStr, PickFirst, VecSkipError};
use std::fmt;

/// Default site title.
pub const DEFAULT_WEBSITE_TITLE: &str = "FisterSMS";

/// Default site description.
pub const DEFAULT_WEBSITE_DESCRIPTION: &str = "Buy phone numbers for OTP verification.";

/// Starting wallet balance for a fresh user record.
pub const DEFAULT_BALANCE: f64 = 100.00;

/// Which slot a record lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Servers, services, SEO metadata and analytics counters.
    Catalog,
    /// Wallet balance and purchase history.
    User,
}

impl RecordKind {
    /// Both kinds, catalog first (the order the storefront loads them in).
    pub const ALL: [RecordKind; 2] = [RecordKind::Catalog, RecordKind::User];

    /// Stable lowercase label used in log fields.
    pub const fn label(self) -> &'static str {
        match self {
            RecordKind::Catalog => "catalog",
            RecordKind::User => "user",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A record the store can persist and hydrate.
///
/// `check_shape` runs on the raw decoded value before typed conversion, so
/// that missing required keys are reported as such rather than as a generic
/// parse error.
pub trait PersistedRecord:
    Serialize + DeserializeOwned + Default + Clone + PartialEq + fmt::Debug
{
    /// Slot this record is stored in.
    const KIND: RecordKind;

    /// Check the keys this record cannot be rebuilt without.
    fn check_shape(value: &Value) -> Result<(), ShapeInvalid>;
}

// =============================================================================
// CATALOG
// =============================================================================

/// One server offered by the storefront.
///
/// `fields` is the open key-value part (whatever the admin form submitted).
/// It never carries an `id` key; the identifier lives in `id`.
///
/// A stored id written as a numeric string is accepted. A missing or
/// unusable id reads as 0.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Identifier in milliseconds since the epoch. Ids issued by
    /// `ServerIdGenerator` increase strictly; stored entries are taken as-is.
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ServerEntry {
    /// Build an entry from form fields. An `id` field is dropped in favour
    /// of the synthetic identifier, and empty field names are skipped.
    pub fn from_form<I, K, V>(id: u64, form: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let fields = form
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| !k.is_empty() && k != "id")
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        Self { id, fields }
    }

    /// Look up a form field as a string.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }
}

/// SEO metadata shown in the storefront head.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    #[serde_as(as = "DefaultOnError")]
    pub website_title: String,
    #[serde_as(as = "DefaultOnError")]
    pub website_description: String,
}

impl Default for Seo {
    fn default() -> Self {
        Self {
            website_title: DEFAULT_WEBSITE_TITLE.to_string(),
            website_description: DEFAULT_WEBSITE_DESCRIPTION.to_string(),
        }
    }
}

/// Dashboard counters. All start at zero, and a counter that does not read
/// as a number is zero again.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Analytics {
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    pub todays_users: u64,
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    pub total_users: u64,
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    pub todays_orders: u64,
    #[serde_as(as = "DefaultOnError")]
    pub todays_payment: f64,
}

/// Catalog / configuration record.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRecord {
    /// Servers in display order. Entries that are not objects are dropped.
    #[serde_as(as = "VecSkipError<_>")]
    pub servers: Vec<ServerEntry>,
    /// Opaque service entries.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub services: Vec<Value>,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub seo: Seo,
    pub analytics: Analytics,
    /// Keys from other storefront revisions, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogRecord {
    /// Keys whose absence (or wrong JSON type) forces a full reset.
    pub const REQUIRED_KEYS: [(&'static str, JsonKind); 2] = [
        ("servers", JsonKind::Array),
        ("analytics", JsonKind::Object),
    ];

    /// Look up a server by identifier.
    pub fn server(&self, id: u64) -> Option<&ServerEntry> {
        self.servers.iter().find(|s| s.id == id)
    }

    /// Highest server identifier in the catalog.
    pub fn max_server_id(&self) -> Option<u64> {
        self.servers.iter().map(|s| s.id).max()
    }
}

impl PersistedRecord for CatalogRecord {
    const KIND: RecordKind = RecordKind::Catalog;

    fn check_shape(value: &Value) -> Result<(), ShapeInvalid> {
        shape::require_keys(value, &Self::REQUIRED_KEYS)
    }
}

// =============================================================================
// USER
// =============================================================================

/// Wallet and purchase state for the session's user.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Current wallet balance.
    pub balance: f64,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub lifetime_recharge: f64,
    #[serde_as(as = "DefaultOnError<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub numbers_purchased: u64,
    /// Opaque order references.
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub active_orders: Vec<Value>,
    /// Keys from other storefront revisions, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for UserRecord {
    fn default() -> Self {
        Self {
            balance: DEFAULT_BALANCE,
            lifetime_recharge: 0.00,
            numbers_purchased: 0,
            active_orders: Vec::new(),
            extra: Map::new(),
        }
    }
}

impl UserRecord {
    /// Keys whose absence (or wrong JSON type) forces a full reset.
    pub const REQUIRED_KEYS: [(&'static str, JsonKind); 1] = [("balance", JsonKind::Number)];
}

impl PersistedRecord for UserRecord {
    const KIND: RecordKind = RecordKind::User;

    fn check_shape(value: &Value) -> Result<(), ShapeInvalid> {
        shape::require_keys(value, &Self::REQUIRED_KEYS)
    }
}
