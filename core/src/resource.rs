//! URL templates for Alma bib resources and placeholder substitution.
//!
//! # Design
//! Each `ResourceKind` owns a static template: literal path segments
//! interleaved with named placeholders. Substitution walks the template once
//! and fails on the first placeholder that has no value in the `Ids` map.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{ApiError, Result};

pub const MMS_ID: &str = "mms_id";
pub const HOLDING_ID: &str = "holding_id";
pub const ITEM_PID: &str = "item_pid";

/// One piece of a URL template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

use Segment::{Literal, Param};

const BIB: &[Segment] = &[Literal("bibs"), Param(MMS_ID)];
const HOLDINGS: &[Segment] = &[Literal("bibs"), Param(MMS_ID), Literal("holdings")];
const HOLDING: &[Segment] = &[
    Literal("bibs"),
    Param(MMS_ID),
    Literal("holdings"),
    Param(HOLDING_ID),
];
const ITEMS: &[Segment] = &[
    Literal("bibs"),
    Param(MMS_ID),
    Literal("holdings"),
    Param(HOLDING_ID),
    Literal("items"),
];
const ITEM: &[Segment] = &[
    Literal("bibs"),
    Param(MMS_ID),
    Literal("holdings"),
    Param(HOLDING_ID),
    Literal("items"),
    Param(ITEM_PID),
];
const BIB_REQUESTS: &[Segment] = &[Literal("bibs"), Param(MMS_ID), Literal("requests")];
const ITEM_REQUESTS: &[Segment] = &[
    Literal("bibs"),
    Param(MMS_ID),
    Literal("holdings"),
    Param(HOLDING_ID),
    Literal("items"),
    Param(ITEM_PID),
    Literal("requests"),
];

/// The kinds of resource the client knows how to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Bib,
    Holdings,
    Holding,
    Items,
    Item,
    BibRequests,
    ItemRequests,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 7] = [
        ResourceKind::Bib,
        ResourceKind::Holdings,
        ResourceKind::Holding,
        ResourceKind::Items,
        ResourceKind::Item,
        ResourceKind::BibRequests,
        ResourceKind::ItemRequests,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Bib => "bib",
            ResourceKind::Holdings => "holdings",
            ResourceKind::Holding => "holding",
            ResourceKind::Items => "items",
            ResourceKind::Item => "item",
            ResourceKind::BibRequests => "bib_requests",
            ResourceKind::ItemRequests => "item_requests",
        }
    }

    pub fn template(self) -> &'static [Segment] {
        match self {
            ResourceKind::Bib => BIB,
            ResourceKind::Holdings => HOLDINGS,
            ResourceKind::Holding => HOLDING,
            ResourceKind::Items => ITEMS,
            ResourceKind::Item => ITEM,
            ResourceKind::BibRequests => BIB_REQUESTS,
            ResourceKind::ItemRequests => ITEM_REQUESTS,
        }
    }

    /// Placeholder names in template order.
    pub fn params(self) -> impl Iterator<Item = &'static str> {
        self.template().iter().filter_map(|seg| match seg {
            Param(name) => Some(*name),
            Literal(_) => None,
        })
    }

    /// Render the path relative to the API base URL, e.g. `bibs/1/holdings/2`.
    pub fn path(self, ids: &Ids) -> Result<String> {
        let mut parts = Vec::with_capacity(self.template().len());
        for seg in self.template() {
            match *seg {
                Literal(text) => parts.push(text.to_string()),
                Param(name) => {
                    let value = ids.get(name).ok_or(ApiError::MissingIdentifier {
                        resource: self.name(),
                        name,
                    })?;
                    parts.push(urlencoding::encode(value).into_owned());
                }
            }
        }
        Ok(parts.join("/"))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceKind {
    type Err = ApiError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ApiError::UnknownResource(s.to_string()))
    }
}

/// Identifier values keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ids(BTreeMap<String, String>);

impl Ids {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one identifier. Any `Display` value is accepted.
    pub fn with(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl fmt::Display) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bib(mms_id: impl fmt::Display) -> Self {
        Self::new().with(MMS_ID, mms_id)
    }

    pub fn holding(mms_id: impl fmt::Display, holding_id: impl fmt::Display) -> Self {
        Self::bib(mms_id).with(HOLDING_ID, holding_id)
    }

    pub fn item(
        mms_id: impl fmt::Display,
        holding_id: impl fmt::Display,
        item_pid: impl fmt::Display,
    ) -> Self {
        Self::holding(mms_id, holding_id).with(ITEM_PID, item_pid)
    }
}

impl<K: AsRef<str>, V: fmt::Display> FromIterator<(K, V)> for Ids {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ids = Ids::new();
        for (name, value) in iter {
            ids.insert(name.as_ref(), value);
        }
        ids
    }
}
