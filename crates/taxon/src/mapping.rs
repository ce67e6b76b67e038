use std::fmt;

use derive_more::Deref;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::subject::SubjectType;

/// The stable identifier of a taxonomy group, e.g. `typeOfFestival`.
///
/// This is distinct from the caption shown to users, which is resolved
/// separately for the active language.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupKey(pub(crate) String);

impl GroupKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Festival groups and the slugs that belong to them.
pub const FESTIVAL_GROUPS: &[(&str, &[&str])] = &[
    (
        "typeOfFestival",
        &[
            "music",
            "dance",
            "dance-music",
            "crafts",
            "traditional-cooking",
            "traditional-games",
        ],
    ),
    (
        "ageParticipants",
        &["children", "youth", "adults", "seniors", "all-ages"],
    ),
    ("styleOfFestival", &["authentic", "elaborated", "stylized"]),
    ("status", &["cioff", "non-cioff"]),
    (
        "typeOfAccomodation",
        &["host-families", "hotel", "hostel", "school-or-gym"],
    ),
];

/// Group groups and the slugs that belong to them.
pub const GROUP_GROUPS: &[(&str, &[&str])] = &[
    ("groupType", &["music", "dance", "dance-music"]),
    (
        "groupAge",
        &["children", "youth", "adults", "seniors", "all-ages"],
    ),
    ("styleGroup", &["authentic", "elaborated", "stylized"]),
];

/// A lookup from category slug to the group it is classified under.
///
/// Entries keep the order of the table they were built from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deref)]
pub struct GroupMapping(IndexMap<String, GroupKey>);

impl GroupMapping {
    /// Builds a mapping from a `(group, slugs)` table.
    ///
    /// When a slug is listed more than once, the first group wins.
    pub fn from_table<'a, G, S>(table: impl IntoIterator<Item = (G, S)>) -> Self
    where
        G: Into<GroupKey>,
        S: IntoIterator<Item = &'a str>,
    {
        let mut mapping = IndexMap::new();

        for (group, slugs) in table {
            let group = group.into();
            for slug in slugs {
                mapping
                    .entry(slug.to_string())
                    .or_insert_with(|| group.clone());
            }
        }

        Self(mapping)
    }

    /// Returns the built-in mapping for the given subject type.
    pub fn builtin(subject: SubjectType) -> Self {
        let table = match subject {
            SubjectType::Festivals => FESTIVAL_GROUPS,
            SubjectType::Groups => GROUP_GROUPS,
        };

        Self::from_table(
            table
                .iter()
                .map(|(group, slugs)| (*group, slugs.iter().copied())),
        )
    }

    /// Returns the group the given slug is classified under, if any.
    pub fn group_for(&self, slug: &str) -> Option<&GroupKey> {
        self.0.get(slug)
    }

    /// Returns the distinct group keys, in table order.
    pub fn group_keys(&self) -> impl Iterator<Item = &GroupKey> {
        let mut seen = Vec::new();
        self.0.values().filter(move |group| {
            if seen.contains(group) {
                false
            } else {
                seen.push(*group);
                true
            }
        })
    }

    pub(crate) fn insert(&mut self, slug: String, group: GroupKey) -> Option<GroupKey> {
        self.0.insert(slug, group)
    }
}
