//! Captions for taxonomy groups.
//!
//! The grouper never decides how a group key is presented. Callers inject a
//! [`GroupLabeler`], which is usually a closure over their own translation
//! catalog.

use std::collections::HashMap;

use crate::mapping::GroupKey;

/// Resolves a [`GroupKey`] into a caption in the active UI language.
pub trait GroupLabeler {
    fn group_label(&self, key: &GroupKey) -> String;
}

impl<F> GroupLabeler for F
where
    F: Fn(&GroupKey) -> String,
{
    fn group_label(&self, key: &GroupKey) -> String {
        self(key)
    }
}

/// A [`GroupLabeler`] backed by a fixed set of captions.
///
/// Keys without a caption are labeled with the key itself.
#[derive(Debug, Default, Clone)]
pub struct GroupLabels {
    labels: HashMap<GroupKey, String>,
}

impl GroupLabels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, key: impl Into<GroupKey>, label: impl Into<String>) -> Self {
        self.labels.insert(key.into(), label.into());
        self
    }
}

impl<K, L> FromIterator<(K, L)> for GroupLabels
where
    K: Into<GroupKey>,
    L: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, L)>>(iter: T) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(key, label)| (key.into(), label.into()))
                .collect(),
        }
    }
}

impl GroupLabeler for GroupLabels {
    fn group_label(&self, key: &GroupKey) -> String {
        self.labels
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_closure_labeler() {
        let labeler = |key: &GroupKey| format!("groups.{key}");

        assert_eq!(
            labeler.group_label(&GroupKey::from("status")),
            "groups.status"
        );
    }

    #[test]
    fn test_group_labels_fall_back_to_key() {
        let labels = GroupLabels::new().with_label("status", "Status");

        assert_eq!(labels.group_label(&GroupKey::from("status")), "Status");
        assert_eq!(
            labels.group_label(&GroupKey::from("groupAge")),
            "groupAge"
        );
    }

    #[test]
    fn test_group_labels_from_iter() {
        let labels: GroupLabels = [("groupType", "Tipo de grupo"), ("groupAge", "Edad")]
            .into_iter()
            .collect();

        assert_eq!(labels.group_label(&GroupKey::from("groupAge")), "Edad");
    }
}
