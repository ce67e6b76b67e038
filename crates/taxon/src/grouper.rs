use derive_more::Deref;
use indexmap::IndexMap;
use serde::Serialize;

use crate::category::Category;
use crate::config::TaxonomyConfig;
use crate::labels::GroupLabeler;
use crate::mapping::GroupKey;
use crate::subject::{InvalidSubjectType, SubjectType};

/// A selectable category within a [`GroupNode`].
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct CategoryOption {
    /// The category id, as a string.
    pub value: String,
    pub label: String,
    pub group: GroupKey,
}

/// A taxonomy group and the categories classified under it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct GroupNode {
    pub key: GroupKey,
    pub label: String,
    pub children: Vec<CategoryOption>,
}

/// The grouped categories, ready to be rendered as a hierarchical
/// multi-select.
///
/// Groups appear in the order they were first encountered in the input, and
/// never without children.
#[derive(Debug, Default, PartialEq, Eq, Clone, Deref, Serialize)]
#[serde(transparent)]
pub struct CategoryTree(Vec<GroupNode>);

impl CategoryTree {
    pub fn into_inner(self) -> Vec<GroupNode> {
        self.0
    }

    /// Returns every option in the tree, group by group.
    pub fn options(&self) -> impl Iterator<Item = &CategoryOption> {
        self.0.iter().flat_map(|group| group.children.iter())
    }

    /// Returns the first option with the given value.
    pub fn find(&self, value: &str) -> Option<&CategoryOption> {
        self.options().find(|option| option.value == value)
    }

    /// Partitions the selected values by the group they belong to.
    ///
    /// Groups and values are returned in tree order. Values that are not in
    /// the tree are dropped, as are groups with nothing selected.
    pub fn selection_by_group<S: AsRef<str>>(
        &self,
        selected: &[S],
    ) -> IndexMap<GroupKey, Vec<String>> {
        let is_selected =
            |value: &str| selected.iter().any(|selected| selected.as_ref() == value);

        let mut selection = IndexMap::new();

        for group in &self.0 {
            let values = group
                .children
                .iter()
                .filter(|option| is_selected(&option.value))
                .map(|option| option.value.clone())
                .collect::<Vec<_>>();

            if !values.is_empty() {
                selection.insert(group.key.clone(), values);
            }
        }

        selection
    }
}

impl From<CategoryTree> for Vec<GroupNode> {
    fn from(value: CategoryTree) -> Self {
        value.0
    }
}

/// Groups categories into a [`CategoryTree`] using a [`TaxonomyConfig`].
#[derive(Debug, Clone, Copy)]
pub struct Grouper<'a> {
    config: &'a TaxonomyConfig,
}

impl Default for Grouper<'static> {
    fn default() -> Self {
        Self::new(TaxonomyConfig::builtin())
    }
}

impl<'a> Grouper<'a> {
    /// Returns a new [`Grouper`] for the given configuration.
    pub fn new(config: &'a TaxonomyConfig) -> Self {
        Self { config }
    }

    /// Groups the categories for the given subject type.
    ///
    /// Category labels are resolved for `locale`, and group captions come
    /// from `labeler`. Categories whose slug has no group for this subject
    /// type are left out.
    pub fn group(
        &self,
        categories: &[Category],
        subject: SubjectType,
        locale: &str,
        labeler: &impl GroupLabeler,
    ) -> CategoryTree {
        let mapping = self.config.mapping(subject);
        let mut groups: IndexMap<&GroupKey, Vec<CategoryOption>> = IndexMap::new();

        for category in categories {
            let Some(group) = mapping.group_for(&category.slug) else {
                tracing::trace!(
                    slug = %category.slug,
                    %subject,
                    "category has no group, skipping"
                );
                continue;
            };

            groups.entry(group).or_default().push(CategoryOption {
                value: category.id.to_string(),
                label: category
                    .label(locale, &self.config.default_locale)
                    .to_string(),
                group: group.clone(),
            });
        }

        tracing::debug!(
            %subject,
            locale,
            categories = categories.len(),
            groups = groups.len(),
            "grouped categories"
        );

        CategoryTree(
            groups
                .into_iter()
                .map(|(key, children)| GroupNode {
                    key: key.clone(),
                    label: labeler.group_label(key),
                    children,
                })
                .collect(),
        )
    }
}

/// Groups categories with the built-in tables.
///
/// `subject_type` must be either `"festivals"` or `"groups"`; anything else
/// fails without producing a partial result.
pub fn group_categories(
    categories: &[Category],
    subject_type: &str,
    locale: &str,
    translate_group_label: impl Fn(&GroupKey) -> String,
) -> Result<CategoryTree, InvalidSubjectType> {
    let subject = subject_type.parse::<SubjectType>()?;

    Ok(Grouper::default().group(categories, subject, locale, &translate_group_label))
}
