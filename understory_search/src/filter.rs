// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrow an option tree to the entries matching a query.

use alloc::vec::Vec;

use understory_options::{Group, Node, Tree};

use crate::matching::search_text;

/// Decides whether a label matches a query.
pub trait Matcher {
    /// Whether `label` matches `query`.
    fn matches(&self, label: &str, query: &str) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&str, &str) -> bool,
{
    fn matches(&self, label: &str, query: &str) -> bool {
        self(label, query)
    }
}

/// Case and diacritic insensitive matching via [`search_text`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FoldedMatcher;

impl Matcher for FoldedMatcher {
    fn matches(&self, label: &str, query: &str) -> bool {
        !search_text(label, query).is_empty()
    }
}

/// Lowercase substring matching.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContainsMatcher;

impl Matcher for ContainsMatcher {
    fn matches(&self, label: &str, query: &str) -> bool {
        label.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Options for [`filter_tree`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterOptions {
    /// Keep only the matching children of a group whose own label does not match.
    pub prune_children: bool,
}

/// Filter `tree` by `query`.
///
/// - A leaf is kept when its label matches.
/// - A group is kept when its label matches or any child's label matches.
///   With [`FilterOptions::prune_children`], a group kept only through its
///   children loses the children that do not match.
///
/// Order is preserved. A blank query returns a copy of the tree.
///
/// ```
/// use understory_options::{normalize, NormalizeOptions, RawOption};
/// use understory_search::{filter_tree, FilterOptions, FoldedMatcher};
///
/// let items = vec![
///     RawOption::leaf(1, "Zürich"),
///     RawOption::leaf(2, "Bern"),
/// ];
/// let tree = normalize(&items, &NormalizeOptions::default()).unwrap();
/// let hits = filter_tree(&tree, "zur", &FoldedMatcher, &FilterOptions::default());
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits.get(0).unwrap().label(), "Zürich");
/// ```
pub fn filter_tree<T, M>(tree: &Tree<T>, query: &str, matcher: &M, options: &FilterOptions) -> Tree<T>
where
    T: Clone,
    M: Matcher + ?Sized,
{
    if query.trim().is_empty() {
        return tree.clone();
    }

    let mut kept = Vec::new();
    for node in tree {
        match node {
            Node::Leaf(leaf) => {
                if matcher.matches(&leaf.label, query) {
                    kept.push(node.clone());
                }
            }
            Node::Group(group) => {
                if let Some(group) = filter_group(group, query, matcher, options) {
                    kept.push(Node::Group(group));
                }
            }
        }
    }
    tracing::trace!(query, before = tree.len(), after = kept.len(), "filtered option tree");
    Tree::from_nodes(kept)
}

fn filter_group<T, M>(group: &Group<T>, query: &str, matcher: &M, options: &FilterOptions) -> Option<Group<T>>
where
    T: Clone,
    M: Matcher + ?Sized,
{
    if matcher.matches(&group.label, query) {
        return Some(group.clone());
    }
    let hits: Vec<_> = group
        .children
        .iter()
        .filter(|c| matcher.matches(&c.label, query))
        .cloned()
        .collect();
    if hits.is_empty() {
        return None;
    }
    let mut out = group.clone();
    if options.prune_children {
        out.children = hits;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_options::{NormalizeOptions, RawOption, normalize};

    fn tree() -> Tree<RawOption> {
        let items = vec![
            RawOption::leaf(1, "Ångström"),
            RawOption::group("eu", "Europe"),
            RawOption::leaf(2, "Paris"),
            RawOption::leaf(3, "Zürich"),
            RawOption::group("as", "Asia"),
            RawOption::leaf(4, "Tokyo"),
            RawOption::leaf(5, "Hà Nội"),
        ];
        normalize(&items, &NormalizeOptions::default()).unwrap()
    }

    fn labels<T>(tree: &Tree<T>) -> Vec<&str> {
        tree.iter().map(|n| n.label()).collect()
    }

    #[test]
    fn blank_query_keeps_everything() {
        let t = tree();
        assert_eq!(filter_tree(&t, "  ", &FoldedMatcher, &FilterOptions::default()), t);
    }

    #[test]
    fn groups_survive_through_children() {
        let t = tree();
        let out = filter_tree(&t, "ha noi", &FoldedMatcher, &FilterOptions::default());
        assert_eq!(labels(&out), ["Asia"]);
        assert_eq!(out.group(0).unwrap().children.len(), 2);

        let pruned = filter_tree(
            &t,
            "ha noi",
            &FoldedMatcher,
            &FilterOptions { prune_children: true },
        );
        let children: Vec<_> = pruned.group(0).unwrap().children.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(children, ["Hà Nội"]);
    }

    #[test]
    fn matching_group_label_keeps_all_children() {
        let out = filter_tree(
            &tree(),
            "europe",
            &FoldedMatcher,
            &FilterOptions { prune_children: true },
        );
        assert_eq!(labels(&out), ["Europe"]);
        assert_eq!(out.group(0).unwrap().children.len(), 2);
    }

    #[test]
    fn contains_matcher_is_diacritic_sensitive() {
        let t = tree();
        assert!(filter_tree(&t, "angstrom", &ContainsMatcher, &FilterOptions::default()).is_empty());
        let out = filter_tree(&t, "ÅNG", &ContainsMatcher, &FilterOptions::default());
        assert_eq!(labels(&out), ["Ångström"]);
        let folded = filter_tree(&t, "angstrom", &FoldedMatcher, &FilterOptions::default());
        assert_eq!(labels(&folded), ["Ångström"]);
    }

    #[test]
    fn closures_are_matchers() {
        let starts = |label: &str, query: &str| label.starts_with(query);
        let out = filter_tree(&tree(), "T", &starts, &FilterOptions::default());
        assert_eq!(labels(&out), ["Asia"]);
    }
}
