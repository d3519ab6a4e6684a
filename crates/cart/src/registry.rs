//! Keyed, ordered registry of calculated line items.
//!
//! One registry is built per cart calculation and owned by it. Entries are
//! unique by identifier; iteration follows first-insertion order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use commerce_core::LineItemId;

use crate::calculated::{Calculated, CalculatedLineItem, LineItemKind};
use crate::price::PriceCollection;

/// Ordered mapping from line-item identifier to calculated line item.
///
/// ## Overwrite semantics
///
/// Inserting an entry whose identifier is already present replaces the stored
/// value but keeps the identifier at its **original** position. Duplicates in
/// an initial sequence therefore collapse to the last value, placed where the
/// identifier first appeared.
///
/// ## Totality
///
/// No operation fails. Lookups and removals of unknown identifiers yield
/// `None`; filters on an empty registry yield an empty registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CalculatedLineItem>", into = "Vec<CalculatedLineItem>")]
pub struct LineItemRegistry {
    items: Vec<CalculatedLineItem>,
    positions: HashMap<LineItemId, usize>,
}

impl LineItemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from an initial sequence, applying the overwrite rule.
    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CalculatedLineItem>,
    {
        let mut registry = Self::new();
        registry.fill(items);
        registry
    }

    /// Number of unique identifiers held.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Insert a single entry; returns the value it replaced, if any.
    pub fn insert(&mut self, item: impl Into<CalculatedLineItem>) -> Option<CalculatedLineItem> {
        let item = item.into();

        match self.positions.get(item.identifier()) {
            Some(&position) => {
                tracing::trace!(identifier = %item.identifier(), position, "overwriting line item");
                Some(std::mem::replace(&mut self.items[position], item))
            }
            None => {
                self.positions
                    .insert(item.identifier().clone(), self.items.len());
                self.items.push(item);
                None
            }
        }
    }

    /// Insert every entry in order; later entries win on repeated identifiers.
    pub fn fill<I, T>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<CalculatedLineItem>,
    {
        let before = self.items.len();
        let mut received = 0usize;

        for item in items {
            self.insert(item);
            received += 1;
        }

        tracing::debug!(
            received,
            added = self.items.len() - before,
            total = self.items.len(),
            "filled line item registry"
        );
    }

    pub fn get(&self, identifier: &str) -> Option<&CalculatedLineItem> {
        self.positions
            .get(identifier)
            .map(|&position| &self.items[position])
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.positions.contains_key(identifier)
    }

    /// Remove the entry for `identifier`. Absent identifiers are a no-op.
    ///
    /// Remaining entries keep their relative order.
    pub fn remove(&mut self, identifier: &str) -> Option<CalculatedLineItem> {
        let position = self.positions.remove(identifier)?;
        let removed = self.items.remove(position);

        for item in &self.items[position..] {
            if let Some(p) = self.positions.get_mut(item.identifier()) {
                *p -= 1;
            }
        }

        Some(removed)
    }

    pub fn clear(&mut self) {
        tracing::debug!(removed = self.items.len(), "clearing line item registry");
        self.items.clear();
        self.positions.clear();
    }

    /// Identifiers in iteration order.
    pub fn identifiers(&self) -> Vec<&LineItemId> {
        self.items.iter().map(|item| item.identifier()).collect()
    }

    /// New registry holding only the entries of the given variant.
    pub fn filter_instance(&self, kind: LineItemKind) -> LineItemRegistry {
        self.filter(|item| item.kind() == kind)
    }

    /// New registry holding only entries classified as goods.
    pub fn filter_goods(&self) -> LineItemRegistry {
        self.filter(|item| item.is_goods())
    }

    /// Price of each entry, in iteration order. Prices are not combined.
    pub fn prices(&self) -> PriceCollection {
        self.items.iter().map(|item| item.price().clone()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalculatedLineItem> {
        self.items.iter()
    }

    fn filter(&self, predicate: impl Fn(&CalculatedLineItem) -> bool) -> LineItemRegistry {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }
}

// The position index is derived from `items`, so comparing entries suffices.
impl PartialEq for LineItemRegistry {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for LineItemRegistry {}

impl<T: Into<CalculatedLineItem>> FromIterator<T> for LineItemRegistry {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl<T: Into<CalculatedLineItem>> Extend<T> for LineItemRegistry {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.fill(iter);
    }
}

impl From<Vec<CalculatedLineItem>> for LineItemRegistry {
    fn from(items: Vec<CalculatedLineItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<LineItemRegistry> for Vec<CalculatedLineItem> {
    fn from(registry: LineItemRegistry) -> Self {
        registry.items
    }
}

impl IntoIterator for LineItemRegistry {
    type Item = CalculatedLineItem;
    type IntoIter = std::vec::IntoIter<CalculatedLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a LineItemRegistry {
    type Item = &'a CalculatedLineItem;
    type IntoIter = std::slice::Iter<'a, CalculatedLineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
