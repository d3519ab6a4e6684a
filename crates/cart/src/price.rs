use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use commerce_core::ValueObject;

/// Tax amount computed for a price at a given rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedTax {
    tax: Decimal,
    tax_rate: Decimal,
    price: Decimal,
}

impl CalculatedTax {
    pub fn new(tax: Decimal, tax_rate: Decimal, price: Decimal) -> Self {
        Self {
            tax,
            tax_rate,
            price,
        }
    }

    pub fn tax(&self) -> Decimal {
        self.tax
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// The (gross) amount this tax was computed from.
    pub fn price(&self) -> Decimal {
        self.price
    }
}

impl ValueObject for CalculatedTax {}

/// Ordered taxes of a single price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatedTaxCollection(Vec<CalculatedTax>);

impl CalculatedTaxCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_taxes(taxes: impl IntoIterator<Item = CalculatedTax>) -> Self {
        Self(taxes.into_iter().collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CalculatedTax> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for CalculatedTaxCollection {}

/// A tax rule applicable to a price (percentage rate).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRule {
    rate: Decimal,
}

impl TaxRule {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl ValueObject for TaxRule {}

/// Set of tax rules keyed by rate.
///
/// Adding a rule whose rate is already present replaces it in place, so each
/// rate appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TaxRule>", into = "Vec<TaxRule>")]
pub struct TaxRuleCollection(Vec<TaxRule>);

impl TaxRuleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rules(rules: impl IntoIterator<Item = TaxRule>) -> Self {
        let mut collection = Self::new();
        for rule in rules {
            collection.add(rule);
        }
        collection
    }

    pub fn add(&mut self, rule: TaxRule) {
        match self.0.iter_mut().find(|r| r.rate == rule.rate) {
            Some(existing) => *existing = rule,
            None => self.0.push(rule),
        }
    }

    pub fn get(&self, rate: Decimal) -> Option<&TaxRule> {
        self.0.iter().find(|r| r.rate == rate)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaxRule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TaxRule>> for TaxRuleCollection {
    fn from(rules: Vec<TaxRule>) -> Self {
        Self::from_rules(rules)
    }
}

impl From<TaxRuleCollection> for Vec<TaxRule> {
    fn from(collection: TaxRuleCollection) -> Self {
        collection.0
    }
}

impl ValueObject for TaxRuleCollection {}

/// Calculated price of a line item.
///
/// Immutable; equality is structural over all four components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    unit_price: Decimal,
    total_price: Decimal,
    calculated_taxes: CalculatedTaxCollection,
    tax_rules: TaxRuleCollection,
}

impl Price {
    pub fn new(
        unit_price: Decimal,
        total_price: Decimal,
        calculated_taxes: CalculatedTaxCollection,
        tax_rules: TaxRuleCollection,
    ) -> Self {
        Self {
            unit_price,
            total_price,
            calculated_taxes,
            tax_rules,
        }
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total_price(&self) -> Decimal {
        self.total_price
    }

    pub fn calculated_taxes(&self) -> &CalculatedTaxCollection {
        &self.calculated_taxes
    }

    pub fn tax_rules(&self) -> &TaxRuleCollection {
        &self.tax_rules
    }
}

impl ValueObject for Price {}

/// Ordered list of prices, one per line item. Never combines its members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceCollection(Vec<Price>);

impl PriceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, price: Price) {
        self.0.push(price);
    }

    pub fn get(&self, index: usize) -> Option<&Price> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Price> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Price> for PriceCollection {
    fn from_iter<I: IntoIterator<Item = Price>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PriceCollection {
    type Item = Price;
    type IntoIter = std::vec::IntoIter<Price>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PriceCollection {
    type Item = &'a Price;
    type IntoIter = std::slice::Iter<'a, Price>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
