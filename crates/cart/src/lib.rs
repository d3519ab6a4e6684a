//! Cart domain module: calculated line items and their prices.
//!
//! Pure domain logic only: no IO, no persistence, no tax computation. Line
//! items arrive already calculated; consumers of [`PriceCollection`] decide
//! how to total them.

pub mod calculated;
pub mod line_item;
pub mod price;
pub mod registry;

pub use calculated::{
    Calculated, CalculatedLineItem, CalculatedProduct, CalculatedVoucher, ConfiguredLineItem,
    LineItemKind,
};
pub use line_item::{LineItem, LineItemType};
pub use price::{
    CalculatedTax, CalculatedTaxCollection, Price, PriceCollection, TaxRule, TaxRuleCollection,
};
pub use registry::LineItemRegistry;
