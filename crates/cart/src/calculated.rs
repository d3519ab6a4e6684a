//! Calculated line items: a [`LineItem`] paired with its resolved [`Price`].
//!
//! The set of variants is closed. Code that needs to tell them apart matches
//! on [`CalculatedLineItem`] or compares [`LineItemKind`]s; whether an entry
//! counts as goods (physical, shippable) is answered by [`Calculated::is_goods`].

use serde::{Deserialize, Serialize};

use commerce_core::{Entity, LineItemId};

use crate::line_item::LineItem;
use crate::price::Price;

/// Capabilities shared by every calculated line item.
pub trait Calculated {
    fn line_item(&self) -> &LineItem;

    fn price(&self) -> &Price;

    fn is_goods(&self) -> bool;

    fn identifier(&self) -> &LineItemId {
        self.line_item().identifier()
    }

    fn quantity(&self) -> u32 {
        self.line_item().quantity()
    }
}

/// A priced product position. Always goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedProduct {
    line_item: LineItem,
    price: Price,
}

impl CalculatedProduct {
    pub fn new(line_item: LineItem, price: Price) -> Self {
        Self { line_item, price }
    }
}

impl Calculated for CalculatedProduct {
    fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    fn price(&self) -> &Price {
        &self.price
    }

    fn is_goods(&self) -> bool {
        true
    }
}

/// A priced voucher position. Never goods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedVoucher {
    line_item: LineItem,
    price: Price,
}

impl CalculatedVoucher {
    pub fn new(line_item: LineItem, price: Price) -> Self {
        Self { line_item, price }
    }
}

impl Calculated for CalculatedVoucher {
    fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    fn price(&self) -> &Price {
        &self.price
    }

    fn is_goods(&self) -> bool {
        false
    }
}

/// A generic priced position whose goods classification is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfiguredLineItem {
    line_item: LineItem,
    price: Price,
    goods: bool,
}

impl ConfiguredLineItem {
    /// Non-goods configured item (service, fee, ...).
    pub fn new(line_item: LineItem, price: Price) -> Self {
        Self {
            line_item,
            price,
            goods: false,
        }
    }

    /// Configured item classified as goods.
    pub fn goods(line_item: LineItem, price: Price) -> Self {
        Self {
            line_item,
            price,
            goods: true,
        }
    }
}

impl Calculated for ConfiguredLineItem {
    fn line_item(&self) -> &LineItem {
        &self.line_item
    }

    fn price(&self) -> &Price {
        &self.price
    }

    fn is_goods(&self) -> bool {
        self.goods
    }
}

/// Discriminator of [`CalculatedLineItem`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemKind {
    Product,
    Voucher,
    Configured,
}

/// Any calculated line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculatedLineItem {
    Product(CalculatedProduct),
    Voucher(CalculatedVoucher),
    Configured(ConfiguredLineItem),
}

impl CalculatedLineItem {
    pub fn kind(&self) -> LineItemKind {
        match self {
            CalculatedLineItem::Product(_) => LineItemKind::Product,
            CalculatedLineItem::Voucher(_) => LineItemKind::Voucher,
            CalculatedLineItem::Configured(_) => LineItemKind::Configured,
        }
    }

    fn as_calculated(&self) -> &dyn Calculated {
        match self {
            CalculatedLineItem::Product(item) => item,
            CalculatedLineItem::Voucher(item) => item,
            CalculatedLineItem::Configured(item) => item,
        }
    }
}

impl Calculated for CalculatedLineItem {
    fn line_item(&self) -> &LineItem {
        self.as_calculated().line_item()
    }

    fn price(&self) -> &Price {
        self.as_calculated().price()
    }

    fn is_goods(&self) -> bool {
        self.as_calculated().is_goods()
    }
}

impl Entity for CalculatedLineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        self.identifier()
    }
}

impl From<CalculatedProduct> for CalculatedLineItem {
    fn from(item: CalculatedProduct) -> Self {
        CalculatedLineItem::Product(item)
    }
}

impl From<CalculatedVoucher> for CalculatedLineItem {
    fn from(item: CalculatedVoucher) -> Self {
        CalculatedLineItem::Voucher(item)
    }
}

impl From<ConfiguredLineItem> for CalculatedLineItem {
    fn from(item: ConfiguredLineItem) -> Self {
        CalculatedLineItem::Configured(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line_item::LineItemType;
    use crate::price::{CalculatedTaxCollection, TaxRuleCollection};
    use rust_decimal_macros::dec;

    fn line_item(id: &str, item_type: LineItemType) -> LineItem {
        LineItem::new(LineItemId::new(id).unwrap(), item_type, 1).unwrap()
    }

    fn price() -> Price {
        Price::new(
            dec!(10),
            dec!(10),
            CalculatedTaxCollection::new(),
            TaxRuleCollection::new(),
        )
    }

    #[test]
    fn goods_classification_per_variant() {
        let product: CalculatedLineItem =
            CalculatedProduct::new(line_item("P", LineItemType::Product), price()).into();
        let voucher: CalculatedLineItem =
            CalculatedVoucher::new(line_item("V", LineItemType::AbsoluteVoucher), price()).into();
        let service: CalculatedLineItem =
            ConfiguredLineItem::new(line_item("S", LineItemType::Product), price()).into();
        let shippable: CalculatedLineItem =
            ConfiguredLineItem::goods(line_item("G", LineItemType::Product), price()).into();

        assert!(product.is_goods());
        assert!(!voucher.is_goods());
        assert!(!service.is_goods());
        assert!(shippable.is_goods());
    }

    #[test]
    fn kind_follows_variant_not_goods_flag() {
        let service: CalculatedLineItem =
            ConfiguredLineItem::new(line_item("S", LineItemType::Product), price()).into();
        let shippable: CalculatedLineItem =
            ConfiguredLineItem::goods(line_item("G", LineItemType::Product), price()).into();

        assert_eq!(service.kind(), LineItemKind::Configured);
        assert_eq!(shippable.kind(), LineItemKind::Configured);
    }

    #[test]
    fn accessors_delegate_to_wrapped_line_item() {
        let item: CalculatedLineItem =
            CalculatedVoucher::new(line_item("V-10", LineItemType::PercentageVoucher), price())
                .into();

        assert_eq!(item.identifier().as_str(), "V-10");
        assert_eq!(item.id(), item.identifier());
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.price(), &price());
        assert_eq!(item.line_item().item_type(), LineItemType::PercentageVoucher);
    }

    #[test]
    fn serialized_form_carries_kind_tag() {
        let item: CalculatedLineItem =
            ConfiguredLineItem::goods(line_item("G", LineItemType::Product), price()).into();

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["kind"], "configured");
        assert_eq!(value["goods"], true);

        let back: CalculatedLineItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }
}
