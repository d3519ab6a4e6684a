use serde::{Deserialize, Serialize};

use commerce_core::{DomainError, DomainResult, LineItemId, ValueObject};

/// Line item type tag, set by the processor that produced the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemType {
    Product,
    PercentageVoucher,
    AbsoluteVoucher,
}

impl LineItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            LineItemType::Product => "product",
            LineItemType::PercentageVoucher => "percentage_voucher",
            LineItemType::AbsoluteVoucher => "absolute_voucher",
        }
    }

    pub fn is_voucher(self) -> bool {
        matches!(
            self,
            LineItemType::PercentageVoucher | LineItemType::AbsoluteVoucher
        )
    }
}

impl core::fmt::Display for LineItemType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity, type and quantity of a cart position (before pricing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLineItem")]
pub struct LineItem {
    identifier: LineItemId,
    #[serde(rename = "type")]
    item_type: LineItemType,
    quantity: u32,
}

impl LineItem {
    pub fn new(identifier: LineItemId, item_type: LineItemType, quantity: u32) -> DomainResult<Self> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be positive"));
        }

        Ok(Self {
            identifier,
            item_type,
            quantity,
        })
    }

    pub fn identifier(&self) -> &LineItemId {
        &self.identifier
    }

    pub fn item_type(&self) -> LineItemType {
        self.item_type
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl ValueObject for LineItem {}

/// Unvalidated wire shape; deserialization goes through [`LineItem::new`].
#[derive(Deserialize)]
struct RawLineItem {
    identifier: LineItemId,
    #[serde(rename = "type")]
    item_type: LineItemType,
    quantity: u32,
}

impl TryFrom<RawLineItem> for LineItem {
    type Error = DomainError;

    fn try_from(raw: RawLineItem) -> Result<Self, Self::Error> {
        LineItem::new(raw.identifier, raw.item_type, raw.quantity)
    }
}
