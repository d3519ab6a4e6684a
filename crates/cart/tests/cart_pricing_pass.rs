//! A cart pricing pass as a consumer sees it: build, adjust, project.

use commerce_cart::{
    Calculated, CalculatedLineItem, CalculatedProduct, CalculatedTax, CalculatedTaxCollection,
    CalculatedVoucher, ConfiguredLineItem, LineItem, LineItemKind, LineItemRegistry, LineItemType,
    Price, TaxRule, TaxRuleCollection,
};
use commerce_core::LineItemId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line_item(id: &str, item_type: LineItemType, quantity: u32) -> LineItem {
    LineItem::new(LineItemId::new(id).unwrap(), item_type, quantity).unwrap()
}

fn gross(unit: Decimal, quantity: u32) -> Price {
    let total = unit * Decimal::from(quantity);
    Price::new(
        unit,
        total,
        CalculatedTaxCollection::from_taxes([CalculatedTax::new(
            (total * dec!(19) / dec!(119)).round_dp(2),
            dec!(19),
            total,
        )]),
        TaxRuleCollection::from_rules([TaxRule::new(dec!(19))]),
    )
}

fn plain(id: &str, quantity: u32) -> ConfiguredLineItem {
    ConfiguredLineItem::new(line_item(id, LineItemType::Product, quantity), gross(dec!(1), quantity))
}

#[test]
fn removing_first_entry_keeps_the_rest_in_order() {
    let mut registry = LineItemRegistry::from_items([
        plain("A", 3),
        plain("B", 3),
        plain("C", 3),
        plain("D", 3),
    ]);

    registry.remove("A");

    let ids: Vec<&str> = registry.identifiers().into_iter().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["B", "C", "D"]);
    assert!(registry.get("A").is_none());
}

#[test]
fn mixed_cart_splits_into_goods_vouchers_and_prices() {
    let entries: Vec<CalculatedLineItem> = vec![
        CalculatedProduct::new(
            line_item("SW-10001", LineItemType::Product, 2),
            gross(dec!(19.99), 2),
        )
        .into(),
        CalculatedVoucher::new(
            line_item("SUMMER10", LineItemType::PercentageVoucher, 1),
            gross(dec!(-4.00), 1),
        )
        .into(),
        ConfiguredLineItem::new(line_item("gift-wrap", LineItemType::Product, 1), gross(dec!(2.50), 1))
            .into(),
        CalculatedProduct::new(
            line_item("SW-10002", LineItemType::Product, 1),
            gross(dec!(5.00), 1),
        )
        .into(),
    ];
    let registry = LineItemRegistry::from_items(entries);

    let goods = registry.filter_goods();
    let goods_ids: Vec<&str> = goods.iter().map(|i| i.identifier().as_str()).collect();
    assert_eq!(goods_ids, vec!["SW-10001", "SW-10002"]);

    let vouchers = registry.filter_instance(LineItemKind::Voucher);
    assert_eq!(vouchers.count(), 1);
    assert!(vouchers.get("SUMMER10").is_some());

    // The caller totals; the registry only projects.
    let prices = registry.prices();
    assert_eq!(prices.len(), 4);
    let total: Decimal = prices.iter().map(|p| p.total_price()).sum();
    assert_eq!(total, dec!(43.48));
    assert_eq!(prices.get(1).map(|p| p.total_price()), Some(dec!(-4.00)));
}

#[test]
fn repricing_an_entry_replaces_it_in_place() {
    let mut registry = LineItemRegistry::from_items([plain("A", 1), plain("B", 1)]);

    let previous = registry.insert(plain("A", 5));

    assert_eq!(previous.map(|i| i.quantity()), Some(1));
    assert_eq!(registry.count(), 2);
    assert_eq!(registry.identifiers()[0].as_str(), "A");
    assert_eq!(
        registry.get("A").map(|i| i.price().total_price()),
        Some(dec!(5))
    );
}
