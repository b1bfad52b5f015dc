use proptest::prelude::*;
use rust_decimal::Decimal;

use vilex::composer::{compose, format_money, Totals};
use vilex::form::{LineItems, RowField};
use vilex::registry;
use vilex::schema::{ClauseSelection, DataRecord, LineItem};
use vilex::templates::TaxRate;

fn rows() -> impl Strategy<Value = Vec<(u32, u64)>> {
    prop::collection::vec((0u32..1_000, 0u64..100_000_000), 1..8)
}

fn items(rows: &[(u32, u64)]) -> Vec<LineItem> {
    rows.iter()
        .map(|&(quantity, price)| LineItem {
            name: "Hàng hóa".to_string(),
            unit: "cái".to_string(),
            quantity: Decimal::from(quantity),
            unit_price: Decimal::from(price),
            note: String::new(),
        })
        .collect()
}

proptest! {
    #[test]
    fn subtotal_is_exact_sum(rows in rows()) {
        let items = items(&rows);
        let expected: Decimal = rows
            .iter()
            .map(|&(q, p)| Decimal::from(q) * Decimal::from(p))
            .sum();
        let totals = Totals::compute(&items, Some(TaxRate::VAT));
        prop_assert_eq!(totals.subtotal, expected);
        let tax = totals.tax.unwrap();
        prop_assert_eq!(totals.grand_total - totals.subtotal - tax, Decimal::ZERO);
        prop_assert_eq!(tax, (expected / Decimal::from(10)).round_dp_with_strategy(
            0,
            rust_decimal::RoundingStrategy::MidpointAwayFromZero,
        ));
    }

    #[test]
    fn invoice_shows_computed_grand_total(rows in rows()) {
        let invoice = registry().unwrap().find("invoice").unwrap();
        let items = items(&rows);
        let totals = Totals::compute(&items, Some(TaxRate::VAT));

        let document = compose(invoice, &DataRecord::new(), &ClauseSelection::new(), &items);
        let table = document.tables()[0];
        prop_assert_eq!(table.rows.len(), rows.len());
        prop_assert_eq!(&table.totals[2].value, &format_money(totals.grand_total));
    }

    #[test]
    fn last_row_survives_removal(name in "[a-zA-Z ]{0,12}", quantity in 0u32..50, index in 0usize..4) {
        let mut list = LineItems::new("bộ");
        list.update_row(0, RowField::Name, &name);
        list.update_row(0, RowField::Quantity, &quantity.to_string());
        let before = list.clone();

        prop_assert!(!list.remove_row(index));
        prop_assert_eq!(list, before);
    }

    #[test]
    fn negative_amounts_clamp_to_zero(raw in -1_000_000i64..0) {
        let mut list = LineItems::new("cái");
        list.update_row(0, RowField::UnitPrice, &raw.to_string());
        prop_assert_eq!(list.rows()[0].unit_price, Decimal::ZERO);
    }
}
