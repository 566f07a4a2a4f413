use std::collections::{BTreeMap, HashMap};

use crate::{
    common::quantity::RawQuantity,
    domain::{
        catalog::{Catalog, Category},
        purchase::PurchaseCost,
        summary::SummaryLine,
    },
};

/// The user's current order: a sparse map from item id to a positive quantity.
///
/// An item is either present with a quantity of at least 1 or absent. Every
/// total is derived on read from this map and the catalog; nothing cached.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderLedger {
    quantities: HashMap<String, u32>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self {
            quantities: HashMap::new(),
        }
    }

    /// Normalizes `raw` and stores it for `item_id`, returning the applied
    /// quantity so the caller can write it back into its input control.
    ///
    /// A normalized 0 removes the entry. Ids the catalog does not know are
    /// ignored and report 0.
    pub fn set_quantity(
        &mut self,
        catalog: &Catalog,
        item_id: &str,
        raw: impl Into<RawQuantity>,
    ) -> u32 {
        if !catalog.contains_item(item_id) {
            return 0;
        }
        let quantity = raw.into().normalize();
        self.store(item_id, quantity);
        quantity
    }

    /// Adds a signed `delta` to the current quantity (0 when absent), clamped
    /// at 0.
    pub fn adjust(&mut self, catalog: &Catalog, item_id: &str, delta: i64) -> u32 {
        let next = i64::from(self.quantity(item_id)).saturating_add(delta);
        self.set_quantity(catalog, item_id, next)
    }

    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Raw entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.quantities.iter().map(|(id, &qty)| (id.as_str(), qty))
    }

    /// Scrip owed for one category. Items not in the order contribute 0.
    pub fn category_total(&self, category: &Category) -> u64 {
        category
            .items
            .iter()
            .map(|item| item.scrip.saturating_mul(u64::from(self.quantity(&item.id))))
            .fold(0u64, u64::saturating_add)
    }

    pub fn grand_total(&self, catalog: &Catalog) -> u64 {
        catalog
            .categories()
            .iter()
            .map(|category| self.category_total(category))
            .fold(0u64, u64::saturating_add)
    }

    pub fn purchase_cost(&self, catalog: &Catalog) -> PurchaseCost {
        PurchaseCost::for_total(self.grand_total(catalog), catalog.scrip_info())
    }

    /// One line per ordered item, in catalog order.
    pub fn summary_lines(&self, catalog: &Catalog) -> Vec<SummaryLine> {
        let mut positioned: Vec<_> = self
            .quantities
            .iter()
            .filter_map(|(id, &quantity)| {
                let position = catalog.position(id)?;
                let item = catalog.item(id)?;
                Some((position, SummaryLine::new(item, quantity)))
            })
            .collect();
        positioned.sort_by_key(|(position, _)| *position);
        positioned.into_iter().map(|(_, line)| line).collect()
    }

    /// Drops entries whose ids no longer resolve against `catalog` and
    /// returns the ids that were removed.
    pub fn retain_known(&mut self, catalog: &Catalog) -> Vec<String> {
        let mut dropped: Vec<String> = self
            .quantities
            .keys()
            .filter(|id| !catalog.contains_item(id))
            .cloned()
            .collect();
        dropped.sort();
        for id in &dropped {
            self.quantities.remove(id);
        }
        dropped
    }

    /// Opaque persisted form: a JSON object of id to quantity, keys sorted.
    pub fn serialize(&self) -> String {
        let sorted: BTreeMap<&str, u32> = self.entries().collect();
        serde_json::to_string(&sorted).unwrap_or_else(|_| String::from("{}"))
    }

    /// Restores a ledger from [`OrderLedger::serialize`] output. Anything
    /// malformed yields an empty ledger; zero quantities are skipped.
    pub fn deserialize(text: &str) -> OrderLedger {
        match serde_json::from_str::<HashMap<String, u32>>(text) {
            Ok(map) => OrderLedger {
                quantities: map.into_iter().filter(|&(_, qty)| qty > 0).collect(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed persisted order");
                OrderLedger::new()
            }
        }
    }

    fn store(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.quantities.remove(item_id);
        } else {
            self.quantities.insert(item_id.to_string(), quantity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{common::money::Money, domain::catalog::tests::food_catalog};

    fn food(catalog: &Catalog) -> &Category {
        catalog.category("food").expect("food category")
    }

    #[test]
    fn burger_and_soda_example_totals() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.set_quantity(&catalog, "burger", 3), 3);
        assert_eq!(ledger.set_quantity(&catalog, "soda", 1), 1);

        assert_eq!(ledger.category_total(food(&catalog)), 17);
        assert_eq!(ledger.grand_total(&catalog), 17);

        let cost = ledger.purchase_cost(&catalog);
        assert_eq!(cost.sheets, 2);
        assert_eq!(cost.cost, Money::from_cents(1000));
        assert_eq!(cost.cost.to_string_2dp(), "10.00");
    }

    #[test]
    fn set_quantity_zero_removes_entry() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();

        ledger.set_quantity(&catalog, "burger", 2);
        assert_eq!(ledger.len(), 1);

        assert_eq!(ledger.set_quantity(&catalog, "burger", 0), 0);
        assert!(ledger.is_empty());
        assert_eq!(ledger.quantity("burger"), 0);
    }

    #[test]
    fn set_quantity_normalizes_malformed_input() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();

        ledger.set_quantity(&catalog, "burger", 4);
        assert_eq!(ledger.set_quantity(&catalog, "burger", "abc"), 0);
        assert!(ledger.is_empty(), "non-numeric text clears the item");

        assert_eq!(ledger.set_quantity(&catalog, "soda", "2.9"), 2);
        assert_eq!(ledger.set_quantity(&catalog, "soda", -5), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn set_quantity_is_idempotent() {
        let catalog = food_catalog();
        let mut once = OrderLedger::new();
        once.set_quantity(&catalog, "soda", 6);

        let mut twice = once.clone();
        twice.set_quantity(&catalog, "soda", 6);

        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_item_is_a_no_op() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.set_quantity(&catalog, "pizza", 3), 0);
        assert_eq!(ledger.adjust(&catalog, "pizza", 1), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn adjust_below_zero_on_absent_item_stays_absent() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.adjust(&catalog, "burger", -1), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn adjust_steps_up_and_down() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();

        assert_eq!(ledger.adjust(&catalog, "burger", 1), 1);
        assert_eq!(ledger.adjust(&catalog, "burger", 1), 2);
        assert_eq!(ledger.adjust(&catalog, "burger", -1), 1);
        assert_eq!(ledger.adjust(&catalog, "burger", -5), 0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();
        ledger.set_quantity(&catalog, "burger", 3);
        ledger.set_quantity(&catalog, "ferris", 2);

        ledger.clear();

        assert!(ledger.is_empty());
        assert_eq!(ledger.grand_total(&catalog), 0);
        assert_eq!(ledger.purchase_cost(&catalog).sheets, 0);
        assert_eq!(ledger.purchase_cost(&catalog).cost.to_string_2dp(), "0.00");
    }

    #[test]
    fn grand_total_spans_categories() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();
        ledger.set_quantity(&catalog, "burger", 1);
        ledger.set_quantity(&catalog, "ferris", 2);

        let per_category: u64 = catalog
            .categories()
            .iter()
            .map(|c| ledger.category_total(c))
            .sum();

        assert_eq!(ledger.grand_total(&catalog), 21);
        assert_eq!(per_category, 21);
    }

    #[test]
    fn summary_lines_follow_catalog_order() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();
        ledger.set_quantity(&catalog, "ferris", 1);
        ledger.set_quantity(&catalog, "soda", 3);
        ledger.set_quantity(&catalog, "burger", 2);

        let lines = ledger.summary_lines(&catalog);
        let ids: Vec<&str> = lines.iter().map(|l| l.item_id.as_str()).collect();

        assert_eq!(ids, vec!["burger", "soda", "ferris"]);
        assert_eq!(lines[1].name, "Soda");
        assert_eq!(lines[1].quantity, 3);
        assert_eq!(lines[1].line_total, 6);
    }

    #[test]
    fn serialize_round_trips_and_sorts_keys() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::new();
        ledger.set_quantity(&catalog, "soda", 2);
        ledger.set_quantity(&catalog, "burger", 1);

        let text = ledger.serialize();
        assert_eq!(text, r#"{"burger":1,"soda":2}"#);
        assert_eq!(OrderLedger::deserialize(&text), ledger);
    }

    #[test]
    fn deserialize_fails_closed() {
        assert!(OrderLedger::deserialize("").is_empty());
        assert!(OrderLedger::deserialize("not json").is_empty());
        assert!(OrderLedger::deserialize(r#"{"burger":-1}"#).is_empty());
        assert!(OrderLedger::deserialize(r#"{"burger":1.5}"#).is_empty());
        assert!(OrderLedger::deserialize(r#"["burger"]"#).is_empty());

        let restored = OrderLedger::deserialize(r#"{"burger":0,"soda":4}"#);
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.quantity("soda"), 4);
    }

    #[test]
    fn retain_known_drops_stale_ids() {
        let catalog = food_catalog();
        let mut ledger = OrderLedger::deserialize(r#"{"burger":1,"retired":2,"gone":1}"#);

        let dropped = ledger.retain_known(&catalog);

        assert_eq!(dropped, vec!["gone".to_string(), "retired".to_string()]);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.quantity("burger"), 1);
    }
}
