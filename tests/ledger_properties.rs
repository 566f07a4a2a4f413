use proptest::prelude::*;

use scrip_calculator::domain::{catalog::Catalog, ledger::OrderLedger, purchase::PurchaseCost};

const MENU: &str = include_str!("fixtures/menu.json");

// Last id is deliberately absent from the catalog.
const IDS: [&str; 7] = [
    "burger", "soda", "malasada", "ferris", "ring-toss", "plush", "retired",
];

#[derive(Debug, Clone)]
enum Op {
    SetInt(usize, i64),
    SetText(usize, String),
    SetFloat(usize, f64),
    Adjust(usize, i64),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len(), -10i64..50).prop_map(|(i, n)| Op::SetInt(i, n)),
        (0..IDS.len(), any::<i64>()).prop_map(|(i, n)| Op::SetInt(i, n)),
        (0..IDS.len(), "[ +-]?[0-9a-z.]{0,6}").prop_map(|(i, s)| Op::SetText(i, s)),
        (0..IDS.len(), any::<f64>()).prop_map(|(i, f)| Op::SetFloat(i, f)),
        (0..IDS.len(), -3i64..4).prop_map(|(i, d)| Op::Adjust(i, d)),
        Just(Op::Clear),
    ]
}

fn catalog() -> Catalog {
    Catalog::from_json(MENU).expect("fixture menu is valid")
}

fn apply(ledger: &mut OrderLedger, catalog: &Catalog, op: &Op) {
    match op {
        Op::SetInt(i, n) => {
            ledger.set_quantity(catalog, IDS[*i], *n);
        }
        Op::SetText(i, s) => {
            ledger.set_quantity(catalog, IDS[*i], s.as_str());
        }
        Op::SetFloat(i, f) => {
            ledger.set_quantity(catalog, IDS[*i], *f);
        }
        Op::Adjust(i, d) => {
            ledger.adjust(catalog, IDS[*i], *d);
        }
        Op::Clear => ledger.clear(),
    }
}

fn build(ops: &[Op]) -> (Catalog, OrderLedger) {
    let catalog = catalog();
    let mut ledger = OrderLedger::new();
    for op in ops {
        apply(&mut ledger, &catalog, op);
    }
    (catalog, ledger)
}

proptest! {
    #[test]
    fn ledger_never_holds_zero_or_unknown_entries(ops in prop::collection::vec(op(), 0..40)) {
        let (catalog, ledger) = build(&ops);

        for (id, qty) in ledger.entries() {
            prop_assert!(qty > 0, "{id} stored with quantity 0");
            prop_assert!(catalog.contains_item(id), "{id} is not in the catalog");
        }
    }

    #[test]
    fn grand_total_is_sum_of_category_totals(ops in prop::collection::vec(op(), 0..40)) {
        let (catalog, ledger) = build(&ops);

        let by_category: u64 = catalog
            .categories()
            .iter()
            .map(|c| ledger.category_total(c))
            .sum();
        let by_line: u64 = ledger.summary_lines(&catalog).iter().map(|l| l.line_total).sum();

        prop_assert_eq!(ledger.grand_total(&catalog), by_category);
        prop_assert_eq!(ledger.grand_total(&catalog), by_line);
    }

    #[test]
    fn purchase_cost_is_monotonic_and_zero_only_when_empty(a in 0u64..100_000, b in 0u64..100_000) {
        let catalog = catalog();
        let info = catalog.scrip_info();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let low = PurchaseCost::for_total(lo, info);
        let high = PurchaseCost::for_total(hi, info);

        prop_assert!(low.sheets <= high.sheets);
        prop_assert!(low.cost <= high.cost);
        prop_assert_eq!(low.sheets == 0, lo == 0);
        prop_assert!(low.sheets * info.scrip_per_sheet >= lo);
    }

    #[test]
    fn set_quantity_is_idempotent(
        ops in prop::collection::vec(op(), 0..20),
        i in 0..IDS.len(),
        n in -5i64..100,
    ) {
        let (catalog, mut once) = build(&ops);
        once.set_quantity(&catalog, IDS[i], n);

        let mut twice = once.clone();
        twice.set_quantity(&catalog, IDS[i], n);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn persisted_form_round_trips(ops in prop::collection::vec(op(), 0..40)) {
        let (_, ledger) = build(&ops);

        let restored = OrderLedger::deserialize(&ledger.serialize());

        prop_assert_eq!(restored, ledger);
    }

    #[test]
    fn clear_always_empties(ops in prop::collection::vec(op(), 0..40)) {
        let (catalog, mut ledger) = build(&ops);

        ledger.clear();

        prop_assert!(ledger.is_empty());
        prop_assert_eq!(ledger.grand_total(&catalog), 0);
        prop_assert_eq!(ledger.purchase_cost(&catalog).sheets, 0);
    }
}
