use crate::{common::money::Money, domain::catalog::ScripInfo};

/// What the customer actually pays: whole sheets of scrip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseCost {
    pub sheets: u64,
    pub cost: Money,
}

impl PurchaseCost {
    /// Rounds `total_scrip` up to whole sheets. One scrip over a sheet
    /// boundary still costs a full extra sheet.
    ///
    /// # Examples
    /// ```
    /// use scrip_calculator::common::money::Money;
    /// use scrip_calculator::domain::{catalog::ScripInfo, purchase::PurchaseCost};
    ///
    /// let info = ScripInfo { scrip_per_sheet: 10, scrip_sheet_cost: Money::from_cents(500) };
    /// let cost = PurchaseCost::for_total(17, &info);
    /// assert_eq!(cost.sheets, 2);
    /// assert_eq!(cost.cost.to_string_2dp(), "10.00");
    /// ```
    pub fn for_total(total_scrip: u64, info: &ScripInfo) -> Self {
        // scrip_per_sheet > 0 is checked when the catalog is built.
        let sheets = total_scrip.div_ceil(info.scrip_per_sheet.max(1));
        PurchaseCost {
            sheets,
            cost: info.scrip_sheet_cost.times(sheets),
        }
    }
}
