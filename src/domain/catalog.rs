use std::collections::HashMap;

use serde::Deserialize;

use crate::common::{error::CatalogError, money::Money};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Unit price in scrip.
    pub scrip: u64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Display order.
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Conversion rule from scrip to the sheets a customer actually buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScripInfo {
    pub scrip_per_sheet: u64,
    pub scrip_sheet_cost: Money,
}

/// The catalog exactly as the source document lays it out.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub categories: Vec<Category>,
    pub scrip_info: ScripInfo,
}

/// Immutable, indexed catalog. Built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    category_ids: Vec<String>,
    scrip_info: ScripInfo,
    // item id -> (category position, item position)
    items_by_id: HashMap<String, (usize, usize)>,
    categories_by_id: HashMap<String, usize>,
}

impl Catalog {
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Self::from_document(doc)
    }

    /// Validates the document and builds the lookup indexes.
    ///
    /// # Errors
    ///
    /// Fails when an item id repeats anywhere in the document, when two
    /// category names derive the same id, or when the scrip info is not
    /// strictly positive.
    pub fn from_document(doc: CatalogDocument) -> Result<Self, CatalogError> {
        let CatalogDocument {
            categories,
            scrip_info,
        } = doc;

        if scrip_info.scrip_per_sheet == 0 {
            return Err(CatalogError::InvalidScripInfo(
                "scripPerSheet must be positive".into(),
            ));
        }
        if !scrip_info.scrip_sheet_cost.is_positive() {
            return Err(CatalogError::InvalidSheetCost(
                scrip_info.scrip_sheet_cost.to_string_2dp(),
            ));
        }

        let mut category_ids = Vec::with_capacity(categories.len());
        let mut categories_by_id = HashMap::with_capacity(categories.len());
        let mut items_by_id = HashMap::new();

        for (ci, category) in categories.iter().enumerate() {
            let mut id = category_id(&category.name);
            if id.is_empty() {
                id = format!("category-{}", ci + 1);
            }
            if categories_by_id.insert(id.clone(), ci).is_some() {
                return Err(CatalogError::DuplicateCategory(id));
            }
            category_ids.push(id);

            for (ii, item) in category.items.iter().enumerate() {
                if items_by_id.insert(item.id.clone(), (ci, ii)).is_some() {
                    return Err(CatalogError::DuplicateItemId(item.id.clone()));
                }
            }
        }

        Ok(Catalog {
            categories,
            category_ids,
            scrip_info,
            items_by_id,
            categories_by_id,
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Categories in display order, paired with their derived ids.
    pub fn categories_with_ids(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.category_ids
            .iter()
            .map(String::as_str)
            .zip(self.categories.iter())
    }

    pub fn scrip_info(&self) -> &ScripInfo {
        &self.scrip_info
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items_by_id
            .get(item_id)
            .map(|&(ci, ii)| &self.categories[ci].items[ii])
    }

    pub fn contains_item(&self, item_id: &str) -> bool {
        self.items_by_id.contains_key(item_id)
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories_by_id
            .get(category_id)
            .map(|&ci| &self.categories[ci])
    }

    /// The category that owns `item_id`.
    pub fn category_of(&self, item_id: &str) -> Option<&Category> {
        self.items_by_id
            .get(item_id)
            .map(|&(ci, _)| &self.categories[ci])
    }

    /// Catalog-order position of an item, used to sort summaries.
    pub fn position(&self, item_id: &str) -> Option<(usize, usize)> {
        self.items_by_id.get(item_id).copied()
    }
}

/// Derives a stable identifier from a category display name: ASCII
/// lowercase, runs of anything else collapsed to `-`, no leading or trailing
/// `-`. Only `[a-z0-9-]` survives, so ids are URL and DOM safe.
///
/// # Examples
/// ```
/// use scrip_calculator::domain::catalog::category_id;
///
/// assert_eq!(category_id("Food & Drinks"), "food-drinks");
/// assert_eq!(category_id("  Kids' Rides! "), "kids-rides");
/// ```
pub fn category_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !id.is_empty() {
                id.push('-');
            }
            pending_sep = false;
            id.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    id
}
