// ABOUTME: Sibling distribution-percentage rebalancing within a course and category
// ABOUTME: Single owner of the "siblings sum to 100" invariant used by the storage layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Category Rebalancer
//!
//! When several protein items in one course compete for the same meat
//! category, their `distribution_percentage` values must sum to 100 for
//! the Shopping List Calculator to split the category budget cleanly.
//! Item creation and deletion both disturb that sum; this module is the
//! single place the invariant is restored, so no other code path writes
//! `distribution_percentage` on its own.
//!
//! Admins may still hand-tune shares afterwards (60/40 instead of 50/50)
//! through the item-update endpoint, which deliberately does not trigger
//! a rebalance.

use crate::models::{MeatCategory, MenuItem};

/// Split a category's budget evenly among its surviving siblings
///
/// Considers only active protein items of the given category; every one
/// of them gets `100 / n` percent. A category with no remaining siblings
/// is left untouched.
pub fn rebalance_category(items: &mut [MenuItem], category: MeatCategory) {
    let sibling_count = items
        .iter()
        .filter(|item| is_sibling(item, category))
        .count();
    if sibling_count == 0 {
        return;
    }

    let share = 100.0 / sibling_count as f64;
    for item in items
        .iter_mut()
        .filter(|item| is_sibling(item, category))
    {
        item.distribution_percentage = Some(share);
    }
}

fn is_sibling(item: &MenuItem, category: MeatCategory) -> bool {
    item.is_active && item.is_protein() && item.category == Some(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;
    use uuid::Uuid;

    fn beef_item(name: &str) -> MenuItem {
        MenuItem::new(Uuid::nil(), name, ItemType::Protein).with_category(MeatCategory::Beef)
    }

    #[test]
    fn test_three_siblings_split_evenly() {
        let mut items = vec![beef_item("Brisket"), beef_item("Ribeye"), beef_item("Chuck")];
        rebalance_category(&mut items, MeatCategory::Beef);

        for item in &items {
            let share = item.distribution_percentage.unwrap();
            assert!((share - 100.0 / 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_other_categories_are_untouched() {
        let mut items = vec![
            beef_item("Brisket"),
            MenuItem::new(Uuid::nil(), "Thighs", ItemType::Protein)
                .with_category(MeatCategory::Chicken)
                .with_distribution(100.0),
        ];
        rebalance_category(&mut items, MeatCategory::Beef);

        assert!((items[0].distribution_percentage.unwrap() - 100.0).abs() < 1e-9);
        assert!((items[1].distribution_percentage.unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_inactive_items_do_not_count_as_siblings() {
        let mut retired = beef_item("Old cut");
        retired.is_active = false;
        let mut items = vec![beef_item("Brisket"), retired];
        rebalance_category(&mut items, MeatCategory::Beef);

        assert!((items[0].distribution_percentage.unwrap() - 100.0).abs() < 1e-9);
        assert!(items[1].distribution_percentage.is_none());
    }

    #[test]
    fn test_empty_category_is_a_no_op() {
        let mut items = vec![MenuItem::new(Uuid::nil(), "Salad", ItemType::Side)];
        rebalance_category(&mut items, MeatCategory::Fish);
        assert!(items[0].distribution_percentage.is_none());
    }
}
