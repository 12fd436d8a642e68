//! Item stacks and quantity-aggregating item collections.

use std::collections::BTreeMap;

use crate::diagnostic::{Diagnostics, Parsed};
use crate::section::ConfigSection;

/// A material identifier and an amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemStack {
    /// Namespaced material identifier, e.g. `"minecraft:iron_ingot"`.
    pub material: String,
    pub amount: u32,
}

impl ItemStack {
    pub fn new(material: &str, amount: u32) -> Self {
        Self {
            material: canonical_material(material),
            amount,
        }
    }

    /// Read `{ type = "IRON_INGOT", amount = 16 }`. `material` is accepted in
    /// place of `type`; `amount` defaults to 1 and negative amounts become 0.
    pub(crate) fn from_section(section: &ConfigSection<'_>) -> Option<Self> {
        let material = section
            .get_string("type")
            .or_else(|| section.get_string("material"))
            .filter(|m| !m.trim().is_empty())?;
        let amount = section.get_int("amount", 1).max(0) as u32;
        Some(Self::new(material, amount))
    }
}

/// Lowercase and namespace a material name: `"IRON_INGOT"` → `"minecraft:iron_ingot"`.
pub fn canonical_material(name: &str) -> String {
    let name = name.trim().to_lowercase();
    if name.contains(':') {
        name
    } else {
        format!("minecraft:{name}")
    }
}

/// Item amounts keyed by material. Adding a material that is already
/// present increases its amount instead of adding a second entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMap {
    items: BTreeMap<String, u32>,
}

impl ItemMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item_stack(&mut self, stack: &ItemStack) {
        self.add_item_amount(&stack.material, stack.amount);
    }

    pub fn add_item_amount(&mut self, material: &str, amount: u32) {
        if amount == 0 {
            return;
        }
        let entry = self.items.entry(canonical_material(material)).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Remove up to `amount` of `material`. Entries that reach zero are dropped.
    pub fn remove_item_amount(&mut self, material: &str, amount: u32) {
        let key = canonical_material(material);
        if let Some(current) = self.items.get_mut(&key) {
            *current = current.saturating_sub(amount);
            if *current == 0 {
                self.items.remove(&key);
            }
        }
    }

    /// Amount stored for `material`, 0 if absent.
    pub fn amount(&self, material: &str) -> u32 {
        self.items
            .get(&canonical_material(material))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all amounts.
    pub fn total_item_amount(&self) -> u64 {
        self.items.values().map(|&a| u64::from(a)).sum()
    }

    /// Number of distinct materials.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries sorted by material.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(m, &a)| (m.as_str(), a))
    }

    pub fn merge(&mut self, other: &ItemMap) {
        for (material, amount) in other.iter() {
            self.add_item_amount(material, amount);
        }
    }

    /// Whether this map holds at least the amounts listed in `required`.
    pub fn contains_all(&self, required: &ItemMap) -> bool {
        required
            .iter()
            .all(|(material, amount)| self.amount(material) >= amount)
    }
}

/// Build an [`ItemMap`] from every child table of `section`. A missing
/// section gives an empty map; tables without a material are skipped.
pub fn parse_item_map(section: Option<&ConfigSection<'_>>) -> Parsed<ItemMap> {
    let mut diags = Diagnostics::default();
    let mut result = ItemMap::new();
    let Some(section) = section else {
        return diags.finish(result);
    };

    for key in section.keys() {
        if !section.is_section(key) {
            continue;
        }
        match section.get_item_stack(key) {
            Some(stack) => result.add_item_stack(&stack),
            None => diags.warn(
                &section.child_path(key),
                "Found no item type for item entry",
            ),
        }
    }
    diags.finish(result)
}
