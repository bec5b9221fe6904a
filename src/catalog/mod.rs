//! Fixed catalogs for membership plans and shop items.
//!
//! Prices live here and nowhere else; display labels are synthesized from
//! the catalog, never parsed back for their amounts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

/// Membership tiers sold at the front desk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Plan {
    Basic,
    Pro,
    Elite,
}

impl Plan {
    /// Catalog order, as rendered in the registration select box.
    pub const ALL: [Plan; 3] = [Plan::Basic, Plan::Pro, Plan::Elite];

    /// Monthly price in whole dollars.
    pub fn price(self) -> f64 {
        match self {
            Plan::Basic => 20.0,
            Plan::Pro => 50.0,
            Plan::Elite => 100.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Plan::Basic => "Basic",
            Plan::Pro => "Pro",
            Plan::Elite => "Elite",
        }
    }

    /// Display label shown to the admin, e.g. `Pro ($50)`.
    pub fn label(self) -> String {
        format!("{} (${})", self.name(), self.price() as u32)
    }

    /// Resolves a plan from its display label or bare name.
    ///
    /// Matching is case-insensitive and tolerates surrounding whitespace;
    /// anything outside the catalog is rejected.
    pub fn from_label(value: &str) -> Result<Self, LedgerError> {
        let normalized = value.trim().to_ascii_lowercase();
        Plan::ALL
            .into_iter()
            .find(|plan| {
                normalized == plan.label().to_ascii_lowercase()
                    || normalized == plan.name().to_ascii_lowercase()
            })
            .ok_or_else(|| LedgerError::UnknownPlan(value.into()))
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Items rung up at the shop point of sale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ShopItem {
    Water,
    Protein,
    EnergyDrink,
}

impl ShopItem {
    /// Catalog order, as rendered on the shop buttons.
    pub const ALL: [ShopItem; 3] = [ShopItem::Water, ShopItem::Protein, ShopItem::EnergyDrink];

    /// Unit price in whole dollars.
    pub fn price(self) -> f64 {
        match self {
            ShopItem::Water => 1.0,
            ShopItem::Protein => 5.0,
            ShopItem::EnergyDrink => 3.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShopItem::Water => "Water",
            ShopItem::Protein => "Protein",
            ShopItem::EnergyDrink => "Energy Drink",
        }
    }

    /// Button caption shown at the point of sale, e.g. `Energy Drink ($3)`.
    pub fn label(self) -> String {
        format!("{} (${})", self.name(), self.price() as u32)
    }

    /// Resolves an item from its button caption or bare name.
    pub fn from_label(value: &str) -> Result<Self, LedgerError> {
        let normalized = value.trim().to_ascii_lowercase();
        ShopItem::ALL
            .into_iter()
            .find(|item| {
                normalized == item.label().to_ascii_lowercase()
                    || normalized == item.name().to_ascii_lowercase()
            })
            .ok_or_else(|| LedgerError::UnknownItem(value.into()))
    }
}

impl fmt::Display for ShopItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
