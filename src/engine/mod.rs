pub mod cache;
pub mod matcher;
pub mod positioning;
pub mod resolver;
pub mod summary;
pub mod transitions;

use serde::{Deserialize, Serialize};

use crate::balances::PointBalance;
use crate::catalog::{Catalog, LoyaltyProgram, SweetSpot};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AccessSource {
    Direct,
    Transfer,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferSource {
    pub program_id: String,
    pub program_name: String,
    pub balance: u64,
}

/// A loyalty program the user can redeem through, with the best balance
/// reachable for it. Recomputed from scratch on every input change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessibleProgram {
    pub program_id: String,
    pub program: LoyaltyProgram,
    pub balance: u64,
    pub source: AccessSource,
    pub transfer_from: Option<TransferSource>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AwardOpportunity {
    pub id: String,
    pub sweet_spot: SweetSpot,
    pub program: LoyaltyProgram,
    pub user_balance: u64,
    pub points_required: u64,
    pub can_afford: bool,
    pub points_shortfall: u64,
    pub percentage_owned: u8,
    pub transfer_source: Option<TransferSource>,
    pub estimated_value_usd: f64,
}

impl AwardOpportunity {
    pub fn is_almost_affordable(&self) -> bool {
        !self.can_afford && self.percentage_owned >= 75
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PositioningOption {
    pub id: String,
    pub alternate_origin: String,
    pub alternate_origin_city: String,
    pub opportunity: AwardOpportunity,
    pub estimated_positioning_cost_usd: f64,
    pub total_value_usd: f64,
    pub reasoning: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OpportunitySummary {
    pub total: usize,
    pub affordable: usize,
    pub almost_affordable: usize,
    pub total_potential_value_usd: f64,
    pub best_value: Option<AwardOpportunity>,
    pub closest_to_affording: Option<AwardOpportunity>,
}

/// Sorted distinct destination regions the user could book a sweet spot to,
/// excluding the "Various" wildcard.
pub fn available_destinations(catalog: &Catalog, balances: &[PointBalance]) -> Vec<String> {
    let accessible = resolver::resolve_accessible_programs(catalog, balances);
    let mut destinations: Vec<String> = Vec::new();
    for spot in catalog.sweet_spots() {
        if spot.destination_region == "Various" {
            continue;
        }
        if !accessible.iter().any(|a| a.program_id == spot.program_id) {
            continue;
        }
        if !destinations.contains(&spot.destination_region) {
            destinations.push(spot.destination_region.clone());
        }
    }
    destinations.sort();
    destinations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balances::PointBalance;
    use crate::catalog::Catalog;

    #[test]
    fn available_destinations_are_sorted_and_deduplicated() {
        let catalog = Catalog::builtin();
        let balances = vec![PointBalance::new("chase-ur", 50_000)];
        let destinations = available_destinations(&catalog, &balances);
        assert!(!destinations.is_empty());
        assert!(destinations.windows(2).all(|w| w[0] < w[1]));
        assert!(!destinations.iter().any(|d| d == "Various"));
        // chase-ur transfers reach aeroplan, so Asia must be present.
        assert!(destinations.iter().any(|d| d == "Asia"));
    }

    #[test]
    fn no_balances_means_no_destinations() {
        let catalog = Catalog::builtin();
        assert!(available_destinations(&catalog, &[]).is_empty());
    }
}
