pub mod programs;
pub mod regions;
pub mod sweet_spots;

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    Airline,
    CreditCard,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Alliance {
    Oneworld,
    Skyteam,
    StarAlliance,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl Display for CabinClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium economy",
            Self::Business => "business",
            Self::First => "first",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error)]
#[error("unknown cabin class: {0}")]
pub struct CabinClassParseError(pub String);

impl FromStr for CabinClass {
    type Err = CabinClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "economy" | "coach" => Ok(Self::Economy),
            "premium_economy" | "premium" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(CabinClassParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoyaltyProgram {
    pub id: String,
    pub name: String,
    pub kind: ProgramKind,
    pub base_value_cpp: f64,
    pub alliance: Option<Alliance>,
    pub transfer_partners: Vec<String>,
    pub award_booking_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweetSpot {
    pub id: String,
    pub title: String,
    pub description: String,
    pub program_id: String,
    pub origin_region: String,
    pub destination_region: String,
    pub cabin: CabinClass,
    pub points_required: u64,
    pub typical_cash_price_usd: f64,
    pub value_cpp: f64,
    pub booking_tips: Option<String>,
}

impl SweetSpot {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        program_id: &str,
        origin_region: &str,
        destination_region: &str,
        cabin: CabinClass,
        points_required: u64,
        typical_cash_price_usd: f64,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            program_id: program_id.to_string(),
            origin_region: origin_region.to_string(),
            destination_region: destination_region.to_string(),
            cabin,
            points_required,
            typical_cash_price_usd,
            value_cpp: typical_cash_price_usd / points_required as f64 * 100.0,
            booking_tips: None,
        }
    }

    pub fn with_booking_tips(mut self, tips: &str) -> Self {
        self.booking_tips = Some(tips.to_string());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub id: String,
    pub name: String,
    pub countries: Vec<String>,
    pub airports: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HubAirport {
    pub code: String,
    pub city: String,
    pub area: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    Region,
    Country,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationMatch {
    pub kind: DestinationKind,
    pub value: String,
    pub region_id: String,
}

/// Immutable reference data: loyalty programs, curated sweet spots, regions,
/// hub airports, and the positioning-cost matrix. Built once at startup and
/// passed explicitly into the engine; iteration order of every table is the
/// authoring order.
#[derive(Debug, Clone)]
pub struct Catalog {
    programs: Vec<LoyaltyProgram>,
    program_index: HashMap<String, usize>,
    sweet_spots: Vec<SweetSpot>,
    regions: Vec<Region>,
    hubs: Vec<HubAirport>,
    positioning_costs: HashMap<(String, String), f64>,
}

pub const DEFAULT_POSITIONING_COST_USD: f64 = 250.0;

impl Catalog {
    pub fn builtin() -> Self {
        Self::from_parts(
            programs::builtin_programs(),
            sweet_spots::builtin_sweet_spots(),
            regions::builtin_regions(),
            regions::builtin_hubs(),
            regions::builtin_positioning_costs(),
        )
    }

    pub fn from_parts(
        programs: Vec<LoyaltyProgram>,
        sweet_spots: Vec<SweetSpot>,
        regions: Vec<Region>,
        hubs: Vec<HubAirport>,
        positioning_costs: Vec<(String, String, f64)>,
    ) -> Self {
        let program_index = programs
            .iter()
            .enumerate()
            .map(|(idx, program)| (program.id.clone(), idx))
            .collect();
        let positioning_costs = positioning_costs
            .into_iter()
            .map(|(from, to, cost)| ((from, to), cost))
            .collect();
        Self {
            programs,
            program_index,
            sweet_spots,
            regions,
            hubs,
            positioning_costs,
        }
    }

    pub fn programs(&self) -> &[LoyaltyProgram] {
        &self.programs
    }

    pub fn program(&self, id: &str) -> Option<&LoyaltyProgram> {
        self.program_index.get(id).map(|idx| &self.programs[*idx])
    }

    pub fn airline_programs(&self) -> Vec<&LoyaltyProgram> {
        self.programs
            .iter()
            .filter(|p| p.kind == ProgramKind::Airline)
            .collect()
    }

    pub fn credit_card_programs(&self) -> Vec<&LoyaltyProgram> {
        self.programs
            .iter()
            .filter(|p| p.kind == ProgramKind::CreditCard)
            .collect()
    }

    /// Transfer partners of a program, in the program's declared order.
    /// Partner ids with no catalog entry are skipped.
    pub fn transfer_partners(&self, id: &str) -> Vec<&LoyaltyProgram> {
        let Some(program) = self.program(id) else {
            return Vec::new();
        };
        program
            .transfer_partners
            .iter()
            .filter_map(|partner_id| self.program(partner_id))
            .collect()
    }

    pub fn sweet_spots(&self) -> &[SweetSpot] {
        &self.sweet_spots
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_by_id(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn region_by_name(&self, name: &str) -> Option<&Region> {
        self.regions
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    /// Resolve free text to the first region whose name or one of whose
    /// countries contains the query, case-insensitive. Empty queries resolve
    /// to nothing.
    pub fn match_region(&self, query: &str) -> Option<&Region> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.regions.iter().find(|region| {
            region.name.to_lowercase().contains(&needle)
                || region
                    .countries
                    .iter()
                    .any(|country| country.to_lowercase().contains(&needle))
        })
    }

    pub fn search_destinations(&self, query: &str) -> Vec<DestinationMatch> {
        let needle = query.trim().to_lowercase();
        let mut results = Vec::new();
        if needle.is_empty() {
            return results;
        }
        for region in &self.regions {
            if region.name.to_lowercase().contains(&needle) {
                results.push(DestinationMatch {
                    kind: DestinationKind::Region,
                    value: region.name.clone(),
                    region_id: region.id.clone(),
                });
            }
            for country in &region.countries {
                if country.to_lowercase().contains(&needle) {
                    results.push(DestinationMatch {
                        kind: DestinationKind::Country,
                        value: country.clone(),
                        region_id: region.id.clone(),
                    });
                }
            }
        }
        results
    }

    pub fn hubs(&self) -> &[HubAirport] {
        &self.hubs
    }

    pub fn hub(&self, code: &str) -> Option<&HubAirport> {
        self.hubs.iter().find(|h| h.code == code)
    }

    /// Estimated cost of a paid positioning flight between two airports.
    /// The matrix is symmetric; untabulated pairs fall back to a flat
    /// domestic estimate.
    pub fn positioning_cost(&self, from: &str, to: &str) -> f64 {
        let forward = (from.to_string(), to.to_string());
        if let Some(cost) = self.positioning_costs.get(&forward) {
            return *cost;
        }
        let reverse = (to.to_string(), from.to_string());
        if let Some(cost) = self.positioning_costs.get(&reverse) {
            return *cost;
        }
        DEFAULT_POSITIONING_COST_USD
    }

    pub fn best_hubs(&self, region_id: &str) -> &'static [&'static str] {
        regions::best_hubs_for_region(region_id)
    }
}
