use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{CabinClass, SweetSpot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpotSort {
    /// Best cents-per-point first.
    #[default]
    Value,
    /// Cheapest in points first.
    Points,
}

#[derive(Debug, Error)]
#[error("unknown sweet-spot sort: {0} (expected value or points)")]
pub struct SpotSortParseError(pub String);

impl FromStr for SpotSort {
    type Err = SpotSortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "value" | "cpp" => Ok(Self::Value),
            "points" | "cost" => Ok(Self::Points),
            _ => Err(SpotSortParseError(s.to_string())),
        }
    }
}

/// Catalog browsing: narrow by cabin and destination-region text, then rank.
pub fn filter_sweet_spots(
    spots: &[SweetSpot],
    cabin: Option<CabinClass>,
    region: Option<&str>,
    sort: SpotSort,
) -> Vec<SweetSpot> {
    let mut filtered: Vec<SweetSpot> = spots
        .iter()
        .filter(|spot| cabin.map(|c| spot.cabin == c).unwrap_or(true))
        .filter(|spot| {
            region
                .map(|r| {
                    spot.destination_region
                        .to_lowercase()
                        .contains(&r.trim().to_lowercase())
                })
                .unwrap_or(true)
        })
        .cloned()
        .collect();
    match sort {
        SpotSort::Value => filtered.sort_by(|a, b| b.value_cpp.total_cmp(&a.value_cpp)),
        SpotSort::Points => filtered.sort_by_key(|spot| spot.points_required),
    }
    filtered
}

/// Curated high-value redemptions. Points and cash baselines are fixed
/// editorial estimates; `value_cpp` is derived from them.
pub fn builtin_sweet_spots() -> Vec<SweetSpot> {
    vec![
        SweetSpot::new(
            "aeroplan-asia-business",
            "North America to Asia in business",
            "Star Alliance business class to East Asia at a flat rate, with a free stopover for 5,000 points.",
            "aeroplan",
            "North America",
            "Asia",
            CabinClass::Business,
            70_000,
            3_500.0,
        )
        .with_booking_tips("EVA Air and ANA release the most partner space; avoid United phantom availability by re-checking on the Aeroplan site."),
        SweetSpot::new(
            "aeroplan-europe-business",
            "North America to Europe in business",
            "Star Alliance business class across the Atlantic without carrier surcharges.",
            "aeroplan",
            "North America",
            "Europe",
            CabinClass::Business,
            60_000,
            2_900.0,
        )
        .with_booking_tips("LOT, TAP and SAS space is plentiful outside summer peaks."),
        SweetSpot::new(
            "aeroplan-canada-hop",
            "Short-haul hops into Canada",
            "Sub-500-mile flights into Canada at the lowest distance band.",
            "aeroplan",
            "North America",
            "Canada",
            CabinClass::Economy,
            10_000,
            320.0,
        ),
        SweetSpot::new(
            "virgin-ana-first",
            "ANA first class to Japan",
            "Round-trip ANA first class booked through Virgin Atlantic, the most famous redemption in the hobby.",
            "virginatlantic",
            "North America",
            "Asia",
            CabinClass::First,
            110_000,
            14_000.0,
        )
        .with_booking_tips("Space opens around two weeks out if not sooner; call Virgin to ticket."),
        SweetSpot::new(
            "virgin-delta-one-europe",
            "Delta One to Europe via Virgin",
            "Delta's own transatlantic business cabin, far cheaper through Flying Club than through SkyMiles.",
            "virginatlantic",
            "North America",
            "Europe",
            CabinClass::Business,
            50_000,
            2_600.0,
        ),
        SweetSpot::new(
            "alaska-jal-business",
            "JAL business class via Alaska",
            "Japan Airlines business to Tokyo with a free stopover allowed on a one-way.",
            "alaska-mileageplan",
            "North America",
            "Asia",
            CabinClass::Business,
            60_000,
            4_000.0,
        )
        .with_booking_tips("Award space is released in waves; set alerts for J inventory."),
        SweetSpot::new(
            "alaska-cathay-business",
            "Cathay Pacific business via Alaska",
            "Hong Kong and beyond in Cathay business, bookable only by phone for some itineraries.",
            "alaska-mileageplan",
            "North America",
            "Asia",
            CabinClass::Business,
            85_000,
            4_500.0,
        ),
        SweetSpot::new(
            "lifemiles-europe-business",
            "Star Alliance to Europe on LifeMiles",
            "Lufthansa, Swiss and friends in business with zero fuel surcharges.",
            "lifemiles",
            "North America",
            "Europe",
            CabinClass::Business,
            63_000,
            3_200.0,
        )
        .with_booking_tips("The search engine hides mixed-cabin itineraries; search segment by segment."),
        SweetSpot::new(
            "lifemiles-africa-business",
            "Star Alliance to Africa on LifeMiles",
            "Ethiopian and Egyptair business class to the continent at a rate most programs cannot touch.",
            "lifemiles",
            "North America",
            "Africa",
            CabinClass::Business,
            78_000,
            3_900.0,
        ),
        SweetSpot::new(
            "flying-blue-promo-europe",
            "Flying Blue Promo Rewards to Europe",
            "Monthly discounted economy awards to Paris and Amsterdam from rotating US gateways.",
            "flying-blue",
            "North America",
            "Europe",
            CabinClass::Economy,
            20_000,
            700.0,
        )
        .with_booking_tips("Promo Rewards refresh at the start of each month; transfer points only after finding space."),
        SweetSpot::new(
            "krisflyer-suites",
            "Singapore Suites to Asia",
            "The A380 Suites cabin between the US and Singapore, bookable with Saver space for members.",
            "krisflyer",
            "North America",
            "Asia",
            CabinClass::First,
            107_000,
            8_000.0,
        )
        .with_booking_tips("Saver Suites space is only released to KrisFlyer members; waitlists frequently clear."),
        SweetSpot::new(
            "avios-qsuites",
            "Qatar Qsuite via Avios",
            "Qatar Airways' Qsuite business class to Doha priced on the partner award chart.",
            "avios",
            "North America",
            "Middle East",
            CabinClass::Business,
            70_000,
            4_200.0,
        ),
        SweetSpot::new(
            "avios-short-haul",
            "Avios short-haul partner flights",
            "Distance-based pricing makes sub-1,151-mile AA and Alaska flights a standout use of Avios anywhere they fly.",
            "avios",
            "Various",
            "Various",
            CabinClass::Economy,
            9_000,
            220.0,
        ),
        SweetSpot::new(
            "etihad-apartment",
            "Etihad First Apartment",
            "The A380 Apartment between New York and Abu Dhabi, booked with Etihad Guest miles.",
            "etihad",
            "North America",
            "Middle East",
            CabinClass::First,
            115_000,
            13_000.0,
        )
        .with_booking_tips("Only bookable while the A380 operates JFK-AUH; check the schedule first."),
        SweetSpot::new(
            "emirates-first",
            "Emirates first class with shower spa",
            "The A380 first cabin to Dubai, including the onboard shower.",
            "emirates-skywards",
            "North America",
            "Middle East",
            CabinClass::First,
            136_250,
            11_000.0,
        ),
        SweetSpot::new(
            "united-polaris-oceania",
            "United Polaris to Australia",
            "Nonstop Polaris business to Sydney and Melbourne on United's own metal.",
            "united-mileageplus",
            "North America",
            "Oceania",
            CabinClass::Business,
            110_000,
            5_200.0,
        ),
        SweetSpot::new(
            "aa-web-special-south-america",
            "AA Web Special to South America",
            "Dynamic Web Special business fares to Brazil and Argentina that routinely undercut the chart.",
            "american-aadvantage",
            "North America",
            "South America",
            CabinClass::Business,
            51_000,
            2_400.0,
        ),
        SweetSpot::new(
            "jetblue-mint-caribbean",
            "Mint to the Caribbean",
            "JetBlue's lie-flat Mint cabin on leisure routes when cash fares spike.",
            "jetblue-trueblue",
            "North America",
            "Central America & Caribbean",
            CabinClass::Business,
            45_000,
            1_600.0,
        ),
        SweetSpot::new(
            "southwest-mexico",
            "Southwest to Mexico beaches",
            "Revenue-pegged awards to Cancun and Cabo, doubled in value with a Companion Pass.",
            "southwest-rr",
            "North America",
            "Central America & Caribbean",
            CabinClass::Economy,
            12_000,
            380.0,
        ),
        SweetSpot::new(
            "aerlingus-offpeak-ireland",
            "Aer Lingus off-peak to Ireland",
            "Off-peak transatlantic economy from the East Coast at short-haul prices.",
            "aerlingus",
            "North America",
            "Europe",
            CabinClass::Economy,
            13_000,
            550.0,
        )
        .with_booking_tips("Off-peak dates from Boston and Chicago; taxes stay under $100."),
        SweetSpot::new(
            "eurobonus-scandinavia",
            "SAS EuroBonus to Scandinavia",
            "SAS business class to Copenhagen, Stockholm and Oslo with generous stopover rules.",
            "eurobonus",
            "North America",
            "Europe",
            CabinClass::Business,
            80_000,
            3_400.0,
        ),
        SweetSpot::new(
            "qantas-asia-business",
            "Sydney to Singapore in business",
            "Classic Flight Rewards on Qantas metal between Australia and Southeast Asia.",
            "qantas",
            "Oceania",
            "Asia",
            CabinClass::Business,
            68_400,
            2_900.0,
        ),
        SweetSpot::new(
            "velocity-tasman",
            "Trans-Tasman on Velocity points",
            "Virgin Australia economy across to New Zealand for fewer points than a dinner out.",
            "velocity",
            "Oceania",
            "Oceania",
            CabinClass::Economy,
            15_500,
            420.0,
        ),
        SweetSpot::new(
            "smiles-south-america",
            "GOL hops around South America",
            "Intra-Brazil and regional GOL flights on Smiles, ideal for multi-city trips.",
            "smiles",
            "South America",
            "South America",
            CabinClass::Economy,
            10_000,
            300.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::programs::builtin_programs;

    #[test]
    fn sweet_spot_programs_all_exist() {
        let programs = builtin_programs();
        for spot in builtin_sweet_spots() {
            assert!(
                programs.iter().any(|p| p.id == spot.program_id),
                "{} books through unknown program {}",
                spot.id,
                spot.program_id
            );
        }
    }

    #[test]
    fn sweet_spot_ids_are_unique() {
        let spots = builtin_sweet_spots();
        for (idx, spot) in spots.iter().enumerate() {
            assert!(
                !spots[..idx].iter().any(|s| s.id == spot.id),
                "duplicate sweet spot id {}",
                spot.id
            );
        }
    }

    #[test]
    fn filter_narrows_by_cabin_and_region_and_sorts() {
        let spots = builtin_sweet_spots();
        let business_europe = filter_sweet_spots(
            &spots,
            Some(CabinClass::Business),
            Some("Europe"),
            SpotSort::Value,
        );
        assert!(!business_europe.is_empty());
        assert!(business_europe
            .iter()
            .all(|s| s.cabin == CabinClass::Business && s.destination_region == "Europe"));
        assert!(business_europe
            .windows(2)
            .all(|w| w[0].value_cpp >= w[1].value_cpp));

        let by_points = filter_sweet_spots(&spots, None, None, SpotSort::Points);
        assert!(by_points
            .windows(2)
            .all(|w| w[0].points_required <= w[1].points_required));
    }

    #[test]
    fn sort_parses_aliases_and_rejects_unknowns() {
        assert_eq!("value".parse::<SpotSort>().unwrap(), SpotSort::Value);
        assert_eq!("CPP".parse::<SpotSort>().unwrap(), SpotSort::Value);
        assert_eq!("points".parse::<SpotSort>().unwrap(), SpotSort::Points);
        assert!("miles".parse::<SpotSort>().is_err());
    }

    #[test]
    fn destination_regions_resolve_or_are_wildcard() {
        let regions = crate::catalog::regions::builtin_regions();
        for spot in builtin_sweet_spots() {
            assert!(
                spot.destination_region == "Various"
                    || regions
                        .iter()
                        .any(|r| r.name.eq_ignore_ascii_case(&spot.destination_region)),
                "{} targets unknown region {}",
                spot.id,
                spot.destination_region
            );
        }
    }
}
