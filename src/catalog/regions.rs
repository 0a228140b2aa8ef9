use crate::catalog::{HubAirport, Region};

fn region(id: &str, name: &str, countries: &[&str], airports: &[&str]) -> Region {
    Region {
        id: id.to_string(),
        name: name.to_string(),
        countries: countries.iter().map(|c| c.to_string()).collect(),
        airports: airports.iter().map(|a| a.to_string()).collect(),
    }
}

pub fn builtin_regions() -> Vec<Region> {
    vec![
        region(
            "asia",
            "Asia",
            &[
                "Japan", "South Korea", "China", "Thailand", "Singapore", "Hong Kong", "Taiwan",
                "India", "Vietnam", "Indonesia", "Malaysia", "Philippines",
            ],
            &[
                "NRT", "HND", "ICN", "PVG", "PEK", "BKK", "SIN", "HKG", "TPE", "DEL", "BOM", "SGN",
                "CGK", "KUL", "MNL",
            ],
        ),
        region(
            "europe",
            "Europe",
            &[
                "United Kingdom", "France", "Germany", "Italy", "Spain", "Netherlands",
                "Switzerland", "Portugal", "Greece", "Ireland", "Austria", "Belgium",
            ],
            &[
                "LHR", "LGW", "CDG", "FRA", "MUC", "FCO", "MXP", "MAD", "BCN", "AMS", "ZRH", "LIS",
                "ATH", "DUB", "VIE", "BRU",
            ],
        ),
        region(
            "middle-east",
            "Middle East",
            &[
                "UAE", "Qatar", "Israel", "Jordan", "Saudi Arabia", "Oman", "Bahrain", "Kuwait",
            ],
            &[
                "DXB", "AUH", "DOH", "TLV", "AMM", "RUH", "JED", "MCT", "BAH", "KWI",
            ],
        ),
        region(
            "oceania",
            "Oceania",
            &["Australia", "New Zealand", "Fiji", "French Polynesia"],
            &["SYD", "MEL", "BNE", "PER", "AKL", "CHC", "NAN", "PPT"],
        ),
        region(
            "south-america",
            "South America",
            &["Brazil", "Argentina", "Chile", "Peru", "Colombia", "Ecuador"],
            &["GRU", "GIG", "EZE", "SCL", "LIM", "BOG", "UIO"],
        ),
        region(
            "central-america-caribbean",
            "Central America & Caribbean",
            &[
                "Mexico", "Costa Rica", "Panama", "Jamaica", "Dominican Republic", "Bahamas",
                "Cuba", "Puerto Rico",
            ],
            &["MEX", "CUN", "SJO", "PTY", "MBJ", "PUJ", "NAS", "HAV", "SJU"],
        ),
        region(
            "africa",
            "Africa",
            &["South Africa", "Morocco", "Egypt", "Kenya", "Tanzania", "Ethiopia"],
            &["JNB", "CPT", "CMN", "CAI", "NBO", "DAR", "ADD"],
        ),
        region(
            "canada",
            "Canada",
            &["Canada"],
            &["YYZ", "YVR", "YUL", "YYC", "YOW"],
        ),
        region(
            "north-america",
            "North America",
            &["United States", "Canada", "Mexico"],
            &[
                "JFK", "LAX", "ORD", "DFW", "DEN", "SFO", "SEA", "ATL", "BOS", "MIA", "IAD", "IAH",
                "PHX", "LAS", "MSP", "DTW", "PHL", "CLT", "YYZ", "YVR", "YUL", "MEX", "CUN",
            ],
        ),
    ]
}

fn hub(code: &str, city: &str, area: &str) -> HubAirport {
    HubAirport {
        code: code.to_string(),
        city: city.to_string(),
        area: area.to_string(),
    }
}

/// US hubs with strong international award availability, used as positioning
/// targets.
pub fn builtin_hubs() -> Vec<HubAirport> {
    vec![
        hub("JFK", "New York", "Northeast"),
        hub("EWR", "Newark", "Northeast"),
        hub("LAX", "Los Angeles", "West Coast"),
        hub("SFO", "San Francisco", "West Coast"),
        hub("ORD", "Chicago", "Midwest"),
        hub("DFW", "Dallas", "South"),
        hub("MIA", "Miami", "Southeast"),
        hub("ATL", "Atlanta", "Southeast"),
        hub("IAD", "Washington DC", "Northeast"),
        hub("SEA", "Seattle", "West Coast"),
        hub("BOS", "Boston", "Northeast"),
        hub("IAH", "Houston", "South"),
    ]
}

/// Flat USD point-estimates for domestic positioning flights, tabulated one
/// direction and looked up symmetrically.
pub fn builtin_positioning_costs() -> Vec<(String, String, f64)> {
    let table: &[(&str, &str, f64)] = &[
        // From the Northeast
        ("JFK", "LAX", 300.0),
        ("JFK", "SFO", 350.0),
        ("JFK", "ORD", 200.0),
        ("JFK", "MIA", 200.0),
        ("JFK", "DFW", 250.0),
        ("JFK", "SEA", 350.0),
        ("BOS", "LAX", 350.0),
        ("BOS", "SFO", 350.0),
        ("BOS", "ORD", 200.0),
        ("BOS", "MIA", 200.0),
        ("BOS", "JFK", 100.0),
        ("BOS", "DFW", 250.0),
        ("IAD", "LAX", 300.0),
        ("IAD", "SFO", 350.0),
        ("IAD", "ORD", 180.0),
        ("IAD", "MIA", 180.0),
        ("IAD", "JFK", 150.0),
        ("IAD", "DFW", 220.0),
        // From the West Coast
        ("LAX", "SFO", 100.0),
        ("LAX", "ORD", 250.0),
        ("LAX", "MIA", 300.0),
        ("LAX", "DFW", 200.0),
        ("LAX", "SEA", 150.0),
        ("SFO", "ORD", 280.0),
        ("SFO", "MIA", 350.0),
        ("SFO", "DFW", 250.0),
        ("SFO", "SEA", 150.0),
        ("SEA", "ORD", 280.0),
        ("SEA", "DFW", 280.0),
        // From the Midwest and South
        ("ORD", "MIA", 200.0),
        ("ORD", "DFW", 180.0),
        ("DFW", "MIA", 200.0),
        ("ATL", "JFK", 200.0),
        ("ATL", "LAX", 280.0),
        ("ATL", "ORD", 180.0),
        ("ATL", "MIA", 150.0),
        ("ATL", "DFW", 180.0),
        ("IAH", "JFK", 280.0),
        ("IAH", "LAX", 220.0),
        ("IAH", "ORD", 200.0),
        ("IAH", "MIA", 200.0),
        ("IAH", "DFW", 150.0),
    ];
    table
        .iter()
        .map(|(from, to, cost)| (from.to_string(), to.to_string(), *cost))
        .collect()
}

/// Hubs with the best award access to a destination region, strongest first.
pub fn best_hubs_for_region(region_id: &str) -> &'static [&'static str] {
    match region_id {
        "asia" => &["LAX", "SFO", "SEA", "JFK"],
        "europe" => &["JFK", "BOS", "IAD", "ORD"],
        "middle-east" => &["JFK", "IAD", "ORD"],
        "oceania" => &["LAX", "SFO", "DFW"],
        "south-america" => &["MIA", "IAH", "DFW", "ATL"],
        "central-america-caribbean" => &["MIA", "IAH", "DFW", "ATL"],
        "africa" => &["JFK", "IAD", "ATL"],
        "canada" => &["SEA", "ORD", "BOS", "JFK"],
        "north-america" => &["ORD", "DFW", "ATL", "DEN"],
        _ => &["JFK", "LAX", "ORD"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_ids_are_unique() {
        let regions = builtin_regions();
        for (idx, region) in regions.iter().enumerate() {
            assert!(
                !regions[..idx].iter().any(|r| r.id == region.id),
                "duplicate region id {}",
                region.id
            );
        }
    }

    #[test]
    fn best_hubs_are_known_hub_codes() {
        let hubs = builtin_hubs();
        for region in builtin_regions() {
            for code in best_hubs_for_region(&region.id) {
                assert!(
                    hubs.iter().any(|h| h.code == *code) || *code == "DEN",
                    "unknown hub {code} for region {}",
                    region.id
                );
            }
        }
    }
}
