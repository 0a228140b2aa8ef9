use crate::catalog::Catalog;
use crate::engine::{AwardOpportunity, PositioningOption};

/// At most this many suggestions are returned.
pub const MAX_OPTIONS: usize = 4;
/// Fan-out caps: top affordable opportunities and top regional hubs.
const TOP_AFFORDABLE: usize = 3;
const TOP_HUBS: usize = 2;

/// Suggest paid repositioning flights to better-connected hubs for the best
/// affordable opportunities. Empty when the destination does not resolve to
/// a region, or when the home airport is already among the region's best
/// hubs.
pub fn positioning_options(
    catalog: &Catalog,
    home_airport: &str,
    opportunities: &[AwardOpportunity],
    destination_filter: &str,
) -> Vec<PositioningOption> {
    let mut options = Vec::new();
    if home_airport.trim().is_empty() {
        return options;
    }
    let Some(region) = catalog.match_region(destination_filter) else {
        return options;
    };
    let best_hubs = catalog.best_hubs(&region.id);
    if best_hubs.iter().any(|hub| *hub == home_airport) {
        return options;
    }

    for opportunity in opportunities
        .iter()
        .filter(|o| o.can_afford)
        .take(TOP_AFFORDABLE)
    {
        for hub_code in best_hubs.iter().take(TOP_HUBS) {
            let Some(hub) = catalog.hub(hub_code) else {
                continue;
            };
            let positioning_cost = catalog.positioning_cost(home_airport, hub_code);
            options.push(PositioningOption {
                id: format!("pos-{}-{}", opportunity.id, hub_code),
                alternate_origin: hub.code.clone(),
                alternate_origin_city: hub.city.clone(),
                opportunity: opportunity.clone(),
                estimated_positioning_cost_usd: positioning_cost,
                total_value_usd: opportunity.estimated_value_usd - positioning_cost,
                reasoning: format!(
                    "{} has better award availability for {}. Fly there for ~${:.0}, then use your points for the main flight.",
                    hub.city, opportunity.sweet_spot.destination_region, positioning_cost
                ),
            });
        }
    }

    options.sort_by(|a, b| b.total_value_usd.total_cmp(&a.total_value_usd));
    options.truncate(MAX_OPTIONS);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balances::PointBalance;
    use crate::engine::matcher::award_opportunities;

    fn asia_opportunities(catalog: &Catalog, points: u64) -> Vec<AwardOpportunity> {
        let balances = vec![PointBalance::new("chase-ur", points)];
        award_opportunities(catalog, &balances, Some("Asia"))
    }

    #[test]
    fn home_at_a_best_hub_suppresses_suggestions() {
        let catalog = Catalog::builtin();
        let opportunities = asia_opportunities(&catalog, 80_000);
        assert!(positioning_options(&catalog, "LAX", &opportunities, "Asia").is_empty());
    }

    #[test]
    fn boston_to_asia_positions_through_west_coast() {
        let catalog = Catalog::builtin();
        let opportunities = asia_opportunities(&catalog, 80_000);
        let options = positioning_options(&catalog, "BOS", &opportunities, "Asia");
        assert!(!options.is_empty());

        let via_lax = options
            .iter()
            .find(|o| o.alternate_origin == "LAX")
            .expect("no LAX option");
        assert_eq!(via_lax.alternate_origin_city, "Los Angeles");
        assert_eq!(via_lax.estimated_positioning_cost_usd, 350.0);
        // $3,500 award value less the $350 positioning flight.
        assert_eq!(via_lax.total_value_usd, 3_150.0);
    }

    #[test]
    fn options_are_capped_and_sorted_by_net_value() {
        let catalog = Catalog::builtin();
        // A large balance makes several Asia spots affordable; 3 spots x 2
        // hubs would yield 6 candidates before the cap.
        let opportunities = asia_opportunities(&catalog, 200_000);
        let options = positioning_options(&catalog, "BOS", &opportunities, "Asia");
        assert!(options.len() <= MAX_OPTIONS);
        assert!(options
            .windows(2)
            .all(|w| w[0].total_value_usd >= w[1].total_value_usd));
    }

    #[test]
    fn unresolved_destination_yields_nothing() {
        let catalog = Catalog::builtin();
        let opportunities = asia_opportunities(&catalog, 80_000);
        assert!(positioning_options(&catalog, "BOS", &opportunities, "Narnia").is_empty());
        assert!(positioning_options(&catalog, "BOS", &opportunities, "").is_empty());
    }

    #[test]
    fn empty_home_airport_yields_nothing() {
        let catalog = Catalog::builtin();
        let opportunities = asia_opportunities(&catalog, 80_000);
        assert!(positioning_options(&catalog, "", &opportunities, "Asia").is_empty());
    }

    #[test]
    fn unaffordable_opportunities_are_not_positioned() {
        let catalog = Catalog::builtin();
        let opportunities = asia_opportunities(&catalog, 5_000);
        assert!(opportunities.iter().all(|o| !o.can_afford));
        assert!(positioning_options(&catalog, "BOS", &opportunities, "Asia").is_empty());
    }

    #[test]
    fn country_text_resolves_the_region() {
        let catalog = Catalog::builtin();
        let opportunities = asia_opportunities(&catalog, 80_000);
        let options = positioning_options(&catalog, "BOS", &opportunities, "Japan");
        assert!(!options.is_empty());
    }
}
