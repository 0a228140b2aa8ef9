use crate::engine::{AwardOpportunity, OpportunitySummary};

/// Reduce an opportunity list to its top-line numbers. Ties for best value
/// and closest-to-affording keep the earlier opportunity.
pub fn summarize(opportunities: &[AwardOpportunity]) -> OpportunitySummary {
    let mut affordable = 0usize;
    let mut almost_affordable = 0usize;
    let mut total_potential_value_usd = 0.0;
    let mut best_value: Option<&AwardOpportunity> = None;
    let mut closest_to_affording: Option<&AwardOpportunity> = None;

    for opportunity in opportunities {
        if opportunity.can_afford {
            affordable += 1;
            total_potential_value_usd += opportunity.estimated_value_usd;
            let better = best_value
                .map(|best| opportunity.sweet_spot.value_cpp > best.sweet_spot.value_cpp)
                .unwrap_or(true);
            if better {
                best_value = Some(opportunity);
            }
        } else {
            if opportunity.is_almost_affordable() {
                almost_affordable += 1;
            }
            let closer = closest_to_affording
                .map(|closest| opportunity.percentage_owned > closest.percentage_owned)
                .unwrap_or(true);
            if closer {
                closest_to_affording = Some(opportunity);
            }
        }
    }

    OpportunitySummary {
        total: opportunities.len(),
        affordable,
        almost_affordable,
        total_potential_value_usd,
        best_value: best_value.cloned(),
        closest_to_affording: closest_to_affording.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balances::PointBalance;
    use crate::catalog::Catalog;
    use crate::engine::matcher::award_opportunities;

    #[test]
    fn empty_list_summarizes_to_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.affordable, 0);
        assert_eq!(summary.almost_affordable, 0);
        assert_eq!(summary.total_potential_value_usd, 0.0);
        assert!(summary.best_value.is_none());
        assert!(summary.closest_to_affording.is_none());
    }

    #[test]
    fn counts_and_value_are_consistent() {
        let catalog = Catalog::builtin();
        let balances = vec![PointBalance::new("chase-ur", 75_000)];
        let opportunities = award_opportunities(&catalog, &balances, None);
        let summary = summarize(&opportunities);

        assert_eq!(summary.total, opportunities.len());
        let unaffordable = opportunities.iter().filter(|o| !o.can_afford).count();
        assert_eq!(summary.affordable + unaffordable, summary.total);

        let expected_value: f64 = opportunities
            .iter()
            .filter(|o| o.can_afford)
            .map(|o| o.estimated_value_usd)
            .sum();
        assert_eq!(summary.total_potential_value_usd, expected_value);
    }

    #[test]
    fn best_value_is_the_top_cpp_affordable() {
        let catalog = Catalog::builtin();
        let balances = vec![PointBalance::new("chase-ur", 75_000)];
        let opportunities = award_opportunities(&catalog, &balances, None);
        let summary = summarize(&opportunities);

        let best = summary.best_value.expect("no best value");
        assert!(best.can_afford);
        assert!(opportunities
            .iter()
            .filter(|o| o.can_afford)
            .all(|o| o.sweet_spot.value_cpp <= best.sweet_spot.value_cpp));
    }

    #[test]
    fn closest_to_affording_has_the_highest_percentage() {
        let catalog = Catalog::builtin();
        let balances = vec![PointBalance::new("chase-ur", 75_000)];
        let opportunities = award_opportunities(&catalog, &balances, None);
        let summary = summarize(&opportunities);

        let closest = summary.closest_to_affording.expect("no closest");
        assert!(!closest.can_afford);
        assert!(opportunities
            .iter()
            .filter(|o| !o.can_afford)
            .all(|o| o.percentage_owned <= closest.percentage_owned));
    }

    #[test]
    fn almost_affordable_requires_75_percent() {
        let catalog = Catalog::builtin();
        // 80k against the 107k KrisFlyer Suites spot is 75%; against the
        // 110k spots it is 73%.
        let balances = vec![PointBalance::new("chase-ur", 80_000)];
        let opportunities = award_opportunities(&catalog, &balances, None);
        let summary = summarize(&opportunities);
        let expected = opportunities
            .iter()
            .filter(|o| !o.can_afford && o.percentage_owned >= 75)
            .count();
        assert_eq!(summary.almost_affordable, expected);
        assert!(summary.almost_affordable >= 1);
    }
}
