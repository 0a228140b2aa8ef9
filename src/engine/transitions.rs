use serde::{Deserialize, Serialize};

use crate::engine::AwardOpportunity;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    NewlyAffordable,
    NoLongerAffordable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityTransition {
    pub kind: TransitionKind,
    pub opportunity_id: String,
    pub title: String,
    pub detail: String,
}

/// Compare two matcher runs and report opportunities whose affordability
/// flipped. The first run has no previous state and reports nothing.
pub fn affordability_transitions(
    previous: Option<&[AwardOpportunity]>,
    current: &[AwardOpportunity],
) -> Vec<AffordabilityTransition> {
    let mut events = Vec::new();
    let Some(previous) = previous else {
        return events;
    };

    for now in current {
        let Some(before) = previous.iter().find(|o| o.id == now.id) else {
            continue;
        };
        if !before.can_afford && now.can_afford {
            events.push(AffordabilityTransition {
                kind: TransitionKind::NewlyAffordable,
                opportunity_id: now.id.clone(),
                title: format!("{} is now within reach", now.sweet_spot.title),
                detail: format!(
                    "{} points on hand against {} required.",
                    now.user_balance, now.points_required
                ),
            });
        } else if before.can_afford && !now.can_afford {
            events.push(AffordabilityTransition {
                kind: TransitionKind::NoLongerAffordable,
                opportunity_id: now.id.clone(),
                title: format!("{} slipped out of reach", now.sweet_spot.title),
                detail: format!("Short by {} points.", now.points_shortfall),
            });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balances::PointBalance;
    use crate::catalog::Catalog;
    use crate::engine::matcher::award_opportunities;

    #[test]
    fn first_run_reports_nothing() {
        let catalog = Catalog::builtin();
        let balances = vec![PointBalance::new("chase-ur", 80_000)];
        let current = award_opportunities(&catalog, &balances, None);
        assert!(affordability_transitions(None, &current).is_empty());
    }

    #[test]
    fn balance_growth_reports_newly_affordable() {
        let catalog = Catalog::builtin();
        let before = award_opportunities(&catalog, &[PointBalance::new("chase-ur", 60_000)], None);
        let after = award_opportunities(&catalog, &[PointBalance::new("chase-ur", 80_000)], None);

        let events = affordability_transitions(Some(&before), &after);
        assert!(events
            .iter()
            .any(|e| e.kind == TransitionKind::NewlyAffordable
                && e.opportunity_id == "opp-aeroplan-asia-business"));
        assert!(events
            .iter()
            .all(|e| e.kind == TransitionKind::NewlyAffordable));
    }

    #[test]
    fn balance_drop_reports_no_longer_affordable() {
        let catalog = Catalog::builtin();
        let before = award_opportunities(&catalog, &[PointBalance::new("chase-ur", 80_000)], None);
        let after = award_opportunities(&catalog, &[PointBalance::new("chase-ur", 60_000)], None);

        let events = affordability_transitions(Some(&before), &after);
        assert!(events
            .iter()
            .any(|e| e.kind == TransitionKind::NoLongerAffordable
                && e.opportunity_id == "opp-aeroplan-asia-business"));
    }

    #[test]
    fn unchanged_runs_report_nothing() {
        let catalog = Catalog::builtin();
        let balances = vec![PointBalance::new("chase-ur", 80_000)];
        let before = award_opportunities(&catalog, &balances, None);
        let after = award_opportunities(&catalog, &balances, None);
        assert!(affordability_transitions(Some(&before), &after).is_empty());
    }
}
