use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PointBalance {
    pub program_id: String,
    pub balance: u64,
    pub last_updated: DateTime<Utc>,
}

impl PointBalance {
    pub fn new(program_id: impl Into<String>, balance: u64) -> Self {
        Self {
            program_id: program_id.into(),
            balance,
            last_updated: Utc::now(),
        }
    }
}

/// A `<program-id>=<points>` pair from `--points` flags or API payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceSpec {
    pub program_id: String,
    pub points: u64,
}

#[derive(Debug, Error)]
#[error("invalid balance spec `{0}` (expected <program-id>=<points>)")]
pub struct BalanceSpecParseError(pub String);

impl FromStr for BalanceSpec {
    type Err = BalanceSpecParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((program, points)) = s.split_once('=') else {
            return Err(BalanceSpecParseError(s.to_string()));
        };
        let program = program.trim();
        let points = points.trim().replace(['_', ','], "");
        if program.is_empty() {
            return Err(BalanceSpecParseError(s.to_string()));
        }
        let points = points
            .parse::<u64>()
            .map_err(|_| BalanceSpecParseError(s.to_string()))?;
        Ok(Self {
            program_id: program.to_string(),
            points,
        })
    }
}

pub fn parse_balance_specs(raw: &[String]) -> Result<Vec<BalanceSpec>, BalanceSpecParseError> {
    raw.iter().map(|spec| spec.parse()).collect()
}

/// Overlay CLI/API overrides onto the configured balances: an override
/// replaces the balance for its program or appends a new one.
pub fn apply_balance_overrides(balances: &mut Vec<PointBalance>, overrides: &[BalanceSpec]) {
    for spec in overrides {
        match balances
            .iter_mut()
            .find(|b| b.program_id == spec.program_id)
        {
            Some(existing) => {
                existing.balance = spec.points;
                existing.last_updated = Utc::now();
            }
            None => balances.push(PointBalance::new(spec.program_id.clone(), spec.points)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_balance_specs() {
        let spec: BalanceSpec = "chase-ur=80000".parse().expect("failed to parse spec");
        assert_eq!(spec.program_id, "chase-ur");
        assert_eq!(spec.points, 80_000);

        let spec: BalanceSpec = " amex-mr = 1_250,000 ".parse().expect("separators rejected");
        assert_eq!(spec.points, 1_250_000);

        assert!("chase-ur".parse::<BalanceSpec>().is_err());
        assert!("=80000".parse::<BalanceSpec>().is_err());
        assert!("chase-ur=lots".parse::<BalanceSpec>().is_err());
    }

    #[test]
    fn overrides_replace_and_append() {
        let mut balances = vec![PointBalance::new("chase-ur", 10_000)];
        apply_balance_overrides(
            &mut balances,
            &[
                BalanceSpec {
                    program_id: "chase-ur".to_string(),
                    points: 80_000,
                },
                BalanceSpec {
                    program_id: "bilt".to_string(),
                    points: 25_000,
                },
            ],
        );
        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].balance, 80_000);
        assert_eq!(balances[1].program_id, "bilt");
    }
}
