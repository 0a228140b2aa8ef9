use std::collections::HashMap;
use std::sync::Mutex;

use once_cell::sync::Lazy;
use sha2::{Digest, Sha256};

use crate::balances::PointBalance;
use crate::engine::AwardOpportunity;

static OPPORTUNITY_CACHE: Lazy<Mutex<HashMap<String, Vec<AwardOpportunity>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Fingerprint of the exact matcher inputs: program/balance pairs in a
/// canonical order plus the filter text. Timestamps are excluded because
/// they never affect the computation. Results must only ever be cached
/// under this key, never under a coarser one.
pub fn fingerprint(balances: &[PointBalance], destination_filter: Option<&str>) -> String {
    let mut pairs: Vec<(&str, u64)> = balances
        .iter()
        .map(|b| (b.program_id.as_str(), b.balance))
        .collect();
    pairs.sort();
    let canonical = serde_json::to_string(&(pairs, destination_filter.unwrap_or("")))
        .unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}

pub fn get(key: &str) -> Option<Vec<AwardOpportunity>> {
    let guard = OPPORTUNITY_CACHE
        .lock()
        .expect("opportunity cache mutex poisoned");
    guard.get(key).cloned()
}

pub fn put(key: String, opportunities: Vec<AwardOpportunity>) {
    let mut guard = OPPORTUNITY_CACHE
        .lock()
        .expect("opportunity cache mutex poisoned");
    guard.insert(key, opportunities);
}
