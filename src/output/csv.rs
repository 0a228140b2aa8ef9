use anyhow::Result;

use crate::engine::{AwardOpportunity, PositioningOption};

pub fn opportunities_to_csv(opportunities: &[AwardOpportunity]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "sweet_spot",
        "program",
        "cabin",
        "points_required",
        "user_balance",
        "can_afford",
        "points_shortfall",
        "percentage_owned",
        "value_cpp",
        "estimated_value_usd",
        "transfer_from",
    ])?;
    for o in opportunities {
        writer.write_record([
            o.sweet_spot.id.clone(),
            o.program.id.clone(),
            o.sweet_spot.cabin.to_string(),
            o.points_required.to_string(),
            o.user_balance.to_string(),
            o.can_afford.to_string(),
            o.points_shortfall.to_string(),
            o.percentage_owned.to_string(),
            format!("{:.2}", o.sweet_spot.value_cpp),
            format!("{:.2}", o.estimated_value_usd),
            o.transfer_source
                .as_ref()
                .map(|t| t.program_id.clone())
                .unwrap_or_default(),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn positioning_to_csv(options: &[PositioningOption]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "alternate_origin",
        "alternate_origin_city",
        "sweet_spot",
        "estimated_positioning_cost_usd",
        "total_value_usd",
    ])?;
    for option in options {
        writer.write_record([
            option.alternate_origin.clone(),
            option.alternate_origin_city.clone(),
            option.opportunity.sweet_spot.id.clone(),
            format!("{:.2}", option.estimated_positioning_cost_usd),
            format!("{:.2}", option.total_value_usd),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}
