use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::catalog::SweetSpot;
use crate::engine::{
    AccessibleProgram, AccessSource, AwardOpportunity, OpportunitySummary, PositioningOption,
};

pub fn render_programs_table(programs: &[AccessibleProgram]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Program", "Balance", "Access", "Via", "Base Value"]);

    for entry in programs {
        let access = match entry.source {
            AccessSource::Direct => Cell::new("DIRECT").fg(Color::Green),
            AccessSource::Transfer => Cell::new("TRANSFER").fg(Color::Cyan),
        };
        table.add_row(Row::from(vec![
            Cell::new(entry.program.name.clone()),
            Cell::new(format_points(entry.balance)),
            access,
            Cell::new(
                entry
                    .transfer_from
                    .as_ref()
                    .map(|t| t.program_name.clone())
                    .unwrap_or_else(|| "-".to_string()),
            ),
            Cell::new(format!("{:.1} cpp", entry.program.base_value_cpp)),
        ]));
    }
    table.to_string()
}

pub fn render_opportunities_table(opportunities: &[AwardOpportunity]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Award",
        "Program",
        "Cabin",
        "Points Needed",
        "Your Balance",
        "Affordable",
        "Short By",
        "Owned",
        "Value",
    ]);

    for o in opportunities {
        let afford = if o.can_afford { "YES" } else { "NO" };
        let afford_cell = if o.can_afford {
            Cell::new(afford).fg(Color::Green)
        } else {
            Cell::new(afford).fg(Color::Red)
        };
        table.add_row(Row::from(vec![
            Cell::new(o.sweet_spot.title.clone()),
            Cell::new(o.program.name.clone()),
            Cell::new(o.sweet_spot.cabin.to_string()),
            Cell::new(format_points(o.points_required)),
            Cell::new(format_points(o.user_balance)),
            afford_cell,
            Cell::new(if o.points_shortfall > 0 {
                format_points(o.points_shortfall)
            } else {
                "-".to_string()
            }),
            Cell::new(format!("{}%", o.percentage_owned)),
            Cell::new(format!("{:.1} cpp", o.sweet_spot.value_cpp)),
        ]));
    }
    table.to_string()
}

pub fn render_positioning_table(options: &[PositioningOption]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Rank",
        "Fly From",
        "City",
        "Award",
        "Positioning Cost",
        "Net Value",
    ]);

    for (idx, option) in options.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            option.alternate_origin.clone(),
            option.alternate_origin_city.clone(),
            option.opportunity.sweet_spot.title.clone(),
            format!("${:.0}", option.estimated_positioning_cost_usd),
            format!("${:.0}", option.total_value_usd),
        ]);
    }
    table.to_string()
}

pub fn render_summary(summary: &OpportunitySummary) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Total",
        "Affordable",
        "Almost There",
        "Potential Value",
    ]);
    table.add_row(vec![
        summary.total.to_string(),
        summary.affordable.to_string(),
        summary.almost_affordable.to_string(),
        format!("${:.0}", summary.total_potential_value_usd),
    ]);

    let mut out = table.to_string();
    if let Some(best) = &summary.best_value {
        out.push_str(&format!(
            "\nBest value: {} ({:.1} cpp)",
            best.sweet_spot.title, best.sweet_spot.value_cpp
        ));
    }
    if let Some(closest) = &summary.closest_to_affording {
        out.push_str(&format!(
            "\nClosest to affording: {} ({}% there, {} short)",
            closest.sweet_spot.title,
            closest.percentage_owned,
            format_points(closest.points_shortfall)
        ));
    }
    out
}

pub fn render_sweet_spots_table(spots: &[SweetSpot]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Award",
        "Program",
        "Route",
        "Cabin",
        "Points",
        "Typical Cash",
        "Value",
    ]);

    for spot in spots {
        table.add_row(vec![
            spot.title.clone(),
            spot.program_id.clone(),
            format!("{} → {}", spot.origin_region, spot.destination_region),
            spot.cabin.to_string(),
            format_points(spot.points_required),
            format!("${:.0}", spot.typical_cash_price_usd),
            format!("{:.1} cpp", spot.value_cpp),
        ]);
    }
    table.to_string()
}

fn format_points(points: u64) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
