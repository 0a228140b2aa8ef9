use crate::balances::PointBalance;
use crate::catalog::{Catalog, LoyaltyProgram, ProgramKind};
use crate::engine::{AccessSource, AccessibleProgram, TransferSource};

/// Resolve every loyalty program the user can redeem through: airline
/// balances grant direct access, credit-card balances grant one-hop transfer
/// access to each partner. When a program is reachable from several sources
/// the entry with the larger balance wins (first seen wins exact ties);
/// balances are never summed across sources. Balances on unknown program ids
/// produce nothing.
pub fn resolve_accessible_programs(
    catalog: &Catalog,
    balances: &[PointBalance],
) -> Vec<AccessibleProgram> {
    let mut accessible: Vec<AccessibleProgram> = Vec::new();

    for balance in balances {
        let Some(program) = catalog.program(&balance.program_id) else {
            continue;
        };

        match program.kind {
            ProgramKind::Airline => {
                if !accessible.iter().any(|a| a.program_id == program.id) {
                    accessible.push(AccessibleProgram {
                        program_id: program.id.clone(),
                        program: program.clone(),
                        balance: balance.balance,
                        source: AccessSource::Direct,
                        transfer_from: None,
                    });
                }
            }
            ProgramKind::CreditCard => {
                for partner in catalog.transfer_partners(&program.id) {
                    let position = accessible.iter().position(|a| a.program_id == partner.id);
                    match position {
                        None => accessible.push(transfer_entry(partner, program, balance.balance)),
                        Some(idx) if accessible[idx].balance < balance.balance => {
                            accessible[idx] = transfer_entry(partner, program, balance.balance);
                        }
                        Some(_) => {}
                    }
                }
            }
        }
    }

    accessible
}

fn transfer_entry(
    partner: &LoyaltyProgram,
    card: &LoyaltyProgram,
    balance: u64,
) -> AccessibleProgram {
    AccessibleProgram {
        program_id: partner.id.clone(),
        program: partner.clone(),
        balance,
        source: AccessSource::Transfer,
        transfer_from: Some(TransferSource {
            program_id: card.id.clone(),
            program_name: card.name.clone(),
            balance,
        }),
    }
}
