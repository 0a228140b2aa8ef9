use crate::catalog::{Alliance, LoyaltyProgram, ProgramKind};

fn airline(
    id: &str,
    name: &str,
    base_value_cpp: f64,
    alliance: Option<Alliance>,
    transfer_partners: &[&str],
    award_booking_url: &str,
) -> LoyaltyProgram {
    LoyaltyProgram {
        id: id.to_string(),
        name: name.to_string(),
        kind: ProgramKind::Airline,
        base_value_cpp,
        alliance,
        transfer_partners: transfer_partners.iter().map(|p| p.to_string()).collect(),
        award_booking_url: Some(award_booking_url.to_string()),
    }
}

fn credit_card(id: &str, name: &str, base_value_cpp: f64, transfer_partners: &[&str]) -> LoyaltyProgram {
    LoyaltyProgram {
        id: id.to_string(),
        name: name.to_string(),
        kind: ProgramKind::CreditCard,
        base_value_cpp,
        alliance: None,
        transfer_partners: transfer_partners.iter().map(|p| p.to_string()).collect(),
        award_booking_url: None,
    }
}

pub fn builtin_programs() -> Vec<LoyaltyProgram> {
    vec![
        // Airlines
        airline(
            "united-mileageplus",
            "United MileagePlus",
            1.2,
            Some(Alliance::StarAlliance),
            &["chase-ur", "bilt"],
            "https://www.united.com/en/us/book-flight/mileageplus-awards",
        ),
        airline(
            "american-aadvantage",
            "American AAdvantage",
            1.4,
            Some(Alliance::Oneworld),
            &["citi-typ", "bilt"],
            "https://www.aa.com/booking/find-flights",
        ),
        airline(
            "delta-skymiles",
            "Delta SkyMiles",
            1.1,
            Some(Alliance::Skyteam),
            &["amex-mr"],
            "https://www.delta.com/flight-search/book-a-flight",
        ),
        airline(
            "southwest-rr",
            "Southwest Rapid Rewards",
            1.4,
            None,
            &["chase-ur"],
            "https://www.southwest.com/air/booking/",
        ),
        airline(
            "alaska-mileageplan",
            "Alaska Mileage Plan",
            1.8,
            Some(Alliance::Oneworld),
            &["bilt"],
            "https://www.alaskaair.com/planbook",
        ),
        airline(
            "jetblue-trueblue",
            "JetBlue TrueBlue",
            1.3,
            None,
            &["chase-ur", "citi-typ", "bilt"],
            "https://www.jetblue.com/booking/flights",
        ),
        airline(
            "aeroplan",
            "Air Canada Aeroplan",
            1.5,
            Some(Alliance::StarAlliance),
            &["chase-ur", "amex-mr", "capital-one", "bilt"],
            "https://www.aircanada.com/aeroplan/redeem/availability/outbound",
        ),
        airline(
            "avios",
            "British Airways Avios",
            1.5,
            Some(Alliance::Oneworld),
            &["chase-ur", "amex-mr", "capital-one", "bilt"],
            "https://www.britishairways.com/travel/redeem/execclub/_gf/en_us",
        ),
        airline(
            "flying-blue",
            "Air France/KLM Flying Blue",
            1.4,
            Some(Alliance::Skyteam),
            &["chase-ur", "amex-mr", "citi-typ", "capital-one", "bilt"],
            "https://www.flyingblue.com/en/spend/flights/reward-tickets",
        ),
        airline(
            "krisflyer",
            "Singapore KrisFlyer",
            1.6,
            Some(Alliance::StarAlliance),
            &["chase-ur", "amex-mr", "citi-typ", "capital-one", "bilt"],
            "https://www.singaporeair.com/en_UK/ppsclub-krisflyer/use-miles/redeem-flights/",
        ),
        airline(
            "virginatlantic",
            "Virgin Atlantic Flying Club",
            1.5,
            None,
            &["chase-ur", "amex-mr", "citi-typ", "capital-one", "bilt"],
            "https://www.virginatlantic.com/flight-search/reward-flights",
        ),
        airline(
            "emirates-skywards",
            "Emirates Skywards",
            1.0,
            None,
            &["amex-mr", "capital-one", "citi-typ", "bilt"],
            "https://www.emirates.com/us/english/book/",
        ),
        airline(
            "lifemiles",
            "Avianca LifeMiles",
            1.4,
            Some(Alliance::StarAlliance),
            &["amex-mr", "capital-one", "citi-typ", "bilt"],
            "https://www.lifemiles.com/flight/search",
        ),
        airline(
            "smiles",
            "GOL Smiles",
            1.2,
            None,
            &["amex-mr"],
            "https://www.smiles.com.br/emissao-com-milhas",
        ),
        airline(
            "velocity",
            "Velocity Frequent Flyer",
            1.3,
            None,
            &["amex-mr"],
            "https://experience.velocity.virginaustralia.com/member/booking/search",
        ),
        airline(
            "eurobonus",
            "SAS EuroBonus",
            1.2,
            Some(Alliance::StarAlliance),
            &["amex-mr", "chase-ur"],
            "https://www.sas.se/eurobonus/use-points/travel/",
        ),
        airline(
            "qantas",
            "Qantas Frequent Flyer",
            1.4,
            Some(Alliance::Oneworld),
            &[],
            "https://www.qantas.com/au/en/book-a-trip/flights/classic-flight-rewards.html",
        ),
        airline(
            "aerlingus",
            "Aer Lingus AerClub",
            1.5,
            None,
            &["chase-ur", "amex-mr"],
            "https://www.aerlingus.com/booking/avios-booking/",
        ),
        airline(
            "etihad",
            "Etihad Guest",
            1.2,
            None,
            &["amex-mr", "citi-typ"],
            "https://www.etihad.com/en-us/guest/redeem-miles",
        ),
        // Credit card currencies
        credit_card(
            "chase-ur",
            "Chase Ultimate Rewards",
            1.5,
            &[
                "united-mileageplus",
                "southwest-rr",
                "jetblue-trueblue",
                "aeroplan",
                "avios",
                "flying-blue",
                "krisflyer",
                "virginatlantic",
            ],
        ),
        credit_card(
            "amex-mr",
            "Amex Membership Rewards",
            1.6,
            &[
                "delta-skymiles",
                "aeroplan",
                "avios",
                "flying-blue",
                "krisflyer",
                "virginatlantic",
                "emirates-skywards",
            ],
        ),
        credit_card(
            "citi-typ",
            "Citi ThankYou Points",
            1.4,
            &[
                "american-aadvantage",
                "jetblue-trueblue",
                "flying-blue",
                "krisflyer",
                "virginatlantic",
                "emirates-skywards",
            ],
        ),
        credit_card(
            "capital-one",
            "Capital One Miles",
            1.4,
            &[
                "aeroplan",
                "avios",
                "flying-blue",
                "krisflyer",
                "virginatlantic",
                "emirates-skywards",
            ],
        ),
        credit_card(
            "bilt",
            "Bilt Rewards",
            1.6,
            &[
                "united-mileageplus",
                "american-aadvantage",
                "alaska-mileageplan",
                "jetblue-trueblue",
                "aeroplan",
                "avios",
                "flying-blue",
                "krisflyer",
                "virginatlantic",
                "emirates-skywards",
            ],
        ),
    ]
}
