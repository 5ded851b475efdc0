//! Demo Data
//!
//! Static records shown until the listing endpoints are wired in.

use chrono::{DateTime, Duration, Utc};
use kconnect_core::domain::{Contact, ContactKind, ContactStatus, Matching, OpportunityListItem, Persona};

const TITLES: &[(&str, &str)] = &[
    ("Rust backend engineer", "Payments platform, async services and PostgreSQL."),
    ("Frontend developer", "Design system and accessibility for a B2B dashboard."),
    ("Data engineer", "Streaming pipelines and warehouse modelling."),
    ("DevOps engineer", "Kubernetes, observability and release tooling."),
    ("Product designer", "Discovery and prototyping for the mobile app."),
    ("QA automation engineer", "End-to-end suites and CI reliability."),
    ("Engineering manager", "Lead a team of six across two squads."),
];

/// Size of the demo collection
pub const DEMO_OPPORTUNITY_COUNT: usize = 42;

/// Base timestamp for generated records (2024-03-01T00:00:00Z)
const EPOCH_SECS: i64 = 1_709_251_200;

/// `count` opportunities, newest first
pub fn demo_opportunities(persona: Persona, count: usize) -> Vec<OpportunityListItem> {
    let base = DateTime::<Utc>::from_timestamp(EPOCH_SECS, 0).unwrap_or_default();
    (0..count)
        .map(|i| {
            let (title, description) = TITLES[i % TITLES.len()];
            // Spread scores over 35..=97 deterministically
            let score = 35 + (i * 37 % 63);
            OpportunityListItem {
                opportunity_id: format!("{}-{:03}", persona.source_label(), i + 1),
                title: title.to_string(),
                description: description.to_string(),
                created_at: base - Duration::hours(i as i64 * 9),
                is_saved: false,
                is_applied: false,
                matching: Matching { total_match_percentage: score as f64 },
            }
        })
        .collect()
}

/// Stand-in for the listing endpoint
pub async fn fetch_opportunities(persona: Persona) -> Result<Vec<OpportunityListItem>, String> {
    Ok(demo_opportunities(persona, DEMO_OPPORTUNITY_COUNT))
}

pub fn demo_contacts() -> Vec<Contact> {
    let rows: &[(&str, &str, &str, ContactKind, ContactStatus)] = &[
        ("Amélie Durand", "Nexa Conseil", "Talent acquisition", ContactKind::Contact, ContactStatus::Accepted),
        ("Bastien Leroy", "Oxalis", "CTO", ContactKind::Cooptation, ContactStatus::Pending),
        ("Camille Faure", "Helio", "Backend developer", ContactKind::Cooptation, ContactStatus::Accepted),
        ("David Nguyen", "Nexa Conseil", "Recruiter", ContactKind::Contact, ContactStatus::Pending),
        ("Emma Rossi", "Quanta", "Data scientist", ContactKind::Cooptation, ContactStatus::Declined),
        ("Farid Benali", "Oxalis", "Product owner", ContactKind::Contact, ContactStatus::Accepted),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, company, role, kind, status))| Contact {
            id: i as u32 + 1,
            name: name.to_string(),
            company: company.to_string(),
            role: role.to_string(),
            kind: *kind,
            status: *status,
        })
        .collect()
}
