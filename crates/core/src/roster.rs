//! The hand-maintained officer roster for the current organizational term.
//!
//! Roster entries are fixed at build time and never created, mutated, or
//! deleted at runtime. They are matched against registered accounts by
//! [`crate::reconcile::reconcile_roster`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RosterGroup {
    Executive,
    Creative,
    Logistics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub position: String,
    pub group: RosterGroup,
}

const ROSTER_2025_2026: &[(&str, &str, RosterGroup)] = &[
    // Executives
    ("De Lara", "President", RosterGroup::Executive),
    ("Keana Giron", "Internal Vice President", RosterGroup::Executive),
    ("Chelsea Mae J. Banlasan", "External Vice President", RosterGroup::Executive),
    ("Ashlee M. Madriñan", "Secretary", RosterGroup::Executive),
    ("Diana Rose Suello", "Assistant Secretary", RosterGroup::Executive),
    ("Melgen II A. Simo", "Treasurer", RosterGroup::Executive),
    ("Jacky L. Rapal", "Assistant Treasurer", RosterGroup::Executive),
    ("Pit Frankie B. Ceniza", "Assistant Auditor", RosterGroup::Executive),
    ("Samantha Cruspero", "Business Manager", RosterGroup::Executive),
    ("Adrian A. Hinayon", "Assistant Business Manager", RosterGroup::Executive),
    ("Chriss Laurence Olanda", "Public Information Officer", RosterGroup::Executive),
    ("Vanessa Denisse Ibañez", "1st Year Representative", RosterGroup::Executive),
    ("Moison Rayam Dominggo", "2nd Year Representative", RosterGroup::Executive),
    ("Francis Xavier Baclao", "3rd Year Representative", RosterGroup::Executive),
    // Creatives
    ("Catherine Arnado", "Head - Creatives", RosterGroup::Creative),
    ("Kyle Andrei Abellera", "Committee - Creatives", RosterGroup::Creative),
    ("Rexxa Anika Iway", "Committee - Creatives", RosterGroup::Creative),
    ("Ian Benedict Peteros", "Committee - Creatives", RosterGroup::Creative),
    ("Dhruv Jae E. Guboc", "Committee - Creatives", RosterGroup::Creative),
    ("Rhonan Madarang", "Documentary Lead", RosterGroup::Creative),
    // Logistics
    ("King Wee Kon L. Huelva", "Head - Logistics", RosterGroup::Logistics),
    ("Kurt Jershon Vidal", "Committee - Logistics", RosterGroup::Logistics),
    ("Christan P. Luces", "Committee - Logistics", RosterGroup::Logistics),
    ("Jhon Elpidio Dagmil", "Committee - Logistics", RosterGroup::Logistics),
    ("Alec Eight N. Jazmin", "Committee - Logistics", RosterGroup::Logistics),
    ("Rey Humperdinck S. Arendain", "Committee - Logistics", RosterGroup::Logistics),
];

/// Returns the full roster for the current term, in roster order.
pub fn officer_roster() -> Vec<RosterEntry> {
    ROSTER_2025_2026
        .iter()
        .map(|(name, position, group)| RosterEntry {
            name: (*name).to_string(),
            position: (*position).to_string(),
            group: *group,
        })
        .collect()
}
