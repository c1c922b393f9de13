//! Synchronisation équipes ← personnel.
//!
//! `Team::members` n'est jamais édité directement : il est recalculé à partir
//! du champ `team` de chaque membre du personnel, dans l'ordre de la table.

use crate::model::{Staff, Team};
use tracing::debug;

/// Recalcule les membres de chaque équipe. Fonction pure.
pub fn sync(staff: &[Staff], teams: &[Team]) -> Vec<Team> {
    let mut out = teams.to_vec();
    sync_in_place(staff, &mut out);
    out
}

/// Variante en place de [`sync`].
pub fn sync_in_place(staff: &[Staff], teams: &mut [Team]) {
    for team in teams.iter_mut() {
        team.members = staff
            .iter()
            .filter(|s| s.team == team.name)
            .map(|s| s.name.clone())
            .collect();
    }

    // Références pendantes tolérées : le membre n'apparaît simplement nulle part.
    for s in staff {
        if !s.team.is_empty() && !teams.iter().any(|t| t.name == s.team) {
            debug!(staff = %s.name, team = %s.team, "staff references unknown team");
        }
    }
}

/// Encodage du roster dans une seule cellule (`Alice,Bob`).
pub fn join_members(members: &[String]) -> String {
    members.join(",")
}

/// Inverse de [`join_members`]. Une cellule vide donne un roster vide.
pub fn split_members(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
