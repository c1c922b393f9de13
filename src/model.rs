use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant d'un membre du personnel (attribué séquentiellement)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(u32);

impl StaffId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifiant d'équipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u32);

impl TeamId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifiant de planning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleId(u32);

impl ScheduleId {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Membre du personnel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    /// Toujours du texte : un numéro n'est pas un nombre (zéros de tête).
    pub phone: String,
    /// Nom d'équipe, vide si aucune. Non vérifié contre la table des équipes.
    pub team: String,
}

/// Équipe. `members` est dérivé de la table du personnel par [`crate::sync`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub location: String,
    pub leader: String,
    pub members: Vec<String>,
}

/// Jour d'un week-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Saturday,
    Sunday,
}

impl Day {
    pub fn as_str(self) -> &'static str {
        match self {
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Une journée de week-end attribuée à un membre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "Team Member")]
    pub member: String,
    #[serde(rename = "Weekend Date")]
    pub date: NaiveDate,
    #[serde(rename = "Day")]
    pub day: Day,
}

/// Planning de week-ends pour une équipe, figé à sa création
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub name: String,
    pub team: String,
    /// Copie du responsable d'équipe au moment de la génération.
    pub team_leader: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub assignments: Vec<Assignment>,
}

/// Les trois tables de l'application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    pub staff: Vec<Staff>,
    pub teams: Vec<Team>,
    pub schedules: Vec<Schedule>,
}

impl Tables {
    pub fn find_staff_by_id(&self, id: StaffId) -> Option<&Staff> {
        self.staff.iter().find(|s| s.id == id)
    }
    pub fn find_staff_mut_by_id(&mut self, id: StaffId) -> Option<&mut Staff> {
        self.staff.iter_mut().find(|s| s.id == id)
    }
    /// Première équipe portant ce nom.
    pub fn find_team_by_name<'a>(&'a self, name: &str) -> Option<&'a Team> {
        self.teams.iter().find(|t| t.name == name)
    }
    pub fn find_schedule_by_id(&self, id: ScheduleId) -> Option<&Schedule> {
        self.schedules.iter().find(|s| s.id == id)
    }

    // IDs = nombre de lignes + 1, sans garde contre la réutilisation.
    pub fn next_staff_id(&self) -> StaffId {
        StaffId::new(next_id(self.staff.len()))
    }
    pub fn next_team_id(&self) -> TeamId {
        TeamId::new(next_id(self.teams.len()))
    }
    pub fn next_schedule_id(&self) -> ScheduleId {
        ScheduleId::new(next_id(self.schedules.len()))
    }
}

fn next_id(len: usize) -> u32 {
    u32::try_from(len).map_or(u32::MAX, |n| n.saturating_add(1))
}
