//! État applicatif explicite : les trois tables + leur stockage.
//!
//! Chaque commande mute l'état, resynchronise les équipes si le personnel a
//! bougé, puis réécrit les tables touchées. L'appelant ré-affiche ensuite.

use crate::model::{ScheduleId, Staff, StaffId, Tables, Team, TeamId};
use crate::scheduler::{self, SchedError, ScheduleRequest};
use crate::storage::{Storage, Table};
use crate::sync;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum StateError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("unknown team: {0}")]
    UnknownTeam(String),
    #[error("unknown staff id: {0}")]
    UnknownStaff(StaffId),
    #[error("team already exists: {0}")]
    DuplicateTeam(String),
    #[error(transparent)]
    Schedule(#[from] SchedError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Formulaire « Add New Staff »
#[derive(Debug, Clone, Default)]
pub struct NewStaff {
    pub name: String,
    pub phone: String,
    pub team: String,
}

/// Édition d'un membre : seuls les champs renseignés sont remplacés.
#[derive(Debug, Clone, Default)]
pub struct StaffUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub team: Option<String>,
}

/// Formulaire « Create a New Team »
#[derive(Debug, Clone, Default)]
pub struct NewTeam {
    pub name: String,
    pub location: String,
    pub leader: String,
}

/// Formulaire « Create a New Schedule »
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub name: String,
    pub team: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub struct AppState<S: Storage> {
    storage: S,
    tables: Tables,
}

impl<S: Storage> AppState<S> {
    /// Charge les tables et recalcule les rosters d'équipe.
    pub fn load(storage: S) -> anyhow::Result<Self> {
        let mut tables = storage.load_all()?;
        sync::sync_in_place(&tables.staff, &mut tables.teams);
        Ok(Self { storage, tables })
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn add_staff(&mut self, form: NewStaff) -> Result<StaffId, StateError> {
        let staff = self.build_staff(form, self.tables.next_staff_id())?;
        let id = staff.id;
        info!(id = %id, name = %staff.name, team = %staff.team, "staff added");
        self.tables.staff.push(staff);
        self.persist_staff()?;
        Ok(id)
    }

    /// Ajout en lot (import CSV) : tout ou rien, une seule sauvegarde à la fin.
    pub fn import_staff(&mut self, forms: Vec<NewStaff>) -> Result<Vec<StaffId>, StateError> {
        let base = self.tables.next_staff_id().get();
        let mut rows = Vec::with_capacity(forms.len());
        for (offset, form) in (0u32..).zip(forms) {
            let id = StaffId::new(base.saturating_add(offset));
            rows.push(self.build_staff(form, id)?);
        }
        let ids: Vec<StaffId> = rows.iter().map(|s| s.id).collect();
        self.tables.staff.extend(rows);
        info!(count = ids.len(), "staff imported");
        self.persist_staff()?;
        Ok(ids)
    }

    pub fn edit_staff(&mut self, id: StaffId, update: StaffUpdate) -> Result<(), StateError> {
        let name = update.name.map(|n| validate_name(&n, "name")).transpose()?;
        let phone = update.phone.map(|p| normalize_phone(&p)).transpose()?;
        let team = update.team.map(|t| t.trim().to_string());
        if let Some(team) = team.as_deref() {
            self.warn_unknown_team(team);
        }

        let staff = self
            .tables
            .find_staff_mut_by_id(id)
            .ok_or(StateError::UnknownStaff(id))?;
        if let Some(name) = name {
            staff.name = name;
        }
        if let Some(phone) = phone {
            staff.phone = phone;
        }
        if let Some(team) = team {
            staff.team = team;
        }
        info!(id = %id, "staff updated");
        self.persist_staff()
    }

    pub fn add_team(&mut self, form: NewTeam) -> Result<TeamId, StateError> {
        let name = validate_name(&form.name, "team name")?;
        if self.tables.find_team_by_name(&name).is_some() {
            return Err(StateError::DuplicateTeam(name));
        }
        let leader = form.leader.trim().to_string();
        if !leader.is_empty() && !self.tables.staff.iter().any(|s| s.name == leader) {
            warn!(team = %name, leader = %leader, "team leader is not a known staff member");
        }

        let id = self.tables.next_team_id();
        self.tables.teams.push(Team {
            id,
            name,
            location: form.location.trim().to_string(),
            leader,
            members: Vec::new(),
        });
        // du personnel peut déjà référencer ce nom
        sync::sync_in_place(&self.tables.staff, &mut self.tables.teams);
        info!(id = %id, "team created");
        self.storage.save(&Table::Teams(self.tables.teams.clone()))?;
        Ok(id)
    }

    pub fn create_schedule(&mut self, form: NewSchedule) -> Result<ScheduleId, StateError> {
        if form.end <= form.start {
            return Err(SchedError::InvalidTimeRange.into());
        }
        let team_name = form.team.trim();
        let team = self
            .tables
            .find_team_by_name(team_name)
            .ok_or_else(|| StateError::UnknownTeam(team_name.to_string()))?;

        let request = ScheduleRequest {
            id: self.tables.next_schedule_id(),
            name: form.name.trim().to_string(),
            team: team.name.clone(),
            team_leader: team.leader.clone(),
            start: form.start,
            end: form.end,
        };
        let members = team.members.clone();
        let schedule = scheduler::generate(request, &members)?;
        let id = schedule.id;
        info!(
            id = %id,
            team = %schedule.team,
            assignments = schedule.assignments.len(),
            "schedule created"
        );
        self.tables.schedules.push(schedule);
        self.storage
            .save(&Table::Schedules(self.tables.schedules.clone()))?;
        Ok(id)
    }

    fn build_staff(&self, form: NewStaff, id: StaffId) -> Result<Staff, StateError> {
        let name = validate_name(&form.name, "name")?;
        let phone = normalize_phone(&form.phone)?;
        let team = form.team.trim().to_string();
        self.warn_unknown_team(&team);
        Ok(Staff {
            id,
            name,
            phone,
            team,
        })
    }

    fn warn_unknown_team(&self, team: &str) {
        if !team.is_empty() && self.tables.find_team_by_name(team).is_none() {
            warn!(team = %team, "staff assigned to a team that does not exist");
        }
    }

    fn persist_staff(&mut self) -> Result<(), StateError> {
        sync::sync_in_place(&self.tables.staff, &mut self.tables.teams);
        self.storage.save(&Table::Staff(self.tables.staff.clone()))?;
        self.storage.save(&Table::Teams(self.tables.teams.clone()))?;
        Ok(())
    }
}

fn validate_name(raw: &str, field: &str) -> Result<String, StateError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(StateError::Validation(format!("{field} cannot be empty")));
    }
    if name.contains(',') {
        // le roster est stocké séparé par des virgules
        return Err(StateError::Validation(format!("{field} cannot contain ','")));
    }
    Ok(name.to_string())
}

/// Retire les virgules et espaces ; le reste doit être des chiffres.
pub fn normalize_phone(raw: &str) -> Result<String, StateError> {
    let phone: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(StateError::Validation(format!(
            "phone must contain digits only: {raw:?}"
        )));
    }
    Ok(phone)
}
