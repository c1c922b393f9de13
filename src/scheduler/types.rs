use crate::model::ScheduleId;
use chrono::NaiveDate;
use thiserror::Error;

/// Paramètres d'une génération de planning
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    pub id: ScheduleId,
    pub name: String,
    pub team: String,
    pub team_leader: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Prochain week-end « off » connu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingHoliday {
    pub date: NaiveDate,
    pub member: String,
    pub team: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedError {
    #[error("End date must be after the start date.")]
    InvalidTimeRange,
    #[error("team {0:?} has no members")]
    InvalidRoster(String),
    #[error("date out of range after {0}")]
    DateOutOfRange(NaiveDate),
}
