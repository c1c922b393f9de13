#![forbid(unsafe_code)]
//! Holiday Manager — personnel, équipes et rotations de week-end (sans BD).
//!
//! - Stockage fichiers CSV, un fichier par table.
//! - Rosters d'équipe dérivés du personnel (jamais édités à la main).
//! - Rotation round-robin des week-ends (samedi + dimanche).
//! - Dates calendaires (`NaiveDate`), aucune dépendance à l'heure courante.

pub mod app_state;
pub mod dashboard;
pub mod io;
pub mod model;
pub mod scheduler;
pub mod storage;
pub mod sync;
pub mod view;

pub use app_state::{AppState, NewSchedule, NewStaff, NewTeam, StaffUpdate, StateError};
pub use dashboard::{compute_metrics, Metrics, MetricsRenderer, TextDashboard};
pub use model::{
    Assignment, Day, Schedule, ScheduleId, Staff, StaffId, Tables, Team, TeamId,
};
pub use scheduler::{generate, next_upcoming, SchedError, ScheduleRequest, UpcomingHoliday};
pub use storage::{CsvStorage, Storage, Table, TableKind};
pub use sync::sync;
