use crate::model::Tables;
use crate::scheduler::{next_upcoming, UpcomingHoliday};
use chrono::NaiveDate;

/// Indicateurs de la page d'accueil.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metrics {
    pub total_staff: usize,
    pub total_teams: usize,
    pub next_holiday: Option<UpcomingHoliday>,
}

/// Calcule les indicateurs ; lecture seule.
pub fn compute_metrics(tables: &Tables, today: NaiveDate) -> Metrics {
    Metrics {
        total_staff: tables.staff.len(),
        total_teams: tables.teams.len(),
        next_holiday: next_upcoming(&tables.schedules, today),
    }
}

/// Permet de changer le rendu du tableau de bord (texte, HTML, etc.).
pub trait MetricsRenderer {
    fn render(&self, metrics: &Metrics) -> String;
}

/// Rendu texte pour le terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextDashboard;

impl MetricsRenderer for TextDashboard {
    fn render(&self, metrics: &Metrics) -> String {
        let (date, staff) = match &metrics.next_holiday {
            Some(h) => (
                h.date.format("%Y-%m-%d").to_string(),
                format!("{} ({})", h.member, h.team),
            ),
            None => ("No Schedule".to_string(), "No Staff Assigned".to_string()),
        };
        format!(
            "Total Staff: {staff_count}\nTotal Teams: {team_count}\nNext upcoming Holiday: {date}\nNext Weekend Off Staff: {staff}\n",
            staff_count = metrics.total_staff,
            team_count = metrics.total_teams,
        )
    }
}
