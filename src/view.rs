//! Rendu texte des tables et des plannings.

use crate::model::{Schedule, Staff, Team};

pub fn render_staff(staff: &[Staff]) -> String {
    let rows: Vec<Vec<String>> = staff
        .iter()
        .map(|s| vec![s.id.to_string(), s.name.clone(), s.phone.clone(), s.team.clone()])
        .collect();
    render_table(&["ID", "Name", "Phone", "Team"], &rows)
}

pub fn render_teams(teams: &[Team]) -> String {
    let rows: Vec<Vec<String>> = teams
        .iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.name.clone(),
                t.location.clone(),
                t.leader.clone(),
                t.members.join(","),
            ]
        })
        .collect();
    render_table(&["ID", "Team Name", "Location", "Leader", "Members"], &rows)
}

pub fn render_schedule_list(schedules: &[Schedule]) -> String {
    if schedules.is_empty() {
        return "No schedules created yet.\n".to_string();
    }
    schedules
        .iter()
        .map(|s| {
            format!(
                "Schedule ID {} - {} ({} to {})\n",
                s.id,
                s.team,
                s.start.format("%Y-%m-%d"),
                s.end.format("%Y-%m-%d")
            )
        })
        .collect()
}

pub fn render_schedule(schedule: &Schedule) -> String {
    let mut out = format!(
        "Schedule: {}\n- Team: {}\n- Team Leader: {}\n- Time Frame: {} to {}\n\nWeekend Assignments\n",
        schedule.name,
        schedule.team,
        schedule.team_leader,
        schedule.start.format("%Y-%m-%d"),
        schedule.end.format("%Y-%m-%d"),
    );
    if schedule.assignments.is_empty() {
        out.push_str("No assignments available for this schedule.\n");
        return out;
    }
    let rows: Vec<Vec<String>> = schedule
        .assignments
        .iter()
        .map(|a| {
            vec![
                a.member.clone(),
                a.date.format("%Y-%m-%d").to_string(),
                a.day.to_string(),
            ]
        })
        .collect();
    out.push_str(&render_table(&["Team Member", "Weekend Date", "Day"], &rows));
    out
}

/// Colonnes alignées à gauche, séparées par deux espaces.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = render_line(headers.iter().copied(), &widths);
    for row in rows {
        out.push_str(&render_line(row.iter().map(String::as_str), &widths));
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let mut line = padded.join("  ").trim_end().to_string();
    line.push('\n');
    line
}
