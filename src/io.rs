use crate::app_state::NewStaff;
use crate::model::Schedule;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnel depuis CSV: header `Name,Phone[,Team]`
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<NewStaff>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing Name")?.trim();
        if name.is_empty() {
            bail!("invalid staff row {} (empty name)", line + 1);
        }
        out.push(NewStaff {
            name: name.to_string(),
            phone: rec.get(1).unwrap_or("").trim().to_string(),
            team: rec.get(2).unwrap_or("").trim().to_string(),
        });
    }
    Ok(out)
}

/// Export CSV des affectations: header `Team Member,Weekend Date,Day`
pub fn export_assignments_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["Team Member", "Weekend Date", "Day"])?;
    for a in &schedule.assignments {
        let date = a.date.format("%Y-%m-%d").to_string();
        w.write_record([a.member.as_str(), date.as_str(), a.day.as_str()])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON d'un planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(schedule)?;
    fs::write(path, s)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, Day, ScheduleId};
    use chrono::NaiveDate;
    use tempfile::tempdir;

    #[test]
    fn import_accepts_optional_team() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("staff.csv");
        fs::write(&path, "Name,Phone,Team\nAlice,0612,Ops\nBob,0700\n").unwrap();

        let rows = import_staff_csv(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].team, "Ops");
        assert_eq!(rows[1].phone, "0700");
        assert_eq!(rows[1].team, "");
    }

    #[test]
    fn import_rejects_blank_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("staff.csv");
        fs::write(&path, "Name,Phone\n ,0612\n").unwrap();
        assert!(import_staff_csv(&path).is_err());
    }

    fn sample_schedule() -> Schedule {
        Schedule {
            id: ScheduleId::new(1),
            name: "s".into(),
            team: "Ops".into(),
            team_leader: String::new(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            assignments: vec![Assignment {
                member: "Alice".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
                day: Day::Sunday,
            }],
        }
    }

    #[test]
    fn assignments_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let schedule = sample_schedule();
        export_assignments_csv(&path, &schedule).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Team Member,Weekend Date,Day\nAlice,2024-01-07,Sunday\n"
        );
    }

    #[test]
    fn schedule_json_export_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");
        let schedule = sample_schedule();
        export_schedule_json(&path, &schedule).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"Weekend Date\": \"2024-01-07\""));
        let back: Schedule = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, schedule);
    }
}
