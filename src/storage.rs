//! Persistance des tables en fichiers CSV (un fichier par table).
//!
//! Chaque sauvegarde réécrit le fichier entier de manière atomique
//! (fichier temporaire + rename). Aucun verrou : deux écrivains simultanés
//! se marchent dessus, le dernier gagne.

use crate::model::{
    Assignment, Schedule, ScheduleId, Staff, StaffId, Tables, Team, TeamId,
};
use crate::sync::{join_members, split_members};
use anyhow::Context;
use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Les trois tables persistées
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Staff,
    Teams,
    Schedules,
}

impl TableKind {
    pub fn file_name(self) -> &'static str {
        match self {
            TableKind::Staff => "staffs.csv",
            TableKind::Teams => "teams.csv",
            TableKind::Schedules => "schedules.csv",
        }
    }

    /// Colonnes canoniques, dans l'ordre du fichier.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            TableKind::Staff => &["ID", "Name", "Phone", "Team"],
            TableKind::Teams => &["ID", "Team Name", "Location", "Leader", "Members"],
            TableKind::Schedules => &[
                "ID",
                "Name",
                "Team",
                "Team Leader",
                "Start Date",
                "End Date",
                "Assignments",
            ],
        }
    }
}

/// Contenu d'une table chargée
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Table {
    Staff(Vec<Staff>),
    Teams(Vec<Team>),
    Schedules(Vec<Schedule>),
}

impl Table {
    pub fn kind(&self) -> TableKind {
        match self {
            Table::Staff(_) => TableKind::Staff,
            Table::Teams(_) => TableKind::Teams,
            Table::Schedules(_) => TableKind::Schedules,
        }
    }
}

pub trait Storage {
    /// Charge une table ; table vide si elle n'existe pas encore.
    fn load(&self, kind: TableKind) -> anyhow::Result<Table>;
    /// Réécrit entièrement une table.
    fn save(&self, table: &Table) -> anyhow::Result<()>;

    fn load_all(&self) -> anyhow::Result<Tables> {
        let mut tables = Tables::default();
        if let Table::Staff(rows) = self.load(TableKind::Staff)? {
            tables.staff = rows;
        }
        if let Table::Teams(rows) = self.load(TableKind::Teams)? {
            tables.teams = rows;
        }
        if let Table::Schedules(rows) = self.load(TableKind::Schedules)? {
            tables.schedules = rows;
        }
        Ok(tables)
    }
}

/// Stockage CSV dans un répertoire de données
#[derive(Debug, Clone)]
pub struct CsvStorage {
    dir: PathBuf,
}

impl CsvStorage {
    /// Ouvre (et crée si besoin) le répertoire de données.
    pub fn open<P: AsRef<Path>>(dir: P) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).with_context(|| format!("creating data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: TableKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl Storage for CsvStorage {
    fn load(&self, kind: TableKind) -> anyhow::Result<Table> {
        let path = self.path_for(kind);
        let table = match kind {
            TableKind::Staff => Table::Staff(
                read_records::<StaffRecord>(&path)?
                    .into_iter()
                    .map(Staff::from)
                    .collect(),
            ),
            TableKind::Teams => Table::Teams(
                read_records::<TeamRecord>(&path)?
                    .into_iter()
                    .map(Team::from)
                    .collect(),
            ),
            TableKind::Schedules => Table::Schedules(
                read_records::<ScheduleRecord>(&path)?
                    .into_iter()
                    .map(Schedule::try_from)
                    .collect::<anyhow::Result<_>>()
                    .with_context(|| format!("decoding assignments in {}", path.display()))?,
            ),
        };
        Ok(table)
    }

    fn save(&self, table: &Table) -> anyhow::Result<()> {
        let kind = table.kind();
        let path = self.path_for(kind);
        match table {
            Table::Staff(rows) => {
                write_records(&path, kind.columns(), rows.iter().map(StaffRecord::from))?
            }
            Table::Teams(rows) => {
                write_records(&path, kind.columns(), rows.iter().map(TeamRecord::from))?
            }
            Table::Schedules(rows) => {
                let records = rows
                    .iter()
                    .map(ScheduleRecord::try_from)
                    .collect::<anyhow::Result<Vec<_>>>()?;
                write_records(&path, kind.columns(), records.into_iter())?
            }
        }
        debug!(path = %path.display(), "table saved");
        Ok(())
    }
}

fn read_records<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for rec in rdr.deserialize() {
        out.push(rec.with_context(|| format!("parsing {}", path.display()))?);
    }
    Ok(out)
}

fn write_records<T, I>(path: &Path, columns: &[&str], records: I) -> anyhow::Result<()>
where
    T: Serialize,
    I: Iterator<Item = T>,
{
    let mut tmp = NamedTempFile::new_in(path.parent().unwrap_or_else(|| Path::new(".")))
        .with_context(|| "creating temp file")?;
    {
        // en-têtes écrits à la main : une table vide garde ses colonnes
        let mut w = WriterBuilder::new().has_headers(false).from_writer(&mut tmp);
        w.write_record(columns)?;
        for rec in records {
            w.serialize(rec)?;
        }
        w.flush()?;
    }
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).with_context(|| "atomic rename")?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize)]
struct StaffRecord {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Phone", default)]
    phone: String,
    #[serde(rename = "Team", default)]
    team: String,
}

impl From<StaffRecord> for Staff {
    fn from(r: StaffRecord) -> Self {
        Staff {
            id: StaffId::new(r.id),
            name: r.name,
            phone: r.phone,
            team: r.team,
        }
    }
}

impl From<&Staff> for StaffRecord {
    fn from(s: &Staff) -> Self {
        StaffRecord {
            id: s.id.get(),
            name: s.name.clone(),
            phone: s.phone.clone(),
            team: s.team.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct TeamRecord {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Team Name")]
    name: String,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Leader", default)]
    leader: String,
    #[serde(rename = "Members", default)]
    members: String,
}

impl From<TeamRecord> for Team {
    fn from(r: TeamRecord) -> Self {
        Team {
            id: TeamId::new(r.id),
            name: r.name,
            location: r.location,
            leader: r.leader,
            members: split_members(&r.members),
        }
    }
}

impl From<&Team> for TeamRecord {
    fn from(t: &Team) -> Self {
        TeamRecord {
            id: t.id.get(),
            name: t.name.clone(),
            location: t.location.clone(),
            leader: t.leader.clone(),
            members: join_members(&t.members),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ScheduleRecord {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Team Leader", default)]
    team_leader: String,
    #[serde(rename = "Start Date")]
    start: NaiveDate,
    #[serde(rename = "End Date")]
    end: NaiveDate,
    /// Tableau JSON d'affectations dans une seule cellule.
    #[serde(rename = "Assignments", default)]
    assignments: String,
}

impl TryFrom<ScheduleRecord> for Schedule {
    type Error = anyhow::Error;

    fn try_from(r: ScheduleRecord) -> anyhow::Result<Self> {
        let assignments: Vec<Assignment> = if r.assignments.trim().is_empty() {
            Vec::new()
        } else {
            serde_json::from_str(&r.assignments)
                .with_context(|| format!("schedule {}", r.id))?
        };
        Ok(Schedule {
            id: ScheduleId::new(r.id),
            name: r.name,
            team: r.team,
            team_leader: r.team_leader,
            start: r.start,
            end: r.end,
            assignments,
        })
    }
}

impl TryFrom<&Schedule> for ScheduleRecord {
    type Error = anyhow::Error;

    fn try_from(s: &Schedule) -> anyhow::Result<Self> {
        Ok(ScheduleRecord {
            id: s.id.get(),
            name: s.name.clone(),
            team: s.team.clone(),
            team_leader: s.team_leader.clone(),
            start: s.start,
            end: s.end,
            assignments: serde_json::to_string(&s.assignments)?,
        })
    }
}
