#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use holiday_manager::{
    dashboard::{compute_metrics, MetricsRenderer, TextDashboard},
    io,
    model::{ScheduleId, StaffId},
    storage::CsvStorage,
    view, AppState, NewSchedule, NewStaff, NewTeam, StaffUpdate,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Gestion du personnel, des équipes et des week-ends d'astreinte
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Répertoire des fichiers CSV
    #[arg(long, global = true, default_value = "data")]
    data_dir: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tableau de bord (effectifs, prochain week-end off)
    Dashboard {
        /// Date de référence YYYY-MM-DD (défaut : aujourd'hui)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Lister le personnel
    Staff,

    /// Ajouter un membre du personnel
    AddStaff {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Nom d'équipe (vide = aucune)
        #[arg(long, default_value = "")]
        team: String,
    },

    /// Modifier un membre du personnel
    EditStaff {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        team: Option<String>,
    },

    /// Importer du personnel depuis un CSV (`Name,Phone[,Team]`)
    ImportStaff {
        #[arg(long)]
        csv: String,
    },

    /// Lister les équipes
    Teams,

    /// Créer une équipe
    AddTeam {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        location: String,
        #[arg(long, default_value = "")]
        leader: String,
    },

    /// Lister les plannings
    Schedules,

    /// Générer un planning de week-ends (round-robin)
    CreateSchedule {
        #[arg(long)]
        name: String,
        #[arg(long)]
        team: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: NaiveDate,
        /// YYYY-MM-DD, strictement après `start`
        #[arg(long)]
        end: NaiveDate,
    },

    /// Afficher un planning
    ShowSchedule {
        #[arg(long)]
        id: u32,
    },

    /// Exporter un planning
    ExportSchedule {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        csv: Option<String>,
        #[arg(long)]
        json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = CsvStorage::open(&cli.data_dir)?;
    let mut state = AppState::load(storage)?;

    let code = match cli.cmd {
        Commands::Dashboard { today } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let metrics = compute_metrics(state.tables(), today);
            print!("{}", TextDashboard.render(&metrics));
            0
        }
        Commands::Staff => {
            print!("{}", view::render_staff(&state.tables().staff));
            0
        }
        Commands::AddStaff { name, phone, team } => {
            state.add_staff(NewStaff { name, phone, team })?;
            println!("Staff added successfully!");
            print!("{}", view::render_staff(&state.tables().staff));
            0
        }
        Commands::EditStaff {
            id,
            name,
            phone,
            team,
        } => {
            let id = StaffId::new(id);
            state.edit_staff(id, StaffUpdate { name, phone, team })?;
            let staff = state
                .tables()
                .find_staff_by_id(id)
                .context("staff missing after update")?;
            println!("Staff {} ({}) updated successfully!", staff.id, staff.name);
            print!("{}", view::render_staff(&state.tables().staff));
            0
        }
        Commands::ImportStaff { csv } => {
            let rows = io::import_staff_csv(&csv)?;
            let ids = state.import_staff(rows)?;
            println!("Imported {} staff member(s)", ids.len());
            print!("{}", view::render_staff(&state.tables().staff));
            0
        }
        Commands::Teams => {
            print!("{}", view::render_teams(&state.tables().teams));
            0
        }
        Commands::AddTeam {
            name,
            location,
            leader,
        } => {
            state.add_team(NewTeam {
                name,
                location,
                leader,
            })?;
            println!("Team created successfully!");
            print!("{}", view::render_teams(&state.tables().teams));
            0
        }
        Commands::Schedules => {
            print!("{}", view::render_schedule_list(&state.tables().schedules));
            0
        }
        Commands::CreateSchedule {
            name,
            team,
            start,
            end,
        } => {
            let id = state.create_schedule(NewSchedule {
                name,
                team,
                start,
                end,
            })?;
            let schedule = state
                .tables()
                .find_schedule_by_id(id)
                .context("schedule missing after creation")?;
            println!("Schedule '{}' created successfully!", schedule.name);
            print!("{}", view::render_schedule(schedule));
            if schedule.assignments.is_empty() {
                eprintln!("Warning: no weekend falls within the selected range");
                // Code 2 = WARNING/INCOMPLETE
                2
            } else {
                0
            }
        }
        Commands::ShowSchedule { id } => {
            let schedule = state
                .tables()
                .find_schedule_by_id(ScheduleId::new(id))
                .with_context(|| format!("unknown schedule id: {id}"))?;
            print!("{}", view::render_schedule(schedule));
            0
        }
        Commands::ExportSchedule { id, csv, json } => {
            let schedule = state
                .tables()
                .find_schedule_by_id(ScheduleId::new(id))
                .with_context(|| format!("unknown schedule id: {id}"))?;
            if let Some(path) = csv {
                io::export_assignments_csv(path, schedule)?;
            }
            if let Some(path) = json {
                io::export_schedule_json(path, schedule)?;
            }
            0
        }
    };

    std::process::exit(code);
}
