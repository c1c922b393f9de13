mod assignment;
mod types;
mod upcoming;
mod util;

pub use types::{SchedError, ScheduleRequest, UpcomingHoliday};

use crate::model::Schedule;
use chrono::NaiveDate;
use tracing::debug;

/// Génère un planning de week-ends en round-robin sur `members`.
///
/// Le roster est copié : le planning ne suit pas les changements ultérieurs
/// de l'équipe. Aucun effet de bord, l'appelant se charge de le stocker.
pub fn generate(request: ScheduleRequest, members: &[String]) -> Result<Schedule, SchedError> {
    if request.end <= request.start {
        return Err(SchedError::InvalidTimeRange);
    }
    if members.is_empty() {
        return Err(SchedError::InvalidRoster(request.team));
    }

    let assignments = assignment::assign_weekends(request.start, request.end, members)?;
    debug!(
        team = %request.team,
        weekends = assignments.len() / 2,
        members = members.len(),
        "weekend schedule generated"
    );

    Ok(Schedule {
        id: request.id,
        name: request.name,
        team: request.team,
        team_leader: request.team_leader,
        start: request.start,
        end: request.end,
        assignments,
    })
}

/// Prochaine affectation strictement postérieure à `today`, tous plannings confondus.
pub fn next_upcoming(schedules: &[Schedule], today: NaiveDate) -> Option<UpcomingHoliday> {
    upcoming::next_upcoming(schedules, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Assignment, Day, ScheduleId};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn request(start: NaiveDate, end: NaiveDate) -> ScheduleRequest {
        ScheduleRequest {
            id: ScheduleId::new(1),
            name: "Hiver".into(),
            team: "Ops".into(),
            team_leader: "Alice".into(),
            start,
            end,
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn assignment(member: &str, date: NaiveDate, day: Day) -> Assignment {
        Assignment {
            member: member.into(),
            date,
            day,
        }
    }

    #[test]
    fn two_members_two_weekends() {
        let schedule = generate(
            request(d(2024, 1, 1), d(2024, 1, 15)),
            &names(&["Alice", "Bob"]),
        )
        .unwrap();

        assert_eq!(
            schedule.assignments,
            vec![
                assignment("Alice", d(2024, 1, 6), Day::Saturday),
                assignment("Alice", d(2024, 1, 7), Day::Sunday),
                assignment("Bob", d(2024, 1, 13), Day::Saturday),
                assignment("Bob", d(2024, 1, 14), Day::Sunday),
            ]
        );
        assert_eq!(schedule.team_leader, "Alice");
        assert_eq!(schedule.start, d(2024, 1, 1));
        assert_eq!(schedule.end, d(2024, 1, 15));
    }

    #[test]
    fn round_robin_wraps() {
        let members = names(&["A", "B", "C"]);
        // 2024-01-06 → 2024-03-02 : 9 samedis
        let schedule = generate(request(d(2024, 1, 1), d(2024, 3, 2)), &members).unwrap();
        assert_eq!(schedule.assignments.len(), 18);

        for (i, pair) in schedule.assignments.chunks(2).enumerate() {
            assert_eq!(pair[0].member, members[i % 3]);
            assert_eq!(pair[1].member, members[i % 3]);
            assert_eq!(pair[0].day, Day::Saturday);
            assert_eq!(pair[1].day, Day::Sunday);
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
        assert_eq!(schedule.assignments[16].date, d(2024, 3, 2));
    }

    #[test]
    fn sunday_after_end_is_kept() {
        let schedule = generate(request(d(2024, 1, 8), d(2024, 1, 13)), &names(&["A"])).unwrap();
        assert_eq!(schedule.assignments.len(), 2);
        assert_eq!(schedule.assignments[1].date, d(2024, 1, 14));
    }

    #[test]
    fn range_without_weekend_is_empty() {
        let schedule = generate(request(d(2024, 1, 1), d(2024, 1, 5)), &names(&["A"])).unwrap();
        assert!(schedule.assignments.is_empty());
    }

    #[test]
    fn rejects_bad_range_before_roster() {
        let err = generate(request(d(2024, 1, 15), d(2024, 1, 15)), &[]).unwrap_err();
        assert_eq!(err, SchedError::InvalidTimeRange);
        let err = generate(request(d(2024, 2, 1), d(2024, 1, 1)), &names(&["A"])).unwrap_err();
        assert_eq!(err, SchedError::InvalidTimeRange);
    }

    #[test]
    fn rejects_empty_roster() {
        let err = generate(request(d(2024, 1, 1), d(2024, 1, 15)), &[]).unwrap_err();
        assert_eq!(err, SchedError::InvalidRoster("Ops".into()));
    }

    #[test]
    fn generation_is_deterministic() {
        let members = names(&["Alice", "Bob", "Chloé"]);
        let a = generate(request(d(2024, 1, 1), d(2024, 6, 30)), &members).unwrap();
        let b = generate(request(d(2024, 1, 1), d(2024, 6, 30)), &members).unwrap();
        assert_eq!(
            serde_json::to_string(&a.assignments).unwrap(),
            serde_json::to_string(&b.assignments).unwrap()
        );
    }

    fn schedule_with(team: &str, assignments: Vec<Assignment>) -> Schedule {
        Schedule {
            id: ScheduleId::new(1),
            name: "s".into(),
            team: team.into(),
            team_leader: String::new(),
            start: d(2024, 1, 1),
            end: d(2024, 12, 31),
            assignments,
        }
    }

    #[test]
    fn upcoming_none_when_empty_or_past() {
        assert_eq!(next_upcoming(&[], d(2024, 1, 1)), None);

        let past = schedule_with("Ops", vec![assignment("A", d(2024, 1, 6), Day::Saturday)]);
        assert_eq!(next_upcoming(&[past.clone()], d(2024, 2, 1)), None);
        // le jour même n'est plus « à venir »
        assert_eq!(next_upcoming(&[past], d(2024, 1, 6)), None);
    }

    #[test]
    fn upcoming_picks_earliest_then_first() {
        let ops = schedule_with(
            "Ops",
            vec![
                assignment("Alice", d(2024, 1, 13), Day::Saturday),
                assignment("Alice", d(2024, 1, 14), Day::Sunday),
            ],
        );
        let dev = schedule_with(
            "Dev",
            vec![
                assignment("Bob", d(2024, 1, 6), Day::Saturday),
                assignment("Bob", d(2024, 1, 13), Day::Saturday),
            ],
        );
        let tie = schedule_with("QA", vec![assignment("Chloé", d(2024, 1, 13), Day::Saturday)]);

        let next = next_upcoming(&[ops.clone(), dev.clone()], d(2024, 1, 1)).unwrap();
        assert_eq!(next.member, "Bob");
        assert_eq!(next.team, "Dev");
        assert_eq!(next.date, d(2024, 1, 6));

        let next = next_upcoming(&[ops, dev, tie], d(2024, 1, 6)).unwrap();
        assert_eq!(next.member, "Alice");
        assert_eq!(next.team, "Ops");
    }
}
