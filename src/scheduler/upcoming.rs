use super::UpcomingHoliday;
use crate::model::Schedule;
use chrono::NaiveDate;

pub(super) fn next_upcoming(schedules: &[Schedule], today: NaiveDate) -> Option<UpcomingHoliday> {
    let mut best: Option<(&Schedule, NaiveDate, &str)> = None;

    for schedule in schedules {
        for a in schedule.assignments.iter().filter(|a| a.date > today) {
            // strictement inférieur : à égalité la première occurrence gagne
            if best.map_or(true, |(_, date, _)| a.date < date) {
                best = Some((schedule, a.date, a.member.as_str()));
            }
        }
    }

    best.map(|(schedule, date, member)| UpcomingHoliday {
        date,
        member: member.to_owned(),
        team: schedule.team.clone(),
    })
}
