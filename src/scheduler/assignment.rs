use super::{util, SchedError};
use crate::model::{Assignment, Day};
use chrono::NaiveDate;

/// Attribue chaque week-end (samedi + dimanche) au membre suivant, en boucle.
pub(super) fn assign_weekends(
    start: NaiveDate,
    end: NaiveDate,
    members: &[String],
) -> Result<Vec<Assignment>, SchedError> {
    let total = members.len();
    let saturdays = util::saturdays(start, end)?;
    let mut out = Vec::with_capacity(saturdays.len() * 2);

    for (i, saturday) in saturdays.into_iter().enumerate() {
        let member = &members[i % total];
        let sunday = util::next_day(saturday)?;
        out.push(Assignment {
            member: member.clone(),
            date: saturday,
            day: Day::Saturday,
        });
        out.push(Assignment {
            member: member.clone(),
            date: sunday,
            day: Day::Sunday,
        });
    }

    Ok(out)
}
