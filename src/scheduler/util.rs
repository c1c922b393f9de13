use super::SchedError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Tous les samedis de `[start, end]`, bornes incluses, par ordre croissant.
pub(super) fn saturdays(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, SchedError> {
    let offset = (Weekday::Sat.num_days_from_monday() + 7 - start.weekday().num_days_from_monday()) % 7;
    // premier samedi au-delà du calendrier : aucun samedi dans la plage
    let Some(mut current) = start.checked_add_days(Days::new(u64::from(offset))) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    while current <= end {
        out.push(current);
        current = match current.checked_add_days(Days::new(7)) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(out)
}

pub(super) fn next_day(date: NaiveDate) -> Result<NaiveDate, SchedError> {
    date.succ_opt().ok_or(SchedError::DateOutOfRange(date))
}
