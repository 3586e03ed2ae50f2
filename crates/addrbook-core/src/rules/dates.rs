use chrono::{Datelike, Local, NaiveDate};

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Same day and month as `date`, moved to `year`.
pub fn anniversary(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
        if date.month() == 2 && date.day() == 29 && !is_leap_year(year) {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}

/// First anniversary of `date` on or after `today`.
pub fn next_anniversary(date: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary(date, today.year())?;
    if this_year >= today {
        return Some(this_year);
    }
    anniversary(date, today.year() + 1)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
