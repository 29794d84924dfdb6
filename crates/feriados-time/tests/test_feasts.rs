//! Integration tests for the Easter-derived feast calendar.

use chrono::NaiveDate;
use feriados_time::{easter_sunday, MonthDay, MovableFeast};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn feast_calendar_2023() {
    // Easter Sunday 2023: April 9.
    assert_eq!(easter_sunday(2023), Some(date(2023, 4, 9)));
    assert_eq!(MovableFeast::Carnaval.date_in(2023), Some(date(2023, 2, 21)));
    assert_eq!(
        MovableFeast::SextaFeiraSanta.date_in(2023),
        Some(date(2023, 4, 7))
    );
    assert_eq!(MovableFeast::Pascoa.date_in(2023), Some(date(2023, 4, 9)));
    assert_eq!(
        MovableFeast::CorpusChristi.date_in(2023),
        Some(date(2023, 6, 8))
    );
}

#[test]
fn feast_calendar_2025() {
    // Easter Sunday 2025: April 20.
    assert_eq!(MovableFeast::Carnaval.date_in(2025), Some(date(2025, 3, 4)));
    assert_eq!(
        MovableFeast::SextaFeiraSanta.date_in(2025),
        Some(date(2025, 4, 18))
    );
    assert_eq!(
        MovableFeast::CorpusChristi.date_in(2025),
        Some(date(2025, 6, 19))
    );
}

#[test]
fn feasts_follow_calendar_order_every_year() {
    for year in 1900..=2200 {
        let dates: Vec<NaiveDate> = MovableFeast::ALL
            .iter()
            .map(|feast| feast.date_in(year).unwrap())
            .collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "year {year}");
    }
}

#[test]
fn feast_dates_project_onto_month_days() {
    let good_friday = MovableFeast::SextaFeiraSanta.date_in(2024).unwrap();
    assert_eq!(MonthDay::from_date(good_friday).to_string(), "03-29");
}

#[test]
fn carnaval_always_lands_in_february_or_march() {
    for year in 1900..=2200 {
        let carnaval = MovableFeast::Carnaval.date_in(year).unwrap();
        let md = MonthDay::from_date(carnaval);
        assert!(md.month() == 2 || md.month() == 3, "year {year}: {carnaval}");
    }
}
