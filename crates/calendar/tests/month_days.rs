use smallcal_calendar::{CalendarDay, MonthDays, Weekday, days_in_month, week_order};

#[test]
fn every_month_1900_to_2100_covers_whole_weeks() {
    for first in [Weekday::Sun, Weekday::Mon] {
        for year in 1900..=2100 {
            for month in 1..=12u8 {
                let cells: Vec<CalendarDay> = MonthDays::new(year, month, first).unwrap().collect();
                assert_eq!(cells.len() % 7, 0, "{year}-{month}: partial week");
                assert!(
                    (28..=42).contains(&cells.len()),
                    "{year}-{month}: {} cells",
                    cells.len()
                );
                assert_eq!(cells[0].weekday(), first, "{year}-{month}: bad first cell");
                assert_eq!(
                    cells.last().unwrap().weekday(),
                    week_order(first)[6],
                    "{year}-{month}: bad last cell"
                );
            }
        }
    }
}

#[test]
fn in_month_cells_match_month_length() {
    for year in [1900, 2000, 2023, 2024, 2100] {
        for month in 1..=12u8 {
            let n = MonthDays::new(year, month, Weekday::Sun)
                .unwrap()
                .filter(|d| d.is_in_month(year, month))
                .count();
            assert_eq!(
                n,
                usize::from(days_in_month(year, month).unwrap()),
                "{year}-{month}"
            );
        }
    }
}

#[test]
fn cells_are_consecutive_days() {
    let cells: Vec<_> = MonthDays::new(2024, 3, Weekday::Sun).unwrap().collect();
    for pair in cells.windows(2) {
        assert_eq!(pair[0].next().unwrap(), pair[1]);
    }
}

#[test]
fn january_leading_days_come_from_previous_year() {
    // Jan 1 2025 is a Wednesday: Sun 29, Mon 30, Tue 31 Dec 2024 lead in.
    let cells: Vec<_> = MonthDays::new(2025, 1, Weekday::Sun).unwrap().take(4).collect();
    let ymd: Vec<_> = cells.iter().map(|d| (d.year(), d.month(), d.day())).collect();
    assert_eq!(
        ymd,
        vec![(2024, 12, 29), (2024, 12, 30), (2024, 12, 31), (2025, 1, 1)]
    );
}

#[test]
fn overflow_first_of_next_month_is_tagged() {
    // Sep 2023 ends on a Saturday; Oct 2023 grid starts Sunday Oct 1.
    let sep: Vec<_> = MonthDays::new(2023, 9, Weekday::Sun).unwrap().collect();
    assert!(sep.iter().all(|d| d.month() == 8 || d.month() == 9));
    let oct: Vec<_> = MonthDays::new(2023, 10, Weekday::Sun).unwrap().collect();
    assert!(oct[0].is_first_of_month());
    assert_eq!(oct[0].month(), 10);
}
