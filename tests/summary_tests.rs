mod common;
use common::sample_entry;
use rdesktime::core::calculator::breaks::total_break_minutes;
use rdesktime::core::logic::Core;
use rdesktime::models::{BreakInterval, DaySummary, Entry};

#[test]
fn test_summary_of_full_day() {
    let s = Core::build_daily_summary(&sample_entry("2025-09-01"));

    assert_eq!(s.office_minutes, 510);
    assert_eq!(s.lunch_minutes, 45);
    assert_eq!(s.breaks_minutes, 25);
    assert_eq!(s.desk_minutes, 440);
    assert_eq!(s.total_break_minutes(), 70);
}

#[test]
fn test_summary_of_empty_entry_is_zero() {
    let s = Core::build_daily_summary(&Entry::new("2025-09-01"));
    assert_eq!(s, DaySummary::default());
}

#[test]
fn test_desk_time_can_go_negative() {
    let mut e = Entry::new("2025-09-02");
    e.office_in = "09:00".into();
    e.office_out = "10:00".into();
    e.breaks = vec![BreakInterval::with_times("09:00", "11:00")];

    let s = Core::build_daily_summary(&e);
    assert_eq!(s.breaks_minutes, 120);
    assert_eq!(s.desk_minutes, -60);
}

#[test]
fn test_overnight_shift() {
    let mut e = Entry::new("2025-09-03");
    e.office_in = "22:00".into();
    e.office_out = "06:00".into();
    e.lunch_start = "02:00".into();
    e.lunch_end = "02:30".into();

    let s = Core::build_daily_summary(&e);
    assert_eq!(s.office_minutes, 480);
    assert_eq!(s.desk_minutes, 450);
}

#[test]
fn test_incomplete_breaks_count_as_zero() {
    let breaks = vec![
        BreakInterval::with_times("10:00", "10:15"),
        BreakInterval::with_times("14:00", ""),
        BreakInterval::new(),
    ];
    assert_eq!(total_break_minutes(&breaks), 15);
    assert_eq!(total_break_minutes(&[]), 0);
}

#[test]
fn test_overlapping_breaks_are_not_merged() {
    let breaks = vec![
        BreakInterval::with_times("10:00", "10:30"),
        BreakInterval::with_times("10:15", "10:45"),
    ];
    assert_eq!(total_break_minutes(&breaks), 60);
}

#[test]
fn test_break_total_is_order_independent() {
    let a = BreakInterval::with_times("10:00", "10:15");
    let b = BreakInterval::with_times("23:50", "00:10");
    let c = BreakInterval::with_times("15:00", "15:40");

    let forward = total_break_minutes(&[a.clone(), b.clone(), c.clone()]);
    let backward = total_break_minutes(&[c, b, a]);
    assert_eq!(forward, 75);
    assert_eq!(forward, backward);
}

#[test]
fn test_summary_text_placeholders() {
    let mut e = Entry::new("2025-09-04");
    e.office_in = "09:00".into();
    e.lunch_start = "12:00".into();

    let text = Core::summary_text(&e, &Core::build_daily_summary(&e));
    assert_eq!(text.office, "--");
    assert_eq!(text.lunch, "--");
    assert_eq!(text.breaks, "0h 0m");
    assert_eq!(text.desk, "--");

    let full = sample_entry("2025-09-04");
    let text = Core::summary_text(&full, &Core::build_daily_summary(&full));
    assert_eq!(text.office, "8h 30m");
    assert_eq!(text.lunch, "0h 45m");
    assert_eq!(text.breaks, "0h 25m");
    assert_eq!(text.desk, "7h 20m");
}
