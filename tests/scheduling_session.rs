//! Duration, slot and validation-gate properties of a scheduling session.

mod common;

use common::*;
use expertconnect::scheduling::{
    duration_minutes, end_time_candidates, time_slots, Phase, SchedulingSession,
};

#[test]
fn nine_to_half_past_ten_is_ninety_minutes() {
    assert_eq!(duration_minutes(Some(slot("09:00")), Some(slot("10:30"))), Some(90));
}

#[test]
fn ordered_pairs_give_elapsed_minutes() {
    let slots = time_slots();
    for start in &slots {
        for end in slots.iter().filter(|end| end.to_string() > start.to_string()) {
            let expected = u32::from(end.minute_of_day() - start.minute_of_day());
            let minutes = duration_minutes(Some(*start), Some(*end));
            assert_eq!(minutes, Some(expected), "{} - {}", start, end);
            assert!(expected > 0);
        }
    }
}

#[test]
fn unordered_pairs_have_no_duration() {
    let slots = time_slots();
    for start in &slots {
        for end in slots.iter().filter(|end| *end <= start) {
            assert_eq!(duration_minutes(Some(*start), Some(*end)), None);
        }
    }
}

#[test]
fn end_options_exclude_earlier_slots() {
    let options = end_time_candidates(Some(slot("14:00")));
    assert!(!options.contains(&slot("13:45")));
    assert!(!options.contains(&slot("14:00")));
    assert_eq!(options.first(), Some(&slot("14:15")));
    assert_eq!(options.last(), Some(&slot("23:45")));
}

#[test]
fn review_gate_needs_every_field() {
    let date = [None, Some(tomorrow())];
    let start = [None, Some(slot("09:00"))];
    let end = [None, Some(slot("10:30"))];

    for d in date {
        for s in start {
            for e in end {
                let mut session = SchedulingSession::default();
                if let Some(d) = d {
                    session = session.with_date(d, today());
                }
                if let Some(s) = s {
                    session = session.with_start_time(s);
                }
                if let Some(e) = e {
                    session = session.with_end_time(e);
                }
                let complete = d.is_some() && s.is_some() && e.is_some();
                assert_eq!(session.can_review(), complete);
                assert_eq!(session.review().phase == Phase::Review, complete);
            }
        }
    }
}

#[test]
fn review_gate_rejects_non_positive_duration() {
    let session = SchedulingSession {
        date: Some(tomorrow()),
        start_time: Some(slot("10:00")),
        end_time: Some(slot("10:00")),
        phase: Phase::Form,
    };
    assert_eq!(session.duration(), None);
    assert!(!session.can_review());
}
