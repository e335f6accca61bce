use super::*;
use std::time::Duration;

#[test]
fn fires_after_delay() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Duration::from_secs(10), "reveal");
    assert!(!scheduler.is_idle());
    assert!(scheduler.tick(Duration::from_secs(5)).is_empty());
    assert_eq!(scheduler.tick(Duration::from_secs(5)), vec!["reveal"]);
    assert!(scheduler.is_idle());
    assert!(scheduler.tick(Duration::from_secs(5)).is_empty());
}

#[test]
fn zero_delay_fires_on_next_tick() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Duration::default(), 1);
    assert_eq!(scheduler.tick(Duration::default()), vec![1]);
}

#[test]
fn fires_in_deadline_order() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Duration::from_millis(2000), "confetti");
    scheduler.schedule(Duration::from_millis(600), "shake");
    scheduler.schedule(Duration::from_millis(600), "shake again");
    assert_eq!(
        scheduler.tick(Duration::from_secs(3)),
        vec!["shake", "shake again", "confetti"]
    );
}

#[test]
fn cancelled_cue_never_fires() {
    let mut scheduler = Scheduler::new();
    let token = scheduler.schedule(Duration::from_millis(600), "shake");
    scheduler.schedule(Duration::from_millis(600), "other");
    assert!(scheduler.cancel(token));
    assert!(!scheduler.cancel(token));
    assert_eq!(scheduler.tick(Duration::from_secs(1)), vec!["other"]);
}

#[test]
fn cancel_all_clears_pending_cues() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(Duration::from_millis(600), "shake");
    scheduler.schedule(Duration::from_secs(2), "confetti");
    scheduler.cancel_all();
    assert!(scheduler.is_idle());
    assert!(scheduler.tick(Duration::from_secs(5)).is_empty());
}
