//! Event listing auto-completion

mod support;

use chrono::{Duration, Utc};
use expo_core::events::load_events;
use shared::models::{Event, EventStatus};
use std::sync::Arc;
use support::MemoryStore;

fn event(id: i64, status: EventStatus, ends_in_days: i64) -> Event {
    Event {
        id,
        name: format!("Expo {id}"),
        start_date: Some(Utc::now() - Duration::days(3)),
        end_date: Some(Utc::now() + Duration::days(ends_in_days)),
        location: None,
        description: None,
        status,
        zones: vec![],
    }
}

#[tokio::test]
async fn past_events_are_completed_on_listing() {
    support::init_tracing();
    let store = Arc::new(MemoryStore::new());
    {
        let mut events = store.events.lock();
        events.push(event(1, EventStatus::Active, -2)); // ended two days ago
        events.push(event(2, EventStatus::Active, 0)); // ends today
        events.push(event(3, EventStatus::Upcoming, 5)); // still running
        events.push(event(4, EventStatus::Completed, -9)); // already done
    }

    let listed = load_events(store.as_ref(), Utc::now()).await.unwrap();

    let status_of = |id: i64| listed.iter().find(|e| e.id == id).unwrap().status;
    assert_eq!(status_of(1), EventStatus::Completed);
    // Day-granular comparison: an event ending today is not swept
    assert_eq!(status_of(2), EventStatus::Active);
    assert_eq!(status_of(3), EventStatus::Upcoming);
    assert_eq!(status_of(4), EventStatus::Completed);

    // The completion was written through to the store
    let stored = store.events.lock();
    assert_eq!(
        stored.iter().find(|e| e.id == 1).unwrap().status,
        EventStatus::Completed
    );
    assert_eq!(
        stored.iter().find(|e| e.id == 2).unwrap().status,
        EventStatus::Active
    );
}
