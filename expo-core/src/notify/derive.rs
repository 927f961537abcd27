//! Alert derivation rules
//!
//! Three independent rules over three read snapshots. Identifiers are pure
//! functions of the triggering entity's stable key, never of list position,
//! so acknowledgements keyed by identifier survive recomputation.

use chrono::{DateTime, Duration, Utc};
use shared::models::{
    event_soon_id, low_stock_id, Consumable, Event, Installation, Notification, NotificationKind,
    PrinterKind, LONG_ACTIVE_INSTALLATIONS_ID,
};
use shared::util;
use std::collections::HashSet;

/// Derive the full alert list from the three snapshots.
/// The result replaces any previous list; `read` flags come from membership
/// in the acknowledgement set.
pub fn derive_notifications(
    brother: &[Consumable],
    godex: &[Consumable],
    events: &[Event],
    installations: &[Installation],
    read: &HashSet<String>,
    now: DateTime<Utc>,
) -> Vec<Notification> {
    let mut notifications = Vec::new();
    low_stock_alerts(brother, PrinterKind::Brother, read, now, &mut notifications);
    low_stock_alerts(godex, PrinterKind::Godex, read, now, &mut notifications);
    imminent_event_alerts(events, read, now, &mut notifications);
    if let Some(alert) = long_running_alert(installations, read, now) {
        notifications.push(alert);
    }
    notifications
}

/// One warning per consumable at or below its minimum
fn low_stock_alerts(
    consumables: &[Consumable],
    kind: PrinterKind,
    read: &HashSet<String>,
    now: DateTime<Utc>,
    out: &mut Vec<Notification>,
) {
    for consumable in consumables.iter().filter(|c| c.is_low()) {
        let id = low_stock_id(kind, consumable.id);
        out.push(Notification {
            read: read.contains(&id),
            id,
            kind: NotificationKind::Warning,
            title: "Низкий остаток расходника".to_string(),
            message: format!(
                "{} ({}): осталось {} шт. (минимум: {} шт.)",
                consumable.name,
                kind.label(),
                consumable.quantity,
                consumable.minimum()
            ),
            display_time: util::format_day_month_time(now),
            created_at: now,
        });
    }
}

/// One info alert per upcoming/active event starting inside the next 24
/// hours (`now <= start < now + 24h`)
fn imminent_event_alerts(
    events: &[Event],
    read: &HashSet<String>,
    now: DateTime<Utc>,
    out: &mut Vec<Notification>,
) {
    let window_end = now + Duration::hours(24);
    for event in events {
        if !event.accepts_installations() {
            continue;
        }
        let Some(start) = event.start_date else { continue };
        if start < now || start >= window_end {
            continue;
        }

        // Whole hours, rounded to nearest
        let minutes = (start - now).num_minutes();
        let hours = (minutes + 30) / 60;

        let id = event_soon_id(event.id);
        out.push(Notification {
            read: read.contains(&id),
            id,
            kind: NotificationKind::Info,
            title: "Мероприятие скоро начнется".to_string(),
            message: format!(
                "{} начнется через {} {}",
                event.name,
                hours,
                util::hours_word(hours)
            ),
            display_time: util::format_day_month_time(start),
            created_at: now,
        });
    }
}

/// A single aggregate info alert when installations have been active for
/// more than 7 days
fn long_running_alert(
    installations: &[Installation],
    read: &HashSet<String>,
    now: DateTime<Utc>,
) -> Option<Notification> {
    let threshold = now - Duration::days(7);
    let count = installations
        .iter()
        .filter(|inst| inst.date.is_some_and(|date| date < threshold))
        .count();
    if count == 0 {
        return None;
    }

    let id = LONG_ACTIVE_INSTALLATIONS_ID.to_string();
    Some(Notification {
        read: read.contains(&id),
        id,
        kind: NotificationKind::Info,
        title: "Долгие активные установки".to_string(),
        message: format!("{count} установок активны более 7 дней"),
        display_time: util::format_day_month(now),
        created_at: now,
    })
}
