//! Fixed brief of the advertised event and the countdown to its start.

use chrono::{DateTime, TimeDelta, Utc};

/// Unix timestamp of the doors opening: Sunday 28 September 2025, 14:00 GMT.
const STARTS_AT_UNIX: i64 = 1_759_068_000;

/// Ticket offer advertised on the landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub name: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

/// Static facts about the event shared by the landing page API and the chat
/// persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBrief {
    pub name: &'static str,
    pub starts_at: DateTime<Utc>,
    pub schedule: &'static str,
    pub venue: &'static str,
    pub starting_price: &'static str,
    pub event_code: &'static str,
    pub contact_phone: &'static str,
    pub whatsapp_url: &'static str,
    pub offers: Vec<Offer>,
    pub highlights: Vec<&'static str>,
}

impl EventBrief {
    /// Brief for "Le Brunch du Baron – Project X".
    pub fn brunch_du_baron() -> Self {
        Self {
            name: "Le Brunch du Baron – Project X",
            starts_at: DateTime::from_timestamp(STARTS_AT_UNIX, 0).unwrap_or_default(),
            schedule: "Dimanche 28 Septembre 2025 à partir de 14h GMT",
            venue: "Latrille Grillz – Angré Château (en face de la cité militaire)",
            starting_price: "7 000 F CFA",
            event_code: "1510",
            contact_phone: "+225 07 47 28 66 39",
            whatsapp_url: "https://wa.me/22507472866639",
            offers: vec![
                Offer {
                    name: "Les Barons d'Arignac",
                    price: "7 000 F",
                    description: "accès complet et boisson de bienvenue",
                },
                Offer {
                    name: "Pack 3 Bouteilles",
                    price: "20 000 F",
                    description: "3 bouteilles premium et table VIP",
                },
            ],
            highlights: vec![
                "Brunch gourmand avec spécialités locales et internationales",
                "Musique et DJ sets pour une ambiance festive",
                "Cocktails premium et boissons d'exception",
                "Activités festives, jeux et animations",
            ],
        }
    }

    /// Time left until the event starts, as seen at `now`.
    pub fn countdown(&self, now: DateTime<Utc>) -> Countdown {
        Countdown::until(self.starts_at, now)
    }
}

/// Remaining time split into display units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Split the time between `now` and `target`; all zero once passed.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::Countdown;
    /// use chrono::{TimeDelta, Utc};
    ///
    /// let now = Utc::now();
    /// let countdown = Countdown::until(now + TimeDelta::seconds(90_061), now);
    /// assert_eq!((countdown.days, countdown.hours, countdown.minutes, countdown.seconds), (1, 1, 1, 1));
    /// ```
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let remaining = target - now;
        if remaining <= TimeDelta::zero() {
            return Self::default();
        }
        let days = remaining.num_days();
        let remaining = remaining - TimeDelta::days(days);
        let hours = remaining.num_hours();
        let remaining = remaining - TimeDelta::hours(hours);
        let minutes = remaining.num_minutes();
        let remaining = remaining - TimeDelta::minutes(minutes);
        Self {
            days,
            hours,
            minutes,
            seconds: remaining.num_seconds(),
        }
    }

    /// True once the event has started.
    pub fn is_elapsed(&self) -> bool {
        *self == Self::default()
    }
}
