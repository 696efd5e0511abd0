use std::env;

use chrono::NaiveTime;

use crate::domain::services::scheduling::SlotGrid;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_token: String,
    pub slot_grid: SlotGrid,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://academy.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_token: env::var("ADMIN_API_TOKEN").expect("ADMIN_API_TOKEN must be set"),
            slot_grid: SlotGrid {
                day_start: time_from_env("BOOKING_DAY_START", "09:00"),
                day_end: time_from_env("BOOKING_DAY_END", "18:00"),
                slot_minutes: env::var("BOOKING_SLOT_MINUTES")
                    .unwrap_or_else(|_| "60".to_string())
                    .parse()
                    .expect("BOOKING_SLOT_MINUTES must be a number"),
            },
        }
    }
}

fn time_from_env(key: &str, default: &str) -> NaiveTime {
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    NaiveTime::parse_from_str(&raw, "%H:%M")
        .unwrap_or_else(|_| panic!("{} must be a HH:MM time", key))
}
