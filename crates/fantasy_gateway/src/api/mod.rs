//! Authenticated access to the fantasy data API

pub mod client;
pub mod leagues;

pub use client::{FantasyApiClient, DEFAULT_WEEK};
pub use leagues::{first_league, LeagueSummary};
