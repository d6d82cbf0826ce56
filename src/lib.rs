// Library for tests to access modules

pub mod chart;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod snapshot_repo;
pub mod timeseries;
pub mod tui;
pub mod version;
pub mod view;
