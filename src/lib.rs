pub mod config;
pub mod fetch;
pub mod group;
pub mod report;
pub mod run;
pub mod week;
