//! Filter Statistics Canada job vacancy tables by occupation and job
//! characteristic, and chart the result over time.

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod prompt;
pub mod question;
pub mod state;
pub mod ui;

pub use error::{Result, VacancyError};
