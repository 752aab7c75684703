//! Timeclock Engine for fleet driver payroll
//!
//! This crate pairs raw clock-in/clock-out events into work sessions,
//! partitions them into bi-weekly pay periods, builds payroll submissions
//! with overtime splits, and manages the timesheet approval lifecycle.

#![warn(missing_docs)]

pub mod aggregation;
pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
