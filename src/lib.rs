//! Monthly payroll engine for UK PAYE-style pay
//!
//! This crate calculates a month's gross pay, income tax, National Insurance,
//! pension and net pay from weekly hours, keeps an audit trace of every
//! step, and exposes the calculation over HTTP alongside a payslip store.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
