//! СИоЗП salary report generator.
//!
//! This crate reads a payroll workbook with three sheets (per-employee
//! monthly salaries, the salary fund, and management salaries), validates
//! and normalizes every row, groups the salaries by reporting period and
//! employee, and writes the pension fund's СИоЗП XML document.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod grouping;
pub mod loader;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod report;
pub mod xml;
