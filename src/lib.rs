//! Absence Engine for a recycling and waste-sorting facility
//!
//! This crate computes public holidays, counts working days and tallies the
//! approved absences of employees per category, and serves those
//! calculations over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
