//! # CheckITS Core
//!
//! Domain logic for the CheckITS attendance tracker: the officer roster,
//! name normalization and matching, roster reconciliation, attendance
//! metrics (rate, streak, badges), and the QR payload convention.
//!
//! Everything in this crate is a synchronous, pure computation over
//! already-fetched snapshots. Functions that depend on the current time
//! take an explicit `now` parameter instead of reading the clock.

pub mod errors;
pub mod metrics;
pub mod models;
pub mod names;
pub mod qr;
pub mod reconcile;
pub mod roster;
