//! Nbtrigger Core
//!
//! Core types for the notebook job trigger.
//!
//! This crate contains:
//! - Request payloads sent to the execution service
//! - Job tracking and status types
//! - Log reconciliation and outcome interpretation

pub mod job;
pub mod logs;
pub mod request;
