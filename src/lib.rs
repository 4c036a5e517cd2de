//! Tutorlink - Tutoring Engagement Backend
//!
//! This crate brokers tutoring engagements: tutors publish availability,
//! students and tutors are paired through a matching workflow, and an
//! accepted pairing becomes a scheduled session with double-booking
//! prevention and post-session evaluations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
