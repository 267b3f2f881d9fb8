//! Profile Wizard - multi-step fitness profile registration
//!
//! Collects body measurements and preferences over seven validated steps,
//! mirrors progress to key-value storage, derives BMI and a daily calorie
//! goal, and submits the finished profile to a remote service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
