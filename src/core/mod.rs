//! Core domain logic for stepconf
//!
//! This module contains pure business logic with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`UserTaskConfig`, `WidgetNode`, `PermissionEntry`)
//! - `services/` - Ingestion, validation and rendering

pub mod models;
pub mod services;
