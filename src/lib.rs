//! stepconf - Converts process-editor user-task steps into engine XML
//!
//! A user task arrives as editor JSON carrying a nested widget tree. This
//! library validates it and renders two XML documents: the engine `<task>`
//! fragment and the UI-store widget configuration.
//!
//! ```
//! use serde_json::json;
//! use stepconf::core::models::{OutgoingTransitions, UserTaskConfig};
//! use stepconf::core::services::{render_task_xml, render_widget_xml};
//! use stepconf::xml::RenderOptions;
//!
//! let conf = json!({"assignee": "bob", "widgetId": "root", "priority": 0});
//! let json = json!({"properties": {"name": "Approve", "aperte-conf": conf.to_string()}});
//!
//! let task = UserTaskConfig::from_json(&json, OutgoingTransitions::new()).unwrap();
//! let options = RenderOptions::compact();
//! assert_eq!(render_task_xml(&task, &options).unwrap(), r#"<task assignee="bob" name="Approve" g="0,0,0,0"/>"#);
//! assert!(render_widget_xml(&task, &options).unwrap().contains("<widgets/>"));
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod xml;

pub use error::{Error, ErrorKind};
