//! # Cadence Core Library
//!
//! The algorithmic heart of the Cadence task manager: recurrence rules and
//! the horizon-bounded expansion engine that materializes them into concrete
//! dated task instances.
//!
//! ## Features
//!
//! - **Typed Recurrence Rules**: daily/weekly/monthly/custom frequencies as a
//!   sum type, so invalid combinations (e.g. a monthly rule carrying weekday
//!   sets) are unrepresentable
//! - **Horizon-Bounded Expansion**: instances are generated ahead of time up
//!   to a rolling lookahead window (90 days by default), never past a rule's
//!   own end date
//! - **Idempotent by Construction**: expansion dedupes against the instances
//!   it already produced, so re-running it against a populated store is a
//!   no-op
//! - **Fail-Soft**: malformed rule dates degrade to a logged warning and a
//!   bounded partial result, never a panic or an error surfaced to the
//!   reactive caller
//!
//! ## Core Modules
//!
//! - [`models`]: Recurrence rules, task instances, and their template fields
//! - [`expand`]: The expansion engine and its configuration
//! - [`dates`]: Calendar-date parsing and interval arithmetic
//! - [`error`]: Error types for boundary validation
//!
//! ## Example Usage
//!
//! ```rust
//! use cadence_core::expand::Expander;
//! use cadence_core::models::{Recurrence, RecurrenceRule};
//!
//! let rule = RecurrenceRule::new("Water the plants", Recurrence::Daily { interval: 2 });
//! let expander = Expander::with_defaults();
//!
//! // No instances exist yet, so the whole horizon gets populated.
//! let created = expander.expand(&rule, &[], None);
//! assert!(!created.is_empty());
//!
//! // Feeding the output back in yields nothing new.
//! assert!(expander.expand(&rule, &created, None).is_empty());
//! ```

pub mod dates;
pub mod error;
pub mod expand;
pub mod models;
