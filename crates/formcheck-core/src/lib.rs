//! # formcheck-core
//!
//! The event-driven form controller and the traits it is wired with.
//!
//! This crate provides:
//! - The two seam traits (`Validator`, `SubmitHandler`)
//! - The `FormController` state machine that binds field events to a rule
//!   engine and gates submission behind validity and an in-flight flag
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formcheck_core::{FormController, traits::{Validator, SubmitHandler}};
//! ```

pub mod controller;
pub mod traits;

pub use controller::{FormController, FormPhase};
