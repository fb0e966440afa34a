//! Core model for callboard.
//!
//! This crate defines the event records, the retained element tree that
//! cards are rendered into, and the signup form logic: single-select
//! availability options, read-back of the form into a [`FormResult`],
//! and the presence checks run before submission.
//!
//! [`FormResult`]: model::FormResult

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod choice;
pub mod collect;
pub mod dom;
pub mod error;
pub mod model;
pub mod page;
pub mod render;
pub mod report;
pub mod validate;

pub use choice::ChoiceGroup;
pub use dom::Element;
pub use error::{Error, Result};
pub use page::{LineupBoard, SignupForm};
pub use validate::Validation;
