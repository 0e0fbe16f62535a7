//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod films;
pub mod health;
pub mod reference;
pub mod users;
