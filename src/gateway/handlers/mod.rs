//! Gateway handlers

pub mod compare;
pub mod health;
pub mod helpers;
pub mod proof;
pub mod testdb;
pub mod transfer;

pub use compare::*;
pub use health::*;
pub use proof::*;
pub use testdb::*;
pub use transfer::*;
