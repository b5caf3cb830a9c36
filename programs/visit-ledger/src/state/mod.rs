//! State account definitions

pub mod ledger;
pub mod visit_record;

pub use ledger::*;
pub use visit_record::*;
