pub mod ledger_initialize;
pub mod ledger_withdraw;
pub mod user_register;
pub mod visit_record;

pub use ledger_initialize::*;
pub use ledger_withdraw::*;
pub use user_register::*;
pub use visit_record::*;
