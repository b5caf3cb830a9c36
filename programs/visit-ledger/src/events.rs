use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub ledger: Pubkey,
    pub admin: Pubkey,
}

#[event]
pub struct UserRegistered {
    pub ledger: Pubkey,
    pub user: Pubkey,
    pub registered_at: i64,
}

#[event]
pub struct VisitRecorded {
    pub ledger: Pubkey,
    pub user: Pubkey,
    pub visit_count: u64,
    pub visited_at: i64,
    pub amount: u64,
}

#[event]
pub struct FundsWithdrawn {
    pub ledger: Pubkey,
    pub admin: Pubkey,
    pub amount: u64,
}
