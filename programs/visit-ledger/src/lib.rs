use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("21sDBMYYG3Th56ed4acTFkud71x8dGU7eQLC6Wf9ruPq");

#[program]
pub mod visit_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
        instructions::initialize(ctx, admin)
    }

    pub fn register(ctx: Context<Register>) -> Result<()> {
        instructions::register(ctx)
    }

    pub fn record_visit(ctx: Context<RecordVisit>, amount: u64) -> Result<()> {
        instructions::record_visit(ctx, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }
}
