use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, VISIT_SEED};
use crate::events::UserRegistered;
use crate::state::{Ledger, VisitRecord};

#[derive(Accounts)]
pub struct Register<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    /// Created on first touch; `registered` tells whether the user is in.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + VisitRecord::INIT_SPACE,
        seeds = [VISIT_SEED, ledger.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub visit_record: Account<'info, VisitRecord>,

    pub system_program: Program<'info, System>,
}

/// Register the signer. Fails with `AlreadyRegistered` on a second attempt.
pub fn register(ctx: Context<Register>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user = ctx.accounts.user.key();
    let ledger_key = ctx.accounts.ledger.key();

    ctx.accounts
        .visit_record
        .register(ledger_key, user, now, ctx.bumps.visit_record)?;
    ctx.accounts.ledger.add_user()?;

    msg!("✅ User registered: {:?}", user);

    emit!(UserRegistered {
        ledger: ledger_key,
        user,
        registered_at: now,
    });

    Ok(())
}
