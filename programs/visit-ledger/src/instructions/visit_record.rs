use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, VAULT_SEED, VISIT_SEED};
use crate::events::VisitRecorded;
use crate::state::{Ledger, VisitRecord};

#[derive(Accounts)]
pub struct RecordVisit<'info> {
    /// Visitor paying for the visit
    #[account(mut)]
    pub user: Signer<'info>,

    /// Writable so every visit is serialized against the whole ledger
    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    /// An unregistered caller gets a blank record here, and the transaction
    /// is rolled back by the registration guard.
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + VisitRecord::INIT_SPACE,
        seeds = [VISIT_SEED, ledger.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub visit_record: Account<'info, VisitRecord>,

    /// CHECK: This is a PDA that holds SOL, validated by seeds
    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Record a paid visit for the signer.
///
/// # Operations
/// 1. Check registration, amount, then the one-minute interval (skipped on the first visit)
/// 2. Move `amount` lamports from the user to the vault
/// 3. Bump the visit count and last visit time, credit the ledger
pub fn record_visit(ctx: Context<RecordVisit>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    ctx.accounts.visit_record.check_visit(amount, now)?;

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;
    msg!("💰 Received {} lamports into vault", amount);

    let visit_count = ctx.accounts.visit_record.apply_visit(now)?;
    ctx.accounts.ledger.credit_visit(amount)?;

    msg!(
        "✅ Visit #{} recorded for {:?}",
        visit_count,
        ctx.accounts.user.key()
    );

    emit!(VisitRecorded {
        ledger: ctx.accounts.ledger.key(),
        user: ctx.accounts.user.key(),
        visit_count,
        visited_at: now,
        amount,
    });

    Ok(())
}
