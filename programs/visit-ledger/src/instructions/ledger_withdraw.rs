use anchor_lang::prelude::*;

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::events::FundsWithdrawn;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, Ledger>,

    /// CHECK: This is a PDA that holds SOL, validated by seeds
    #[account(
        mut,
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump = ledger.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Send everything in the vault to the admin.
///
/// The vault is drained rather than debited by `balance`, so lamports sent to
/// it outside `record_visit` can never leave it below rent exemption.
///
/// # Operations
/// 1. Validate the signer is the ledger admin
/// 2. Reset the ledger balance
/// 3. Transfer all vault lamports to the admin using PDA signing
///
/// The transfer and the reset land in the same transaction, so a failed
/// transfer leaves the balance untouched.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    ctx.accounts.ledger.ensure_admin(ctx.accounts.admin.key)?;

    let ledger_key = ctx.accounts.ledger.key();
    let vault_bump = ctx.accounts.ledger.vault_bump;
    let owed = ctx.accounts.ledger.take_balance();
    let amount = ctx.accounts.vault.lamports();

    if amount > 0 {
        let vault_seeds: &[&[u8]] = &[VAULT_SEED, ledger_key.as_ref(), &[vault_bump]];

        anchor_lang::system_program::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.admin.to_account_info(),
                },
                &[vault_seeds],
            ),
            amount,
        )?;
        msg!("💰 Withdrew {} lamports ({} from visits) to admin", amount, owed);
    }

    msg!("✅ Ledger balance reset by admin: {:?}", ctx.accounts.admin.key());

    emit!(FundsWithdrawn {
        ledger: ledger_key,
        admin: ctx.accounts.admin.key(),
        amount,
    });

    Ok(())
}
