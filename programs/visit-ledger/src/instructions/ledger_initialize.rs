use anchor_lang::prelude::*;
use anchor_lang::solana_program::bpf_loader_upgradeable;

use crate::constants::{LEDGER_SEED, VAULT_SEED};
use crate::events::LedgerInitialized;
use crate::program::VisitLedger;
use crate::state::Ledger;

#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Must be the program's upgrade authority
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    /// Vault PDA that will hold visit payments
    /// CHECK: This is a PDA that holds SOL, validated by seeds
    #[account(
        seeds = [VAULT_SEED, ledger.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    pub program: Program<'info, VisitLedger>,

    /// CHECK: ProgramData of this program, validated by seeds and
    /// deserialized in the handler
    #[account(
        seeds = [program.key().as_ref()],
        bump,
        seeds::program = bpf_loader_upgradeable::ID,
    )]
    pub program_data: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Create the ledger and fix its admin. The admin can never be changed.
///
/// # Operations
/// 1. Validate the signer is the program's upgrade authority
/// 2. Store the admin and the ledger/vault bumps
pub fn initialize(ctx: Context<Initialize>, admin: Pubkey) -> Result<()> {
    // Programs loaded by the in-process test runtime have no ProgramData (skip in test mode)
    #[cfg(not(feature = "test-mode"))]
    {
        let program_data_info = ctx.accounts.program_data.to_account_info();
        // Same checks as `Account::<ProgramData>::try_from`, without requiring an 'info borrow
        if program_data_info.owner == &anchor_lang::system_program::ID
            && program_data_info.lamports() == 0
        {
            return Err(ErrorCode::AccountNotInitialized.into());
        }
        if program_data_info.owner != &bpf_loader_upgradeable::ID {
            return Err(Error::from(ErrorCode::AccountOwnedByWrongProgram)
                .with_pubkeys((*program_data_info.owner, bpf_loader_upgradeable::ID)));
        }
        let program_data =
            ProgramData::try_deserialize(&mut &program_data_info.try_borrow_data()?[..])?;
        Ledger::ensure_deployer(program_data.upgrade_authority_address, ctx.accounts.payer.key)?;
    }

    let ledger = &mut ctx.accounts.ledger;
    ledger.admin = admin;
    ledger.balance = 0;
    ledger.registered_users = 0;
    ledger.total_visits = 0;
    ledger.bump = ctx.bumps.ledger;
    ledger.vault_bump = ctx.bumps.vault;

    msg!("✅ Ledger initialized, admin: {:?}", admin);

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        admin,
    });

    Ok(())
}
