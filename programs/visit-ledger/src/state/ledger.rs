use anchor_lang::prelude::*;

use crate::errors::VisitError;

/// Singleton ledger account. Holds the admin and the lamports owed to it.
///
/// The lamports themselves live in the vault PDA; `balance` is the amount
/// accumulated from accepted visits and not yet withdrawn.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct Ledger {
    /// The only identity allowed to withdraw
    pub admin: Pubkey,

    /// Visit payments received minus withdrawals, in lamports
    pub balance: u64,

    pub registered_users: u64,
    pub total_visits: u64,

    pub bump: u8,
    pub vault_bump: u8,
}

impl Ledger {
    /// Only the program's upgrade authority may create the ledger.
    pub fn ensure_deployer(upgrade_authority: Option<Pubkey>, signer: &Pubkey) -> Result<()> {
        require!(
            upgrade_authority == Some(*signer),
            VisitError::NotUpgradeAuthority
        );
        Ok(())
    }

    pub fn ensure_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, VisitError::NotAdmin);
        Ok(())
    }

    pub fn add_user(&mut self) -> Result<()> {
        self.registered_users = self
            .registered_users
            .checked_add(1)
            .ok_or(VisitError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Credit one accepted visit. Nothing is written unless both counters fit.
    pub fn credit_visit(&mut self, amount: u64) -> Result<()> {
        let balance = self
            .balance
            .checked_add(amount)
            .ok_or(VisitError::ArithmeticOverflow)?;
        let total_visits = self
            .total_visits
            .checked_add(1)
            .ok_or(VisitError::ArithmeticOverflow)?;

        self.balance = balance;
        self.total_visits = total_visits;
        Ok(())
    }

    /// Reset the balance to zero and return what it held.
    pub fn take_balance(&mut self) -> u64 {
        std::mem::take(&mut self.balance)
    }
}
