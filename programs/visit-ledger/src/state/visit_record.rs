use anchor_lang::prelude::*;

use crate::constants::{RATE_LIMIT_INTERVAL_SECONDS, VISIT_PRICE_LAMPORTS};
use crate::errors::VisitError;

/// Per-user visit record.
///
/// The account is created on first touch, so `registered` is what marks
/// membership in the ledger, not the account's existence.
#[account]
#[derive(InitSpace, Debug, Default, PartialEq)]
pub struct VisitRecord {
    pub ledger: Pubkey,
    pub user: Pubkey,

    pub registered: bool,

    /// Accepted visits so far
    pub visit_count: u64,

    /// Time of the last accepted visit, or of registration before the first one
    pub last_visit_time: i64,

    pub registered_at: i64,

    pub bump: u8,
}

impl VisitRecord {
    pub fn register(&mut self, ledger: Pubkey, user: Pubkey, now: i64, bump: u8) -> Result<()> {
        require!(!self.registered, VisitError::AlreadyRegistered);

        self.ledger = ledger;
        self.user = user;
        self.registered = true;
        self.visit_count = 0;
        self.last_visit_time = now;
        self.registered_at = now;
        self.bump = bump;
        Ok(())
    }

    /// Earliest time the next visit is accepted. `None` until the first visit.
    pub fn next_visit_at(&self) -> Option<i64> {
        (self.visit_count > 0)
            .then(|| self.last_visit_time.saturating_add(RATE_LIMIT_INTERVAL_SECONDS))
    }

    /// Guards for a visit, in order: registration, amount, timing.
    pub fn check_visit(&self, amount: u64, now: i64) -> Result<()> {
        require!(self.registered, VisitError::NotRegistered);
        require!(amount == VISIT_PRICE_LAMPORTS, VisitError::WrongAmount);
        if let Some(earliest) = self.next_visit_at() {
            require!(now >= earliest, VisitError::TooSoon);
        }
        Ok(())
    }

    /// Record an accepted visit and return the new visit count.
    pub fn apply_visit(&mut self, now: i64) -> Result<u64> {
        let visit_count = self
            .visit_count
            .checked_add(1)
            .ok_or(VisitError::ArithmeticOverflow)?;

        self.visit_count = visit_count;
        self.last_visit_time = now;
        Ok(visit_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000;

    fn err(e: VisitError) -> anchor_lang::error::Error {
        e.into()
    }

    fn registered_record() -> VisitRecord {
        let mut record = VisitRecord::default();
        record
            .register(Pubkey::new_unique(), Pubkey::new_unique(), T0, 254)
            .unwrap();
        record
    }

    fn visit(record: &mut VisitRecord, amount: u64, now: i64) -> Result<u64> {
        record.check_visit(amount, now)?;
        record.apply_visit(now)
    }

    #[test]
    fn register_initializes_record() {
        let record = registered_record();

        assert!(record.registered);
        assert_eq!(record.visit_count, 0);
        assert_eq!(record.last_visit_time, T0);
        assert_eq!(record.registered_at, T0);
        assert_eq!(record.bump, 254);
        assert_eq!(record.next_visit_at(), None);
    }

    #[test]
    fn second_register_is_rejected_and_keeps_record() {
        let mut record = registered_record();
        let before = record.clone();

        let result = record.register(Pubkey::new_unique(), Pubkey::new_unique(), T0 + 500, 1);

        assert_eq!(result.unwrap_err(), err(VisitError::AlreadyRegistered));
        assert_eq!(record, before);
    }

    #[test]
    fn unregistered_is_reported_before_amount_and_time() {
        let record = VisitRecord::default();

        for (amount, now) in [(0, 0), (VISIT_PRICE_LAMPORTS, T0), (u64::MAX, i64::MAX)] {
            assert_eq!(
                record.check_visit(amount, now).unwrap_err(),
                err(VisitError::NotRegistered)
            );
        }
    }

    #[test]
    fn wrong_amount_is_rejected() {
        let mut record = registered_record();

        for amount in [0, 1, VISIT_PRICE_LAMPORTS - 1, VISIT_PRICE_LAMPORTS + 1] {
            assert_eq!(
                visit(&mut record, amount, T0).unwrap_err(),
                err(VisitError::WrongAmount)
            );
        }
        assert_eq!(record.visit_count, 0);
    }

    #[test]
    fn wrong_amount_is_reported_before_too_soon() {
        let mut record = registered_record();
        visit(&mut record, VISIT_PRICE_LAMPORTS, T0).unwrap();

        assert_eq!(
            record.check_visit(1, T0 + 1).unwrap_err(),
            err(VisitError::WrongAmount)
        );
    }

    #[test]
    fn first_visit_skips_rate_limit() {
        let mut record = registered_record();

        assert_eq!(visit(&mut record, VISIT_PRICE_LAMPORTS, T0).unwrap(), 1);
        assert_eq!(record.last_visit_time, T0);
        assert_eq!(record.next_visit_at(), Some(T0 + RATE_LIMIT_INTERVAL_SECONDS));
    }

    #[test]
    fn rate_limit_is_measured_from_previous_visit() {
        let mut record = registered_record();
        let first = T0 + 3_600;
        visit(&mut record, VISIT_PRICE_LAMPORTS, first).unwrap();

        let just_before = first + RATE_LIMIT_INTERVAL_SECONDS - 1;
        assert_eq!(
            visit(&mut record, VISIT_PRICE_LAMPORTS, just_before).unwrap_err(),
            err(VisitError::TooSoon)
        );
        assert_eq!(record.visit_count, 1);
        assert_eq!(record.last_visit_time, first);

        let on_time = first + RATE_LIMIT_INTERVAL_SECONDS;
        assert_eq!(visit(&mut record, VISIT_PRICE_LAMPORTS, on_time).unwrap(), 2);
        assert_eq!(record.last_visit_time, on_time);
    }

    #[test]
    fn registration_time_is_kept_across_visits() {
        let mut record = registered_record();
        visit(&mut record, VISIT_PRICE_LAMPORTS, T0 + 10).unwrap();
        visit(&mut record, VISIT_PRICE_LAMPORTS, T0 + 200).unwrap();

        assert_eq!(record.registered_at, T0);
        assert_eq!(record.last_visit_time, T0 + 200);
    }
}
