use anchor_lang::prelude::*;

#[error_code]
pub enum VisitError {
    #[msg("Already registered")]
    AlreadyRegistered,

    #[msg("Not registered")]
    NotRegistered,

    #[msg("Visit payment must equal the visit price (1 SOL)")]
    WrongAmount,

    #[msg("A visit was recorded less than a minute ago")]
    TooSoon,

    #[msg("Unauthorized: signer is not the ledger admin")]
    NotAdmin,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Unauthorized: signer is not the program upgrade authority")]
    NotUpgradeAuthority,
}
