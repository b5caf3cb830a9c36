pub const LEDGER_SEED: &[u8] = b"ledger";
pub const VISIT_SEED: &[u8] = b"visit";
pub const VAULT_SEED: &[u8] = b"vault";

pub const VISIT_PRICE_LAMPORTS: u64 = 1_000_000_000; // 1 SOL
pub const RATE_LIMIT_INTERVAL_SECONDS: i64 = 60;
