use solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the singleton lottery PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Ticket price a fresh lottery starts with.
pub const DEFAULT_TICKET_COST: u64 = LAMPORTS_PER_SOL;

/// Ticket supply of a fresh lottery.
pub const DEFAULT_MAX_TICKETS: u64 = 10;

