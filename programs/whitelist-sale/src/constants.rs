// Constants for the Whitelist Sale program

/// Seed for the token mint PDA (also its own mint authority)
pub const MINT_SEED: &[u8] = b"mint";

/// Seed for the whitelist record PDA
pub const WHITELIST_SEED: &[u8] = b"whitelist";

/// Seed for the config / vault PDA that collects purchase lamports
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix used by the Token Metadata program for metadata PDAs
pub const METADATA_SEED: &[u8] = b"metadata";

/// Maximum number of purchasers the whitelist can hold
pub const MAX_WHITELIST_USERS: usize = 100;

/// Token Metadata limits, checked before the CPI so failures surface as our own errors
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
