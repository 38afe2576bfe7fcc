use anchor_lang::prelude::*;

/// Event emitted when the sale mint, whitelist and config are created
#[event]
pub struct TokenInitialized {
    pub mint: Pubkey,
    pub whitelist: Pubkey,
    pub config: Pubkey,
    pub authority: Pubkey,
    pub decimals: u8,
    pub price_per_token: u64,
    pub purchase_limit: u64,
    pub timestamp: i64,
}

/// Event emitted when a purchaser is added to the whitelist
#[event]
pub struct WhitelistAdded {
    pub whitelist: Pubkey,
    pub user: Pubkey,
    pub total_users: u32,
    pub timestamp: i64,
}

/// Event emitted on a remove request; `removed` is false when the user was absent
#[event]
pub struct WhitelistRemoved {
    pub whitelist: Pubkey,
    pub user: Pubkey,
    pub removed: bool,
    pub total_users: u32,
    pub timestamp: i64,
}

/// Event emitted when tokens are purchased
#[event]
pub struct TokensPurchased {
    pub buyer: Pubkey,
    pub destination: Pubkey,
    pub quantity: u64,
    pub cost: u64,
    pub vault_balance: u64,
    pub timestamp: i64,
}

/// Event emitted when the owner drains the vault
///
/// `amount = from_purchases + surplus`; surplus covers pre-funding and direct transfers
#[event]
pub struct LamportsWithdrawn {
    pub config: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub from_purchases: u64,
    pub surplus: u64,
    pub timestamp: i64,
}
