// Whitelist Sale - fixed-price token sale gated by an on-chain whitelist
// Accounts: mint, whitelist, config (vault) PDAs plus Metaplex metadata
// Every operation re-validates the PDAs it is handed before touching state

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;

use instructions::*;

declare_id!("8KeThqsiCyHR7Uez2W2RZFKAxqYWVR2PqU4akDmAWHjT");

#[program]
pub mod whitelist_sale {
    use super::*;

    /// Create the sale mint, metadata, whitelist and config vault
    ///
    /// Security considerations:
    /// - Every account address is compared against its seed derivation
    /// - Fails with AlreadyInitialized if any account already exists
    /// - Mint PDA is its own mint authority
    pub fn init_token(ctx: Context<InitToken>, params: InitTokenParams) -> Result<()> {
        instructions::init_token::handler(ctx, params)
    }

    /// Add a purchaser to the whitelist
    ///
    /// Security considerations:
    /// - Authority-only function (has_one constraint)
    /// - Rejects duplicates and a full whitelist
    pub fn add_to_whitelist(ctx: Context<ManageWhitelist>, user: Pubkey) -> Result<()> {
        instructions::manage_whitelist::add_handler(ctx, user)
    }

    /// Remove a purchaser from the whitelist (no-op if absent)
    pub fn remove_from_whitelist(ctx: Context<ManageWhitelist>, user: Pubkey) -> Result<()> {
        instructions::manage_whitelist::remove_handler(ctx, user)
    }

    /// Buy `quantity` base units of the sale token
    ///
    /// Security considerations:
    /// - Payer must be whitelisted
    /// - Checked math for cost and balances
    /// - Payment and mint land in the same transaction
    pub fn purchase_tokens(ctx: Context<PurchaseTokens>, quantity: u64) -> Result<()> {
        instructions::purchase_tokens::handler(ctx, quantity)
    }

    /// Move all lamports above the rent reserve from the vault to its owner
    pub fn withdraw_lamports(ctx: Context<WithdrawLamports>) -> Result<()> {
        instructions::withdraw_lamports::handler(ctx)
    }
}
