//! Deterministic addresses for the sale's singleton accounts.
//!
//! Every address here can be recomputed off-chain from the program id alone,
//! so clients can predict them without touching the cluster. Handlers never
//! trust a caller-supplied address until it has been checked against these.

use anchor_lang::prelude::*;
use anchor_lang::{system_program, Id};
use anchor_spl::metadata::Metadata;

use crate::{constants::*, errors::SaleError};

/// Derive a program address, searching bumps from 255 down for an off-curve point
pub fn derive(seeds: &[&[u8]], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, program_id)
        .ok_or_else(|| error!(SaleError::AddressDerivationFailed))
}

pub fn find_mint_address() -> Result<(Pubkey, u8)> {
    derive(&[MINT_SEED], &crate::ID)
}

pub fn find_whitelist_address() -> Result<(Pubkey, u8)> {
    derive(&[WHITELIST_SEED], &crate::ID)
}

pub fn find_config_address() -> Result<(Pubkey, u8)> {
    derive(&[CONFIG_SEED], &crate::ID)
}

/// Metaplex metadata PDA for `mint`, owned by the Token Metadata program
pub fn find_metadata_address(mint: &Pubkey) -> Result<(Pubkey, u8)> {
    let metadata_program = Metadata::id();
    derive(
        &[METADATA_SEED, metadata_program.as_ref(), mint.as_ref()],
        &metadata_program,
    )
}

/// Check that `key` is the address produced by `seed` and a stored `bump`
///
/// Uses `create_program_address` so the check stays cheap on every call.
pub fn matches_seed(key: &Pubkey, seed: &[u8], bump: u8) -> bool {
    Pubkey::create_program_address(&[seed, &[bump]], &crate::ID)
        .map(|expected| expected == *key)
        .unwrap_or(false)
}

pub fn verify_address(actual: &Pubkey, expected: &Pubkey) -> Result<()> {
    require_keys_eq!(*actual, *expected, SaleError::SeedConstraintViolated);
    Ok(())
}

/// Reject any account that already carries data or has been assigned away
/// from the System Program. Runs before anything is created.
pub fn ensure_vacant(account: &AccountInfo) -> Result<()> {
    require!(
        account.data_is_empty() && *account.owner == system_program::ID,
        SaleError::AlreadyInitialized
    );
    Ok(())
}

/// The full set of singleton addresses for this deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleAddresses {
    pub mint: Pubkey,
    pub mint_bump: u8,
    pub whitelist: Pubkey,
    pub whitelist_bump: u8,
    pub config: Pubkey,
    pub config_bump: u8,
    pub metadata: Pubkey,
}

impl SaleAddresses {
    pub fn derive() -> Result<Self> {
        let (mint, mint_bump) = find_mint_address()?;
        let (whitelist, whitelist_bump) = find_whitelist_address()?;
        let (config, config_bump) = find_config_address()?;
        let (metadata, _) = find_metadata_address(&mint)?;

        Ok(Self {
            mint,
            mint_bump,
            whitelist,
            whitelist_bump,
            config,
            config_bump,
            metadata,
        })
    }
}
