use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, pda, state::*};

/// Add or remove a purchaser on the whitelist
///
/// Shared by `add_to_whitelist` and `remove_from_whitelist`.
#[derive(Accounts)]
pub struct ManageWhitelist<'info> {
    /// Whitelist authority
    /// Security: Must be signer and match whitelist.authority
    pub authority: Signer<'info>,

    /// Whitelist PDA
    /// Security: Address re-derived from stored bump, has_one validates authority
    #[account(
        mut,
        constraint = pda::matches_seed(&whitelist.key(), WHITELIST_SEED, whitelist.bump)
            @ SaleError::SeedConstraintViolated,
        has_one = authority @ SaleError::Unauthorized,
    )]
    pub whitelist: Account<'info, WhitelistRecord>,
}

pub fn add_handler(ctx: Context<ManageWhitelist>, user: Pubkey) -> Result<()> {
    let whitelist = &mut ctx.accounts.whitelist;

    whitelist.add(user)?;
    msg!("Added {} to whitelist", user);

    emit!(WhitelistAdded {
        whitelist: whitelist.key(),
        user,
        total_users: whitelist.users.len() as u32,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

pub fn remove_handler(ctx: Context<ManageWhitelist>, user: Pubkey) -> Result<()> {
    let whitelist = &mut ctx.accounts.whitelist;

    // Removing an absent user is a no-op
    let removed = whitelist.remove(&user);
    if removed {
        msg!("Removed {} from whitelist", user);
    } else {
        msg!("{} was not whitelisted", user);
    }

    emit!(WhitelistRemoved {
        whitelist: whitelist.key(),
        user,
        removed,
        total_users: whitelist.users.len() as u32,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
