use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, pda, state::*};

/// Drain collected lamports from the config vault to its owner
#[derive(Accounts)]
pub struct WithdrawLamports<'info> {
    /// Config owner
    /// Security: Must be signer and match config.owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Config PDA holding the lamports
    /// Security: Address re-derived from stored bump, has_one validates owner
    #[account(
        mut,
        constraint = pda::matches_seed(&config.key(), CONFIG_SEED, config.bump)
            @ SaleError::SeedConstraintViolated,
        has_one = owner @ SaleError::InvalidOwner,
    )]
    pub config: Account<'info, ConfigRecord>,
}

pub fn handler(ctx: Context<WithdrawLamports>) -> Result<()> {
    let config_info = ctx.accounts.config.to_account_info();
    let reserve = Rent::get()?.minimum_balance(config_info.data_len());
    let withdrawal = ctx
        .accounts
        .config
        .settle_withdrawal(config_info.lamports(), reserve);
    let amount = withdrawal.amount;

    // INTERACTIONS: The config is program-owned, so lamports move directly
    if amount > 0 {
        ctx.accounts.config.sub_lamports(amount)?;
        ctx.accounts.owner.add_lamports(amount)?;
    }

    msg!(
        "Withdrew {} lamports from vault ({} from purchases, {} surplus)",
        amount,
        withdrawal.from_purchases,
        withdrawal.surplus
    );

    emit!(LamportsWithdrawn {
        config: ctx.accounts.config.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        from_purchases: withdrawal.from_purchases,
        surplus: withdrawal.surplus,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
