use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{self, Mint, MintTo, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, pda, state::*};

/// Buy sale tokens with lamports
///
/// Security checklist:
/// ✅ 1. SIGNER VALIDATION: Payer must be signer
/// ✅ 2. PDA VALIDATION: Config, whitelist and mint re-derived from stored bumps
/// ✅ 3. ACCESS CONTROL: Payer must be whitelisted
/// ✅ 6. MATH SAFETY: Every amount computed with checked math before any transfer
/// ✅ 8. BUSINESS LOGIC: Checks-effects-interactions, payment and mint in one transaction
/// ✅ 10. EVENTS: Emits TokensPurchased event
#[derive(Accounts)]
pub struct PurchaseTokens<'info> {
    /// Buyer, pays lamports and receives tokens
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Config PDA, receives the payment
    #[account(
        mut,
        constraint = pda::matches_seed(&config.key(), CONFIG_SEED, config.bump)
            @ SaleError::SeedConstraintViolated,
    )]
    pub config: Account<'info, ConfigRecord>,

    /// Whitelist PDA
    #[account(
        constraint = pda::matches_seed(&whitelist.key(), WHITELIST_SEED, whitelist.bump)
            @ SaleError::SeedConstraintViolated,
    )]
    pub whitelist: Account<'info, WhitelistRecord>,

    /// Sale mint PDA
    /// Security: Must be the configured mint and its own mint authority
    #[account(
        mut,
        address = config.mint @ SaleError::SeedConstraintViolated,
        constraint = pda::matches_seed(&mint.key(), MINT_SEED, config.mint_bump)
            @ SaleError::SeedConstraintViolated,
        mint::authority = mint,
    )]
    pub mint: Account<'info, Mint>,

    /// Buyer's associated token account, created on first purchase
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = payer,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<PurchaseTokens>, quantity: u64) -> Result<()> {
    // CHECKS: Whitelist membership, then the full purchase plan
    let buyer = ctx.accounts.payer.key();
    ctx.accounts.whitelist.require_whitelisted(&buyer)?;

    let plan = ctx.accounts.config.plan_purchase(
        quantity,
        ctx.accounts.destination.amount,
        ctx.accounts.payer.lamports(),
    )?;

    // EFFECTS: Update vault accounting BEFORE external calls
    let config = &mut ctx.accounts.config;
    config.apply_purchase(&plan);
    let mint_bump = config.mint_bump;

    // INTERACTIONS: Capture payment into the config vault
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.config.to_account_info(),
            },
        ),
        plan.cost,
    )?;

    // Mint to buyer, signed by the mint PDA
    let mint_seeds: &[&[u8]] = &[MINT_SEED, &[mint_bump]];
    let signer_seeds = &[&mint_seeds[..]];

    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.mint.to_account_info(),
            },
            signer_seeds,
        ),
        plan.quantity,
    )?;

    msg!("Purchased {} tokens for {} lamports", plan.quantity, plan.cost);

    emit!(TokensPurchased {
        buyer,
        destination: ctx.accounts.destination.key(),
        quantity: plan.quantity,
        cost: plan.cost,
        vault_balance: plan.vault_balance_after,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
