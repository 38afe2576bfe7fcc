use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};
use anchor_spl::{
    metadata::{
        create_metadata_accounts_v3, mpl_token_metadata::types::DataV2, CreateMetadataAccountsV3,
        Metadata,
    },
    token::{self, InitializeMint2, Mint, Token},
};

use crate::{
    constants::*,
    errors::*,
    events::*,
    pda::{self, SaleAddresses},
    state::*,
};

/// Descriptive and economic parameters fixed at initialization
#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone)]
pub struct InitTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    /// Lamports per base unit of the sale token
    pub price_per_token: u64,
    /// Per-wallet token cap, 0 disables it
    pub purchase_limit: u64,
}

impl InitTokenParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.name.len() <= MAX_NAME_LENGTH, SaleError::NameTooLong);
        require!(self.symbol.len() <= MAX_SYMBOL_LENGTH, SaleError::SymbolTooLong);
        require!(self.uri.len() <= MAX_URI_LENGTH, SaleError::UriTooLong);
        require!(self.price_per_token > 0, SaleError::InvalidPrice);
        Ok(())
    }
}

/// Create the sale mint, its metadata, the whitelist and the config vault
///
/// Security checklist:
/// ✅ 1. SIGNER VALIDATION: Payer must be signer
/// ✅ 2. PDA VALIDATION: Every address re-derived and compared before use
/// ✅ 3. RE-INIT PROTECTION: All four accounts must be vacant, checked before any CPI
/// ✅ 4. MINT AUTHORITY: Mint PDA is its own mint and metadata update authority
/// ✅ 10. EVENTS: Emits TokenInitialized event
#[derive(Accounts)]
pub struct InitToken<'info> {
    /// Pays for all created accounts, becomes whitelist authority and config owner
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Sale mint PDA, address and vacancy validated in handler
    #[account(mut)]
    pub mint: UncheckedAccount<'info>,

    /// CHECK: Whitelist PDA, address and vacancy validated in handler
    #[account(mut)]
    pub whitelist: UncheckedAccount<'info>,

    /// CHECK: Config PDA, address and vacancy validated in handler
    #[account(mut)]
    pub config: UncheckedAccount<'info>,

    /// CHECK: Metaplex metadata PDA, address and vacancy validated in handler
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub token_metadata_program: Program<'info, Metadata>,
}

pub fn handler(ctx: Context<InitToken>, params: InitTokenParams) -> Result<()> {
    // CHECKS: Inputs, derived addresses, vacancy. Nothing is written until all pass.
    params.validate()?;

    let addresses = SaleAddresses::derive()?;
    let accounts = &ctx.accounts;

    pda::verify_address(&accounts.mint.key(), &addresses.mint)?;
    pda::verify_address(&accounts.whitelist.key(), &addresses.whitelist)?;
    pda::verify_address(&accounts.config.key(), &addresses.config)?;
    pda::verify_address(&accounts.metadata.key(), &addresses.metadata)?;

    pda::ensure_vacant(&accounts.mint)?;
    pda::ensure_vacant(&accounts.whitelist)?;
    pda::ensure_vacant(&accounts.config)?;
    pda::ensure_vacant(&accounts.metadata)?;

    let payer = accounts.payer.to_account_info();
    let system = accounts.system_program.to_account_info();

    let mint_bump = addresses.mint_bump;
    let mint_seeds: &[&[u8]] = &[MINT_SEED, &[mint_bump]];
    let whitelist_bump = addresses.whitelist_bump;
    let whitelist_seeds: &[&[u8]] = &[WHITELIST_SEED, &[whitelist_bump]];
    let config_bump = addresses.config_bump;
    let config_seeds: &[&[u8]] = &[CONFIG_SEED, &[config_bump]];

    // EFFECTS: Mint with the mint PDA as its own authority, no freeze authority
    create_pda_account(
        &payer,
        &accounts.mint,
        &system,
        Mint::LEN,
        &token::ID,
        &[mint_seeds],
    )?;
    token::initialize_mint2(
        CpiContext::new(
            accounts.token_program.to_account_info(),
            InitializeMint2 {
                mint: accounts.mint.to_account_info(),
            },
        ),
        params.decimals,
        &addresses.mint,
        None,
    )?;

    create_pda_account(
        &payer,
        &accounts.whitelist,
        &system,
        WhitelistRecord::SPACE,
        &crate::ID,
        &[whitelist_seeds],
    )?;
    write_record(
        &accounts.whitelist,
        &WhitelistRecord::new(payer.key(), whitelist_bump),
    )?;

    create_pda_account(
        &payer,
        &accounts.config,
        &system,
        ConfigRecord::SPACE,
        &crate::ID,
        &[config_seeds],
    )?;
    write_record(
        &accounts.config,
        &ConfigRecord {
            owner: payer.key(),
            mint: addresses.mint,
            price_per_token: params.price_per_token,
            purchase_limit: params.purchase_limit,
            balance: 0,
            total_raised: 0,
            total_sold: 0,
            bump: config_bump,
            mint_bump,
            whitelist_bump,
        },
    )?;

    // INTERACTIONS: Register metadata, signed by the mint PDA
    let token_data = DataV2 {
        name: params.name,
        symbol: params.symbol,
        uri: params.uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };
    let metadata_signer = [mint_seeds];
    let metadata_ctx = CpiContext::new_with_signer(
        accounts.token_metadata_program.to_account_info(),
        CreateMetadataAccountsV3 {
            metadata: accounts.metadata.to_account_info(),
            mint: accounts.mint.to_account_info(),
            mint_authority: accounts.mint.to_account_info(),
            payer: payer.clone(),
            update_authority: accounts.mint.to_account_info(),
            system_program: system.clone(),
            rent: accounts.rent.to_account_info(),
        },
        &metadata_signer,
    );
    create_metadata_accounts_v3(metadata_ctx, token_data, false, true, None)?;

    msg!("Token mint created successfully.");

    emit!(TokenInitialized {
        mint: addresses.mint,
        whitelist: addresses.whitelist,
        config: addresses.config,
        authority: payer.key(),
        decimals: params.decimals,
        price_per_token: params.price_per_token,
        purchase_limit: params.purchase_limit,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

/// Create `target` at its PDA, handling addresses that were pre-funded with lamports
fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system: &AccountInfo<'info>,
    space: usize,
    owner: &Pubkey,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let required = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        return system_program::create_account(
            CpiContext::new_with_signer(
                system.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            owner,
        );
    }

    let top_up = required.saturating_sub(current);
    if top_up > 0 {
        system_program::transfer(
            CpiContext::new(
                system.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            top_up,
        )?;
    }
    system_program::allocate(
        CpiContext::new_with_signer(
            system.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
            signer_seeds,
        ),
        space as u64,
    )?;
    system_program::assign(
        CpiContext::new_with_signer(
            system.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
            signer_seeds,
        ),
        owner,
    )
}

fn write_record<T: AccountSerialize>(account: &AccountInfo, record: &T) -> Result<()> {
    let mut data = account.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}
