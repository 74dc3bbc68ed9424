//! Init token instruction
//!
//! Creates the mint at its PDA with the PDA as mint and freeze authority, then
//! attaches Metaplex metadata signed by the same PDA. Both happen in one
//! transaction so a mint never exists without its metadata.

use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke_signed, program_pack::Pack},
    system_program::{
        allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
    },
};
use anchor_spl::token::{
    initialize_mint2, spl_token::state::Mint as SplMint, InitializeMint2, Token,
};
use mpl_token_metadata::{
    instructions::{CreateMetadataAccountV3, CreateMetadataAccountV3InstructionArgs},
    types::DataV2,
};

use crate::{
    constants::MINT_SEED,
    error::TokenMinterError,
    events::TokenInitialized,
    token_validate::validate_token,
    utils::try_derive_metadata,
};

/// Parameters for creating the token
#[derive(Clone, Debug, PartialEq, Eq, AnchorSerialize, AnchorDeserialize)]
pub struct InitTokenParams {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
}

#[derive(Accounts)]
pub struct InitToken<'info> {
    /// Token mint PDA, allocated by the handler
    /// CHECK: Address checked by seeds; the handler requires it to be empty
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: UncheckedAccount<'info>,

    /// Metadata account
    /// CHECK: Resolved against the mint in the handler; created by Metaplex CPI
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    /// Pays for the mint and metadata accounts
    #[account(mut)]
    pub payer: Signer<'info>,

    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,

    /// Metaplex token metadata program
    /// CHECK: The metadata program ID is validated by address constraint
    #[account(address = mpl_token_metadata::ID)]
    pub token_metadata_program: UncheckedAccount<'info>,
}

pub fn init_token<'info>(ctx: Context<'_, '_, '_, 'info, InitToken<'info>>, params: InitTokenParams) -> Result<()> {
    // A second call must be distinguishable from a real failure
    require!(
        ctx.accounts.mint.data_is_empty(),
        TokenMinterError::AlreadyInitialized
    );

    let mint_key = ctx.accounts.mint.key();
    let (expected_metadata, _) = try_derive_metadata(&mint_key)?;
    require_keys_eq!(
        ctx.accounts.metadata.key(),
        expected_metadata,
        TokenMinterError::AccountResolutionFailure
    );

    validate_token(&params)?;

    let mint_seeds: &[&[u8]] = &[MINT_SEED, &[ctx.bumps.mint]];
    let signer_seeds = &[mint_seeds];

    create_mint_account(&ctx, signer_seeds)?;

    initialize_mint2(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            InitializeMint2 {
                mint: ctx.accounts.mint.to_account_info(),
            },
        ),
        params.decimals,
        &mint_key,
        Some(&mint_key),
    )?;

    let token_data = DataV2 {
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        uri: params.uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    // The mint PDA is both mint authority and update authority
    let create_metadata_ix = CreateMetadataAccountV3 {
        metadata: ctx.accounts.metadata.key(),
        mint: mint_key,
        mint_authority: mint_key,
        payer: ctx.accounts.payer.key(),
        update_authority: (mint_key, true),
        system_program: ctx.accounts.system_program.key(),
        rent: Some(ctx.accounts.rent.key()),
    }
    .instruction(CreateMetadataAccountV3InstructionArgs {
        data: token_data,
        is_mutable: false,
        collection_details: None,
    });

    invoke_signed(
        &create_metadata_ix,
        &[
            ctx.accounts.metadata.to_account_info(),
            ctx.accounts.mint.to_account_info(),
            ctx.accounts.payer.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.rent.to_account_info(),
            ctx.accounts.token_metadata_program.to_account_info(),
        ],
        signer_seeds,
    )?;

    msg!("Token initialized: {} ({})", params.name, params.symbol);

    emit!(TokenInitialized {
        mint: mint_key,
        metadata: ctx.accounts.metadata.key(),
        name: params.name,
        symbol: params.symbol,
        decimals: params.decimals,
    });

    Ok(())
}

/// Allocate the mint account at the PDA and hand it to the token program.
///
/// The PDA may already hold lamports sent by anyone, in which case
/// `create_account` would fail. Only the rent shortfall is paid then, and the
/// account is allocated and assigned in place.
fn create_mint_account<'info>(
    ctx: &Context<'_, '_, '_, 'info, InitToken<'info>>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let mint = ctx.accounts.mint.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();
    let token_program = ctx.accounts.token_program.key();
    let required_lamports = ctx.accounts.rent.minimum_balance(SplMint::LEN);

    if mint.lamports() == 0 {
        return create_account(
            CpiContext::new_with_signer(
                system_program,
                CreateAccount {
                    from: ctx.accounts.payer.to_account_info(),
                    to: mint,
                },
                signer_seeds,
            ),
            required_lamports,
            SplMint::LEN as u64,
            &token_program,
        );
    }

    let shortfall = required_lamports.saturating_sub(mint.lamports());
    if shortfall > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: mint.clone(),
                },
            ),
            shortfall,
        )?;
    }

    allocate(
        CpiContext::new_with_signer(
            system_program.clone(),
            Allocate {
                account_to_allocate: mint.clone(),
            },
            signer_seeds,
        ),
        SplMint::LEN as u64,
    )?;

    assign(
        CpiContext::new_with_signer(
            system_program,
            Assign {
                account_to_assign: mint,
            },
            signer_seeds,
        ),
        &token_program,
    )
}
