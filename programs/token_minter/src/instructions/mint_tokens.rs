use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{mint_to, Mint, MintTo, Token, TokenAccount},
};

use crate::{constants::MINT_SEED, error::TokenMinterError, events::TokensMinted};

#[derive(Accounts)]
pub struct MintTokens<'info> {
    /// Token mint; it is its own mint authority
    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        mint::authority = mint,
    )]
    pub mint: Account<'info, Mint>,

    /// Wallet receiving the tokens
    /// CHECK: Can be any account
    pub recipient: UncheckedAccount<'info>,

    /// Recipient's associated token account, created on first use
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub destination: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub rent: Sysvar<'info, Rent>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn mint_tokens(ctx: Context<MintTokens>, amount: u64) -> Result<()> {
    // Fail here rather than inside the token program
    let supply = next_supply(ctx.accounts.mint.supply, amount)?;

    let mint_seeds: &[&[u8]] = &[MINT_SEED, &[ctx.bumps.mint]];
    let signer_seeds = &[mint_seeds];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.mint.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Minted {} to {}", amount, ctx.accounts.destination.key());

    emit!(TokensMinted {
        mint: ctx.accounts.mint.key(),
        destination: ctx.accounts.destination.key(),
        amount,
        supply,
    });

    Ok(())
}

/// Supply after minting `amount`, or `MathOverflow`
pub fn next_supply(supply: u64, amount: u64) -> Result<u64> {
    supply
        .checked_add(amount)
        .ok_or_else(|| error!(TokenMinterError::MathOverflow))
}
