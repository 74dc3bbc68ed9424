use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{
    constants::MINT_SEED, error::TokenMinterError, events::TokensTransferred,
    utils::authorize_spend,
};

#[derive(Accounts)]
pub struct TransferTokens<'info> {
    #[account(
        seeds = [MINT_SEED],
        bump,
    )]
    pub mint: Account<'info, Mint>,

    /// Source token account
    #[account(
        mut,
        constraint = from.mint == mint.key() @ TokenMinterError::InvalidMint,
    )]
    pub from: Account<'info, TokenAccount>,

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
    pub to: Account<'info, TokenAccount>,

    /// Owner of `from`, or its approved delegate
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}

pub fn transfer_tokens(ctx: Context<TransferTokens>, amount: u64) -> Result<()> {
    let spender = authorize_spend(&ctx.accounts.from, &ctx.accounts.authority.key(), amount)?;

    transfer_checked(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.from.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.to.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    msg!(
        "Transferred {} from {} to {} ({:?})",
        amount,
        ctx.accounts.from.key(),
        ctx.accounts.to.key(),
        spender
    );

    emit!(TokensTransferred {
        mint: ctx.accounts.mint.key(),
        from: ctx.accounts.from.key(),
        to: ctx.accounts.to.key(),
        authority: ctx.accounts.authority.key(),
        amount,
    });

    Ok(())
}
