use anchor_lang::{
    prelude::*,
    solana_program::{program_option::COption, program_pack::Pack},
    system_program,
};
use anchor_spl::token::{
    spl_token::{self, state::Mint as SplMint},
    Mint, TokenAccount,
};
use solana_program_test::ProgramTest;
use solana_sdk::account::Account;

use crate::TestApp;

/// Balance of a token account; a missing account reads as zero
pub async fn get_token_balance(app: &mut TestApp, token_account: Pubkey) -> u64 {
    match app.get_account(token_account).await {
        Some(account) => match TokenAccount::try_deserialize(&mut account.data.as_slice()) {
            Ok(token_account_data) => token_account_data.amount,
            Err(_) => 0, // Account exists but isn't a valid token account
        },
        None => 0, // Account doesn't exist
    }
}

pub async fn get_token_account(app: &mut TestApp, token_account: Pubkey) -> TokenAccount {
    app.get_account_data::<TokenAccount>(token_account)
        .await
        .unwrap()
}

pub async fn get_mint_supply(app: &mut TestApp, mint: Pubkey) -> u64 {
    app.get_account_data::<Mint>(mint).await.unwrap().supply
}

/// Seed an initialized SPL mint whose mint and freeze authority is `authority`
pub fn add_mint(
    program_test: &mut ProgramTest,
    mint: Pubkey,
    authority: Pubkey,
    supply: u64,
    decimals: u8,
) {
    let mut data = vec![0; SplMint::LEN];
    SplMint {
        mint_authority: COption::Some(authority),
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: COption::Some(authority),
    }
    .pack_into_slice(&mut data);

    add_token_program_account(program_test, mint, data);
}

/// Seed a system account holding only `lamports`, as left by a plain transfer
pub fn add_lamports(program_test: &mut ProgramTest, address: Pubkey, lamports: u64) {
    program_test.add_account(
        address,
        Account {
            lamports,
            data: vec![],
            owner: system_program::ID,
            executable: false,
            rent_epoch: 0,
        },
    );
}

fn add_token_program_account(program_test: &mut ProgramTest, address: Pubkey, data: Vec<u8>) {
    program_test.add_account(
        address,
        Account {
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            owner: spl_token::id(),
            executable: false,
            rent_epoch: 0,
        },
    );
}
