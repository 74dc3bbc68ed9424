use anchor_lang::prelude::*;
use solana_sdk::signature::{Keypair, Signer};
use token_minter_test_utils::{
    assert_custom_error,
    constants::ONE_TOKEN,
    helpers::{get_mint_supply, get_token_account, get_token_balance},
    to_sdk_instruction, TestApp,
};

use crate::{
    error::TokenMinterError, instruction_builder::InstructionBuilder, tests::app_with_mint,
    utils::associated_token_address,
};

/// App where the payer holds `amount` in its associated token account
async fn funded_app(amount: u64) -> (TestApp, Pubkey, Pubkey) {
    let (mut app, mint) = app_with_mint(0).await;
    let payer_pubkey = app.payer_pubkey();

    let (instruction, owner_account) =
        InstructionBuilder::mint_tokens(&payer_pubkey, &payer_pubkey, amount);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    (app, mint, owner_account)
}

#[tokio::test]
async fn test_transfer_conserves_supply() {
    let (mut app, mint, owner_account) = funded_app(10 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let recipient = Keypair::new().pubkey();

    let (instruction, recipient_account) = InstructionBuilder::transfer_tokens(
        &payer_pubkey,
        &payer_pubkey,
        &payer_pubkey,
        &recipient,
        4 * ONE_TOKEN,
    );
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    assert_eq!(get_token_balance(&mut app, owner_account).await, 6 * ONE_TOKEN);
    assert_eq!(get_token_balance(&mut app, recipient_account).await, 4 * ONE_TOKEN);
    assert_eq!(get_mint_supply(&mut app, mint).await, 10 * ONE_TOKEN);

    let account = get_token_account(&mut app, recipient_account).await;
    assert_eq!(account.owner, recipient);
}

#[tokio::test]
async fn test_transfer_whole_balance() {
    let (mut app, _, owner_account) = funded_app(3 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let recipient = Keypair::new().pubkey();

    let (instruction, recipient_account) = InstructionBuilder::transfer_tokens(
        &payer_pubkey,
        &payer_pubkey,
        &payer_pubkey,
        &recipient,
        3 * ONE_TOKEN,
    );
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    assert_eq!(get_token_balance(&mut app, owner_account).await, 0);
    assert_eq!(get_token_balance(&mut app, recipient_account).await, 3 * ONE_TOKEN);
}

#[tokio::test]
async fn test_transfer_insufficient_funds() {
    let (mut app, _, owner_account) = funded_app(2 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let recipient = Keypair::new().pubkey();

    let (instruction, recipient_account) = InstructionBuilder::transfer_tokens(
        &payer_pubkey,
        &payer_pubkey,
        &payer_pubkey,
        &recipient,
        2 * ONE_TOKEN + 1,
    );
    let result = app.process_instruction(to_sdk_instruction(instruction)).await;

    assert_custom_error(result, TokenMinterError::InsufficientFunds);
    assert_eq!(get_token_balance(&mut app, owner_account).await, 2 * ONE_TOKEN);
    assert_eq!(get_token_balance(&mut app, recipient_account).await, 0);
}

#[tokio::test]
async fn test_transfer_by_stranger_is_unauthorized() {
    let (mut app, _, owner_account) = funded_app(2 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let stranger = Keypair::new();

    let (instruction, _) = InstructionBuilder::transfer_tokens(
        &payer_pubkey,
        &payer_pubkey,
        &stranger.pubkey(),
        &stranger.pubkey(),
        ONE_TOKEN,
    );
    let result = app
        .process_instruction_with_signers(to_sdk_instruction(instruction), &[&stranger])
        .await;

    assert_custom_error(result, TokenMinterError::Unauthorized);
    assert_eq!(get_token_balance(&mut app, owner_account).await, 2 * ONE_TOKEN);
}

#[tokio::test]
async fn test_burn_reduces_supply() {
    let (mut app, mint, owner_account) = funded_app(10 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();

    let instruction = InstructionBuilder::burn_tokens(&payer_pubkey, &payer_pubkey, 3 * ONE_TOKEN);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    assert_eq!(get_token_balance(&mut app, owner_account).await, 7 * ONE_TOKEN);
    assert_eq!(get_mint_supply(&mut app, mint).await, 7 * ONE_TOKEN);

    let instruction = InstructionBuilder::burn_tokens(&payer_pubkey, &payer_pubkey, 7 * ONE_TOKEN);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    assert_eq!(get_token_balance(&mut app, owner_account).await, 0);
    assert_eq!(get_mint_supply(&mut app, mint).await, 0);
}

#[tokio::test]
async fn test_burn_insufficient_funds() {
    let (mut app, mint, owner_account) = funded_app(ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();

    let instruction = InstructionBuilder::burn_tokens(&payer_pubkey, &payer_pubkey, ONE_TOKEN + 1);
    let result = app.process_instruction(to_sdk_instruction(instruction)).await;

    assert_custom_error(result, TokenMinterError::InsufficientFunds);
    assert_eq!(get_token_balance(&mut app, owner_account).await, ONE_TOKEN);
    assert_eq!(get_mint_supply(&mut app, mint).await, ONE_TOKEN);
}

#[tokio::test]
async fn test_approve_overwrites_previous_allowance() {
    let (mut app, _, owner_account) = funded_app(10 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let first_delegate = Keypair::new().pubkey();
    let second_delegate = Keypair::new().pubkey();

    let instruction =
        InstructionBuilder::approve_tokens(&payer_pubkey, &first_delegate, 5 * ONE_TOKEN);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    let instruction =
        InstructionBuilder::approve_tokens(&payer_pubkey, &second_delegate, ONE_TOKEN);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    let account = get_token_account(&mut app, owner_account).await;
    assert_eq!(account.delegate, Some(second_delegate).into());
    assert_eq!(account.delegated_amount, ONE_TOKEN);
    // Approving moves nothing
    assert_eq!(account.amount, 10 * ONE_TOKEN);
}

#[tokio::test]
async fn test_approve_by_non_owner_is_unauthorized() {
    let (mut app, _, owner_account) = funded_app(ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let stranger = Keypair::new();
    let (mint, _) = crate::utils::derive_mint(&crate::id());

    // The stranger signs as owner of the payer's account
    let mut instruction =
        InstructionBuilder::approve_tokens(&stranger.pubkey(), &stranger.pubkey(), ONE_TOKEN);
    let stranger_account = associated_token_address(&mint, &stranger.pubkey());
    for meta in instruction.accounts.iter_mut() {
        if meta.pubkey == stranger_account {
            meta.pubkey = owner_account;
        }
    }

    let result = app
        .process_instruction_with_signers(to_sdk_instruction(instruction), &[&stranger])
        .await;

    assert_custom_error(result, TokenMinterError::Unauthorized);
    let account = get_token_account(&mut app, owner_account).await;
    assert!(account.delegate.is_none());
}

#[tokio::test]
async fn test_delegate_burn_consumes_allowance() {
    let (mut app, mint, owner_account) = funded_app(10 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let delegate = Keypair::new();

    let instruction =
        InstructionBuilder::approve_tokens(&payer_pubkey, &delegate.pubkey(), 3 * ONE_TOKEN);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    let instruction =
        InstructionBuilder::burn_tokens(&payer_pubkey, &delegate.pubkey(), 2 * ONE_TOKEN);
    app.process_instruction_with_signers(to_sdk_instruction(instruction), &[&delegate])
        .await
        .unwrap();

    let account = get_token_account(&mut app, owner_account).await;
    assert_eq!(account.amount, 8 * ONE_TOKEN);
    assert_eq!(account.delegated_amount, ONE_TOKEN);
    assert_eq!(get_mint_supply(&mut app, mint).await, 8 * ONE_TOKEN);

    let instruction =
        InstructionBuilder::burn_tokens(&payer_pubkey, &delegate.pubkey(), 2 * ONE_TOKEN + 1);
    let result = app
        .process_instruction_with_signers(to_sdk_instruction(instruction), &[&delegate])
        .await;

    assert_custom_error(result, TokenMinterError::Unauthorized);
    assert_eq!(get_mint_supply(&mut app, mint).await, 8 * ONE_TOKEN);
}

#[tokio::test]
async fn test_revoke_removes_delegate() {
    let (mut app, _, owner_account) = funded_app(10 * ONE_TOKEN).await;
    let payer_pubkey = app.payer_pubkey();
    let delegate = Keypair::new();
    let recipient = Keypair::new().pubkey();

    let instruction =
        InstructionBuilder::approve_tokens(&payer_pubkey, &delegate.pubkey(), 5 * ONE_TOKEN);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    let instruction = InstructionBuilder::revoke_tokens(&payer_pubkey);
    app.process_instruction(to_sdk_instruction(instruction))
        .await
        .unwrap();

    let account = get_token_account(&mut app, owner_account).await;
    assert!(account.delegate.is_none());
    assert_eq!(account.delegated_amount, 0);

    let (instruction, _) = InstructionBuilder::transfer_tokens(
        &payer_pubkey,
        &payer_pubkey,
        &delegate.pubkey(),
        &recipient,
        ONE_TOKEN,
    );
    let result = app
        .process_instruction_with_signers(to_sdk_instruction(instruction), &[&delegate])
        .await;

    assert_custom_error(result, TokenMinterError::Unauthorized);
    assert_eq!(get_token_balance(&mut app, owner_account).await, 10 * ONE_TOKEN);
}
