pub mod holder;

use anchor_lang::{
    prelude::*,
    solana_program::{entrypoint::ProgramResult, program_error::ProgramError},
};
use solana_program_test::{processor, ProgramTest};
use token_minter_test_utils::{constants::TEST_DECIMALS, helpers::add_mint, TestApp};

use crate::utils::derive_mint;

// `processor!` takes a `ProcessInstruction` fn pointer, whose account slice and
// account lifetimes are independent. Anchor's `entry<'info>` takes
// `&'info [AccountInfo<'info>]`, so `processor!(crate::entry)` does not coerce.
fn process_instruction<'a, 'b, 'c, 'd>(
    program_id: &'a Pubkey,
    accounts: &'b [AccountInfo<'c>],
    data: &'d [u8],
) -> ProgramResult {
    let accounts: &'c [AccountInfo<'c>] = unsafe { std::mem::transmute(accounts) };
    crate::entry(program_id, accounts, data)
}

/// Program running natively on top of the bundled SPL programs
pub fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::default();
    program_test.prefer_bpf(false);
    program_test.add_program(
        "token_minter",
        crate::id(),
        processor!(process_instruction),
    );
    program_test
}

// Stands in for Metaplex: accepts CreateMetadataAccountV3 when the mint
// authority (third account) signed, without writing the metadata account
fn process_metadata_instruction(
    _program_id: &Pubkey,
    accounts: &[AccountInfo],
    _data: &[u8],
) -> ProgramResult {
    match accounts.get(2) {
        Some(mint_authority) if mint_authority.is_signer => Ok(()),
        _ => Err(ProgramError::MissingRequiredSignature),
    }
}

/// Program test with a native stand-in registered at the Metaplex program id
pub fn program_test_with_metadata() -> ProgramTest {
    let mut program_test = program_test();
    program_test.add_program(
        "mpl_token_metadata",
        mpl_token_metadata::ID,
        processor!(process_metadata_instruction),
    );
    program_test
}

/// App with the mint PDA already initialized at `supply`, as `init_token`
/// leaves it, without needing the metadata program
pub async fn app_with_mint(supply: u64) -> (TestApp, Pubkey) {
    let mut program_test = program_test();
    let (mint, _) = derive_mint(&crate::id());
    add_mint(&mut program_test, mint, mint, supply, TEST_DECIMALS);

    (TestApp::start(program_test).await, mint)
}
