pub const METADATA_PROGRAM_PATH: &str = "../../tests/fixtures/mpl_token_metadata.so";

pub const TEST_DECIMALS: u8 = 9;
/// One whole token at `TEST_DECIMALS`
pub const ONE_TOKEN: u64 = 1_000_000_000;
