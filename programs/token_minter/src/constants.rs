//! Seeds and Metaplex field limits

/// Seed of the mint PDA. The PDA is also the mint and freeze authority.
pub const MINT_SEED: &[u8] = b"mint";
/// Namespace tag Metaplex uses for metadata PDAs.
pub const METADATA_SEED: &[u8] = b"metadata";

pub const MAX_DECIMALS: u8 = 18;
pub const MAX_NAME_LENGTH: usize = 32;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_URI_LENGTH: usize = 200;
