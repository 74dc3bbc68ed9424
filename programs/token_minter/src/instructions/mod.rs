pub mod approve_tokens;
pub mod burn_tokens;
pub mod init_token;
pub mod mint_tokens;
pub mod transfer_tokens;

pub use approve_tokens::*;
pub use burn_tokens::*;
pub use init_token::*;
pub use mint_tokens::*;
pub use transfer_tokens::*;
