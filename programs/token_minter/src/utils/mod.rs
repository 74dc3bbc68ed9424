pub mod authority;
pub mod seeds;

pub use authority::*;
pub use seeds::*;
