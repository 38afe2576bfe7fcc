pub mod init_token;
pub mod manage_whitelist;
pub mod purchase_tokens;
pub mod withdraw_lamports;

pub use init_token::*;
pub use manage_whitelist::*;
pub use purchase_tokens::*;
pub use withdraw_lamports::*;
