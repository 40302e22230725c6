#![allow(unexpected_cfgs)]

#[cfg(any(not(feature = "no-entrypoint"), test))]
pub mod entrypoint;

pub mod error;
pub mod instructions;
pub mod pda;
pub mod processors;
pub mod seeds;
mod serializer;
pub mod state;
pub mod validation;

use solana_program::pubkey::Pubkey;

mod build_constants {
    include!(concat!(env!("OUT_DIR"), "/build_constants.rs"));
}

/// Program id of the environment selected at build time.
pub const ID: Pubkey = Pubkey::from_str_const(build_constants::PROGRAM_ID);

pub fn id() -> Pubkey {
    ID
}

pub fn check_id(id: &Pubkey) -> bool {
    id == &ID
}
