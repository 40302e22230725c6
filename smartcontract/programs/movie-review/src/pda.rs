use solana_program::pubkey::Pubkey;

use crate::seeds::SEED_PREFIX;

/// Derives the address of the review `owner` keeps under `title`.
///
/// The title is used as a raw seed, so it must already satisfy
/// [`crate::validation::validate_title`]; anything past the runtime's 32-byte
/// seed limit cannot be derived.
pub fn get_movie_review_pda(program_id: &Pubkey, owner: &Pubkey, title: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PREFIX, title.as_bytes(), owner.as_ref()], program_id)
}
