use solana_sdk::pubkey::Pubkey;

pub const ENV_MAINNET_BETA_NAME: &str = "mainnet-beta";
pub const ENV_MAINNET_BETA_SHORT_NAME: &str = "m";
pub const ENV_TESTNET_NAME: &str = "testnet";
pub const ENV_TESTNET_SHORT_NAME: &str = "t";
pub const ENV_DEVNET_NAME: &str = "devnet";
pub const ENV_DEVNET_SHORT_NAME: &str = "d";
pub const ENV_LOCALNET_NAME: &str = "localnet";
pub const ENV_LOCALNET_SHORT_NAME: &str = "l";

/// Overrides the program id of whichever environment is selected.
pub const PROGRAM_ID_ENV_VAR: &str = "MOVIE_REVIEW_PROGRAM_ID";

pub const ENV_MAINNET_BETA_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("FBm2MbKbrt9yr38W5zmR3aZhtdbCy2E4sg1xqsA7cSfo");
pub const ENV_TESTNET_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("6irfF1fEKRqFKp69BSA8qj2EJB75f2L7XT7gBijMUhLz");
pub const ENV_DEVNET_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("C72277RmBajWrKYoatRfRVF3qD9v59r5PoVMgdte424w");
pub const ENV_LOCAL_PROGRAM_ID: Pubkey =
    Pubkey::from_str_const("BcaZJEi6XqEJsjfAgnJr9rSqimCwde2H2kbaa2KLyrY4");
