use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::{fmt, str::FromStr};

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Environment {
    MainnetBeta,
    Testnet,
    Devnet,
    #[default]
    Local,
}

impl FromStr for Environment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ENV_MAINNET_BETA_SHORT_NAME | ENV_MAINNET_BETA_NAME => Ok(Environment::MainnetBeta),
            ENV_TESTNET_SHORT_NAME | ENV_TESTNET_NAME => Ok(Environment::Testnet),
            ENV_DEVNET_SHORT_NAME | ENV_DEVNET_NAME => Ok(Environment::Devnet),
            ENV_LOCALNET_SHORT_NAME | ENV_LOCALNET_NAME => Ok(Environment::Local),
            _ => Err(eyre::eyre!(
                "Invalid environment {s}, must be one of: {ENV_MAINNET_BETA_NAME}, {ENV_TESTNET_NAME}, {ENV_DEVNET_NAME}, {ENV_LOCALNET_NAME}",
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::MainnetBeta => write!(f, "{ENV_MAINNET_BETA_NAME}"),
            Environment::Testnet => write!(f, "{ENV_TESTNET_NAME}"),
            Environment::Devnet => write!(f, "{ENV_DEVNET_NAME}"),
            Environment::Local => write!(f, "{ENV_LOCALNET_NAME}"),
        }
    }
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::MainnetBeta,
        Environment::Testnet,
        Environment::Devnet,
        Environment::Local,
    ];

    pub fn from_program_id(program_id: &str) -> eyre::Result<Environment> {
        Self::ALL
            .into_iter()
            .find(|env| env.default_program_id().to_string() == program_id)
            .ok_or_else(|| eyre::eyre!("Could not match environment from Program ID: {program_id}"))
    }

    fn default_program_id(&self) -> Pubkey {
        match self {
            Environment::MainnetBeta => ENV_MAINNET_BETA_PROGRAM_ID,
            Environment::Testnet => ENV_TESTNET_PROGRAM_ID,
            Environment::Devnet => ENV_DEVNET_PROGRAM_ID,
            Environment::Local => ENV_LOCAL_PROGRAM_ID,
        }
    }

    /// Resolves the configuration for this environment. `MOVIE_REVIEW_PROGRAM_ID`, when set,
    /// replaces the program id.
    pub fn config(&self) -> eyre::Result<NetworkConfig> {
        let program_id = match std::env::var(PROGRAM_ID_ENV_VAR) {
            Ok(raw) => Pubkey::from_str(raw.trim())
                .map_err(|e| eyre::eyre!("Invalid {PROGRAM_ID_ENV_VAR}=\"{raw}\": {e}"))?,
            Err(_) => self.default_program_id(),
        };

        Ok(NetworkConfig {
            environment: *self,
            program_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    pub environment: Environment,
    pub program_id: Pubkey,
}
