use std::{env, fs, path::Path};

use movie_review_config::{constants::PROGRAM_ID_ENV_VAR, Environment};

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("build_constants.rs");

    // Cargo exposes enabled features to build scripts as CARGO_FEATURE_* variables.
    let environment = if env::var("CARGO_FEATURE_MAINNET_BETA").is_ok() {
        Environment::MainnetBeta
    } else if env::var("CARGO_FEATURE_TESTNET").is_ok() {
        Environment::Testnet
    } else if env::var("CARGO_FEATURE_DEVNET").is_ok() {
        Environment::Devnet
    } else {
        Environment::Local
    };

    let config = environment
        .config()
        .unwrap_or_else(|e| panic!("Unable to resolve {environment} config: {e}"));

    println!("cargo:rerun-if-env-changed={PROGRAM_ID_ENV_VAR}");
    println!("cargo:warning=Environment: {environment}");
    println!("cargo:warning=Movie Review Program ID: {}", config.program_id);

    fs::write(
        dest,
        format!(
            r#"pub const PROGRAM_ID: &str = "{}";"#,
            config.program_id
        ),
    )
    .unwrap();
}
