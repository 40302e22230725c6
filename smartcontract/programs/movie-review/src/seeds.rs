pub const SEED_PREFIX: &[u8] = b"moviereview";
