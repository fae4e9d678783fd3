//! Common test utilities for integration tests
//!
//! Provides shared fixtures used across multiple integration test files.

#![allow(dead_code)]

use guildwarden::RawEnvironment;

pub const TOKEN: &str = "test-discord-token";
pub const CLIENT: &str = "123456789012345678";

/// An environment holding only the two required variables
pub fn minimal_env() -> RawEnvironment {
    RawEnvironment::new()
        .with("DISCORD_TOKEN", TOKEN)
        .with("CLIENT_ID", CLIENT)
}

/// [`minimal_env`] plus the given variables
pub fn env_with(vars: &[(&str, &str)]) -> RawEnvironment {
    let mut env = minimal_env();
    for (key, value) in vars {
        env.set(*key, *value);
    }
    env
}
