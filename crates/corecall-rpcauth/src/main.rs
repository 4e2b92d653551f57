//! Generates the `rpcauth=` credential line a node expects in its config
//! file, plus the matching client password.
//!
//! The node stores only the salted HMAC, never the password itself; the
//! password printed here is shown once and must be saved by the operator.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use clap::Parser;
use eyre::{eyre, Result};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;

/// Generate a salted rpcauth credential for a node's config file.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Username the node will accept for RPC basic auth.
    username: String,

    /// Password to hash; a random one is generated when omitted.
    #[arg(long, env = "CORECALL_RPCAUTH_PASSWORD")]
    password: Option<String>,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    validate_username(&args.username)?;

    let salt = generate_salt();
    let password = args.password.unwrap_or_else(generate_password);
    let hmac = password_to_hmac(&salt, &password);

    println!("String to be appended to the node's config file:");
    println!("{}", rpcauth_line(&args.username, &salt, &hmac));
    println!("Your password:\n{password}");
    Ok(())
}

// The generated line is colon- and dollar-delimited, so those characters
// cannot appear in the username.
fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(eyre!("username must not be empty"));
    }
    if username.contains(':') || username.contains('$') {
        return Err(eyre!("username must not contain ':' or '$'"));
    }
    Ok(())
}

/// 16 random bytes, hex-encoded.
fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// 32 random bytes, URL-safe base64.
fn generate_password() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// HMAC-SHA256 of the password keyed by the salt string, hex-encoded.
/// The node recomputes this digest on every authentication attempt.
fn password_to_hmac(salt: &str, password: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(salt.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(password.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn rpcauth_line(username: &str, salt: &str, hmac_hex: &str) -> String {
    format!("rpcauth={username}:{salt}${hmac_hex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salt_is_32_lowercase_hex_chars() {
        let salt = generate_salt();
        assert_eq!(salt.len(), 32);
        assert!(salt.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn consecutive_salts_differ() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn generated_password_is_unpadded_urlsafe_base64() {
        let password = generate_password();
        assert_eq!(password.len(), 43);
        assert!(password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn hmac_matches_rfc_4231_test_vector() {
        // RFC 4231 test case 2: key "Jefe", short ASCII message.
        let digest = password_to_hmac("Jefe", "what do ya want for nothing?");
        assert_eq!(
            digest,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn hmac_is_deterministic_per_salt() {
        let a = password_to_hmac("00ff00ff", "secret");
        let b = password_to_hmac("00ff00ff", "secret");
        let c = password_to_hmac("ff00ff00", "secret");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn rpcauth_line_has_the_expected_shape() {
        let line = rpcauth_line("alice", "00ff", "abcd");
        assert_eq!(line, "rpcauth=alice:00ff$abcd");
    }

    #[test]
    fn usernames_with_delimiters_are_rejected() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username("ali:ce").is_err());
        assert!(validate_username("ali$ce").is_err());
    }

    #[test]
    fn cli_parses_username_and_optional_password() {
        let cli = Cli::try_parse_from(["corecall-rpcauth", "alice"]).expect("must parse");
        assert_eq!(cli.username, "alice");
        assert_eq!(cli.password, None);

        let cli = Cli::try_parse_from(["corecall-rpcauth", "alice", "--password", "hunter2"])
            .expect("must parse");
        assert_eq!(cli.password.as_deref(), Some("hunter2"));
    }
}
