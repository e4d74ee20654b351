//! API credential resolution.

use fc_domain::config::ProviderConfig;
use fc_domain::{Error, Result};

/// Resolve the API key from the provider configuration.
///
/// Precedence:
/// 1. `api_key` field (plaintext — warn)
/// 2. `api_key_env` environment variable
/// 3. `keychain_service` + `keychain_account` → OS keychain via `keyring`
/// 4. Error
pub fn resolve_api_key(provider: &ProviderConfig) -> Result<String> {
    // 1. Plaintext key (warn the user)
    if let Some(ref key) = provider.api_key {
        if !key.trim().is_empty() {
            tracing::warn!(
                "API key loaded from plaintext config field 'api_key' — \
                 prefer 'api_key_env' or the keychain fields instead"
            );
            return Ok(key.clone());
        }
    }

    // 2. Env var
    if let Ok(val) = std::env::var(&provider.api_key_env) {
        if !val.trim().is_empty() {
            return Ok(val);
        }
    }

    // 3. OS keychain via service + account
    if let (Some(ref service), Some(ref account)) =
        (&provider.keychain_service, &provider.keychain_account)
    {
        match resolve_from_keychain(service, account) {
            Ok(secret) => return Ok(secret),
            Err(e) => {
                tracing::warn!(
                    service = %service,
                    account = %account,
                    error = %e,
                    "keychain lookup failed"
                );
            }
        }
    }

    // 4. No key found
    Err(Error::Auth(format!(
        "no API key configured: set 'api_key', the '{}' environment \
         variable, or 'keychain_service'+'keychain_account'",
        provider.api_key_env
    )))
}

/// Try to read a secret from the OS keychain.
///
/// Uses the `keyring` crate which wraps platform-native credential stores
/// (macOS Keychain, Windows Credential Manager, Linux Secret Service).
/// Returns an error on headless systems where no keychain daemon runs.
pub fn resolve_from_keychain(service: &str, account: &str) -> Result<String> {
    let entry = keyring::Entry::new(service, account)
        .map_err(|e| Error::Auth(format!("keyring entry creation failed: {e}")))?;
    entry
        .get_password()
        .map_err(|e| Error::Auth(format!("keyring get_password failed: {e}")))
}
