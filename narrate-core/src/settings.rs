//! Runtime configuration from the process environment.

use std::env;

/// Environment variable holding the ElevenLabs credential. The lowercase
/// spelling is also accepted for compatibility with existing `.env` files.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
const API_KEY_ENV_LOWER: &str = "elevenlabs_api_key";

#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// ElevenLabs credential. `None` when unset or blank; the voice
    /// pipeline treats that as a recoverable condition, not a crash.
    pub api_key: Option<String>,
}

impl Settings {
    /// Load settings, reading a `.env` file first when one is present.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self {
            api_key: normalize_key(
                env::var(API_KEY_ENV)
                    .or_else(|_| env::var(API_KEY_ENV_LOWER))
                    .ok(),
            ),
        }
    }

    /// The configured key, or an empty string when there is none. The
    /// provider rejects an empty key before making any network call.
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }
}

fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_drops_blank_values() {
        assert_eq!(normalize_key(None), None);
        assert_eq!(normalize_key(Some(String::new())), None);
        assert_eq!(normalize_key(Some("   ".to_string())), None);
    }

    #[test]
    fn test_normalize_key_trims_whitespace() {
        assert_eq!(
            normalize_key(Some("  sk-secret  ".to_string())),
            Some("sk-secret".to_string())
        );
    }

    #[test]
    fn test_missing_key_reads_as_empty_string() {
        let settings = Settings::default();
        assert_eq!(settings.api_key(), "");
    }
}
