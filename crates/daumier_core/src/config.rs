//! Credential configuration.

use daumier_error::ConfigError;
use std::env;

/// Default Gemini model used for caption generation.
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Credentials for the three upstream APIs, built once at startup.
///
/// Construct with [`Credentials::from_env`] and pass by reference into the
/// client components. Validation reports every missing key at once so the
/// operator can fix all of them in one pass.
///
/// # Examples
///
/// ```no_run
/// use daumier_core::Credentials;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::from_env()?;
/// println!("using model {}", credentials.gemini_model());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Credentials {
    news_api_key: String,
    gemini_api_key: String,
    imgflip_username: String,
    imgflip_password: String,
    gemini_model: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Secrets stay out of logs
        f.debug_struct("Credentials")
            .field("imgflip_username", &self.imgflip_username)
            .field("gemini_model", &self.gemini_model)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Environment variable naming the news search API key.
    pub const NEWS_API_KEY: &'static str = "NEWS_API_KEY";
    /// Environment variable naming the generative model API key.
    pub const GEMINI_API_KEY: &'static str = "GEMINI_API_KEY";
    /// Environment variable naming the rendering service username.
    pub const IMGFLIP_USERNAME: &'static str = "IMGFLIP_USERNAME";
    /// Environment variable naming the rendering service password.
    pub const IMGFLIP_PASSWORD: &'static str = "IMGFLIP_PASSWORD";
    /// Optional environment variable overriding the Gemini model name.
    pub const GEMINI_MODEL: &'static str = "GEMINI_MODEL";

    /// Build credentials from the process environment.
    ///
    /// Checks each required key is present and non-empty. On failure the
    /// returned [`ConfigError`] names every missing key, not just the first.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup = |key: &'static str| {
            env::var(key)
                .ok()
                .filter(|value| !value.trim().is_empty())
        };

        let news_api_key = lookup(Self::NEWS_API_KEY);
        let gemini_api_key = lookup(Self::GEMINI_API_KEY);
        let imgflip_username = lookup(Self::IMGFLIP_USERNAME);
        let imgflip_password = lookup(Self::IMGFLIP_PASSWORD);

        let mut missing = Vec::new();
        for (key, value) in [
            (Self::NEWS_API_KEY, &news_api_key),
            (Self::GEMINI_API_KEY, &gemini_api_key),
            (Self::IMGFLIP_USERNAME, &imgflip_username),
            (Self::IMGFLIP_PASSWORD, &imgflip_password),
        ] {
            if value.is_none() {
                missing.push(key);
            }
        }

        match (news_api_key, gemini_api_key, imgflip_username, imgflip_password) {
            (Some(news), Some(gemini), Some(username), Some(password)) => Ok(Self {
                news_api_key: news,
                gemini_api_key: gemini,
                imgflip_username: username,
                imgflip_password: password,
                gemini_model: lookup(Self::GEMINI_MODEL)
                    .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            }),
            _ => Err(ConfigError::missing_keys(&missing)),
        }
    }

    /// Build credentials from explicit values, for tests and embedding.
    pub fn from_parts(
        news_api_key: impl Into<String>,
        gemini_api_key: impl Into<String>,
        imgflip_username: impl Into<String>,
        imgflip_password: impl Into<String>,
    ) -> Self {
        Self {
            news_api_key: news_api_key.into(),
            gemini_api_key: gemini_api_key.into(),
            imgflip_username: imgflip_username.into(),
            imgflip_password: imgflip_password.into(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
        }
    }

    /// API key for the news search service.
    pub fn news_api_key(&self) -> &str {
        &self.news_api_key
    }

    /// API key for the generative model service.
    pub fn gemini_api_key(&self) -> &str {
        &self.gemini_api_key
    }

    /// Username for the meme rendering service.
    pub fn imgflip_username(&self) -> &str {
        &self.imgflip_username
    }

    /// Password for the meme rendering service.
    pub fn imgflip_password(&self) -> &str {
        &self.imgflip_password
    }

    /// Gemini model used for caption generation.
    pub fn gemini_model(&self) -> &str {
        &self.gemini_model
    }

    /// Override the Gemini model name.
    pub fn with_gemini_model(mut self, model: impl Into<String>) -> Self {
        self.gemini_model = model.into();
        self
    }
}
