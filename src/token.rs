use std::fmt;

/// Personal access token used to authenticate against the Kanka API.
///
/// The secret is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    access_token: String,
}

impl Token {
    /// Create a new Token
    pub fn new(access_token: impl Into<String>) -> Self {
        Token {
            access_token: access_token.into(),
        }
    }

    /// Check if a token value is present
    pub fn is_empty(&self) -> bool {
        self.access_token.trim().is_empty()
    }

    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Token::new(s)
    }
}

impl From<String> for Token {
    fn from(s: String) -> Self {
        Token::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_bearer() {
        let token = Token::new("abc123");
        assert_eq!(token.bearer(), "Bearer abc123");
        assert!(!token.is_empty());
        assert!(Token::new("  ").is_empty());
    }

    #[test]
    fn test_token_debug_redacted() {
        let token = Token::new("secret-value");
        let debug = format!("{:?}", token);
        assert!(!debug.contains("secret-value"));
        assert!(debug.contains("redacted"));
    }
}
