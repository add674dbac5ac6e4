/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Human verification seam.
//!
//! The challenge widget is an opaque third party. All the flow needs to
//! know is whether it currently holds a pass token.

use std::fmt;

/// Opaque proof-of-humanity credential issued by the challenge widget.
#[derive(Clone, PartialEq, Eq)]
pub struct VerificationToken(String);

impl VerificationToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// `None` for an empty or whitespace-only token.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(Self(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens end up in logs via `{:?}` on the payload; keep them out.
impl fmt::Debug for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerificationToken(<{} chars>)", self.0.len())
    }
}

/// Anything that can tell whether the human check passed.
pub trait Verifier {
    fn token(&self) -> Option<VerificationToken>;
}

impl Verifier for Option<VerificationToken> {
    fn token(&self) -> Option<VerificationToken> {
        self.as_ref().filter(|t| !t.0.trim().is_empty()).cloned()
    }
}

impl<V: Verifier + ?Sized> Verifier for &V {
    fn token(&self) -> Option<VerificationToken> {
        (**self).token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank() {
        assert_eq!(VerificationToken::parse(""), None);
        assert_eq!(VerificationToken::parse("  \n"), None);
        assert_eq!(
            VerificationToken::parse(" abc ").map(|t| t.as_str().to_string()),
            Some("abc".to_string())
        );
    }

    #[test]
    fn option_verifier() {
        let none: Option<VerificationToken> = None;
        assert!(none.token().is_none());

        let blank = Some(VerificationToken::new(""));
        assert!(blank.token().is_none());

        let passed = Some(VerificationToken::new("0.abc"));
        assert_eq!(passed.token(), Some(VerificationToken::new("0.abc")));
    }

    #[test]
    fn debug_does_not_leak_token() {
        let token = VerificationToken::new("secret-value");
        assert!(!format!("{token:?}").contains("secret"));
    }
}
