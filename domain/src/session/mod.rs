//! Server-assigned session identity

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque session token issued by the chat endpoint (Value Object)
///
/// Never minted locally. Empty tokens are rejected so that a blank value
/// from the server does not count as "session established".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::EmptySessionId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(SessionId::new(""), Err(DomainError::EmptySessionId));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = SessionId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.as_str(), "abc");
    }
}
