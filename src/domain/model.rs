use serde::{Deserialize, Serialize};
use std::fmt;

/// One class as returned by the remote API. The schema belongs to the server,
/// so the value is handed to callers untouched.
pub type ClassRecord = serde_json::Value;

/// Caller-supplied key of a single class. Rendered into the request path as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClassId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

macro_rules! class_id_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ClassId {
                fn from(id: $t) -> Self {
                    Self(id.to_string())
                }
            }
        )*
    };
}

class_id_from_integer!(i32, i64, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_id_is_rendered_verbatim() {
        assert_eq!(ClassId::from("42").to_string(), "42");
        assert_eq!(ClassId::from(42u64).to_string(), "42");
        assert_eq!(ClassId::from(-7i32).to_string(), "-7");
        assert_eq!(ClassId::new("algebra i").as_str(), "algebra i");
    }
}
