use std::fmt;

use serde::{Deserialize, Serialize};

/// Alert effect token (`alert` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Alert {
    None,
    /// Single breathe cycle.
    Select,
    /// Breathe cycles for 15 seconds.
    LSelect,
    /// A token this crate does not know yet, kept verbatim.
    Other(String),
}

impl Alert {
    pub fn from_token(token: &str) -> Self {
        match token {
            "none" => Alert::None,
            "select" => Alert::Select,
            "lselect" => Alert::LSelect,
            other => Alert::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Alert::None => "none",
            Alert::Select => "select",
            Alert::LSelect => "lselect",
            Alert::Other(token) => token,
        }
    }
}

/// Dynamic effect token (`effect` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Effect {
    None,
    ColorLoop,
    Other(String),
}

impl Effect {
    pub fn from_token(token: &str) -> Self {
        match token {
            "none" => Effect::None,
            "colorloop" => Effect::ColorLoop,
            other => Effect::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Effect::None => "none",
            Effect::ColorLoop => "colorloop",
            Effect::Other(token) => token,
        }
    }
}

/// Which attribute produced the current colour (`colormode` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorMode {
    /// Hue and saturation.
    Hs,
    /// CIE xy coordinates.
    Xy,
    /// Colour temperature.
    Ct,
    Other(String),
}

impl ColorMode {
    pub fn from_token(token: &str) -> Self {
        match token {
            "hs" => ColorMode::Hs,
            "xy" => ColorMode::Xy,
            "ct" => ColorMode::Ct,
            other => ColorMode::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ColorMode::Hs => "hs",
            ColorMode::Xy => "xy",
            ColorMode::Ct => "ct",
            ColorMode::Other(token) => token,
        }
    }
}

macro_rules! token_conversions {
    ($($ty:ident),*) => {
        $(
            impl From<String> for $ty {
                fn from(token: String) -> Self {
                    $ty::from_token(&token)
                }
            }

            impl From<&str> for $ty {
                fn from(token: &str) -> Self {
                    $ty::from_token(token)
                }
            }

            impl From<$ty> for String {
                fn from(value: $ty) -> Self {
                    value.as_str().to_string()
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

token_conversions!(Alert, Effect, ColorMode);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(Alert::from_token("lselect"), Alert::LSelect);
        assert_eq!(Effect::from_token("colorloop"), Effect::ColorLoop);
        assert_eq!(ColorMode::from_token("ct"), ColorMode::Ct);
        assert_eq!(ColorMode::Xy.as_str(), "xy");
    }

    #[test]
    fn test_unknown_tokens_are_kept() {
        let effect = Effect::from_token("sparkle");
        assert_eq!(effect, Effect::Other("sparkle".to_string()));
        assert_eq!(effect.as_str(), "sparkle");

        let mode = ColorMode::from("gradient");
        assert_eq!(mode.to_string(), "gradient");
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_value(Alert::Select).unwrap();
        assert_eq!(json, serde_json::json!("select"));

        let parsed: Effect = serde_json::from_value(serde_json::json!("prism")).unwrap();
        assert_eq!(parsed, Effect::Other("prism".to_string()));
    }
}
