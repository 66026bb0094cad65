//! Logo asset path resolution

use std::fmt;

use serde::{Deserialize, Serialize};

/// Color scheme the surrounding UI renders in.
///
/// Brand assets ship one variant per scheme; the resolved path is keyed on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

impl ColorScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorScheme::Dark => "dark",
            ColorScheme::Light => "light",
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the square logo asset path for a provider.
///
/// One SVG per provider per scheme, laid out the way the integration store
/// serves them.
pub fn logo_path(provider_id: &str, scheme: ColorScheme) -> String {
    format!("static/images/providers/{scheme}/square/{provider_id}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_path_is_keyed_by_scheme() {
        assert_eq!(
            logo_path("sendgrid", ColorScheme::Dark),
            "static/images/providers/dark/square/sendgrid.svg"
        );
        assert_eq!(
            logo_path("sendgrid", ColorScheme::Light),
            "static/images/providers/light/square/sendgrid.svg"
        );
    }

    #[test]
    fn test_default_scheme_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
    }
}
