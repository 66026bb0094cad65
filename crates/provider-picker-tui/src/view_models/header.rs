use provider_catalog::{ColorScheme, logo_path};

use crate::state::{PickerState, Selection};

/// View model for the sidebar header - presentation pre-computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderViewModel {
    pub title: String,
    pub subtitle: String,
    /// Resolved brand asset for the selected provider, keyed by color scheme
    pub logo_asset: Option<String>,
}

impl HeaderViewModel {
    /// Build view model from picker state
    pub fn from_state(picker: &PickerState, scheme: ColorScheme) -> Self {
        match &picker.selection {
            Selection::Selected(provider) => Self {
                title: provider.display_name.clone(),
                subtitle: format!(
                    "A provider instance for the {} channel",
                    provider.channel.title()
                ),
                logo_asset: Some(logo_path(&provider.id, scheme)),
            },
            Selection::NoSelection => Self {
                title: "Select a provider".to_string(),
                subtitle: "Select a provider to create an instance for a channel".to_string(),
                logo_asset: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provider_catalog::{Catalog, Channel, Provider};

    #[test]
    fn test_header_without_selection_shows_the_prompt() {
        let picker = PickerState::new(Catalog::new());
        let vm = HeaderViewModel::from_state(&picker, ColorScheme::Dark);

        assert_eq!(vm.title, "Select a provider");
        assert!(vm.logo_asset.is_none());
    }

    #[test]
    fn test_header_with_selection_resolves_the_logo_for_the_scheme() {
        let mut picker = PickerState::new(Catalog::new());
        picker.selection = Selection::Selected(Provider::new(
            "mailgun",
            "Mailgun",
            Channel::Email,
            "channels/email/mailgun",
        ));

        let vm = HeaderViewModel::from_state(&picker, ColorScheme::Light);
        assert_eq!(vm.title, "Mailgun");
        assert_eq!(vm.subtitle, "A provider instance for the Email channel");
        assert_eq!(
            vm.logo_asset.as_deref(),
            Some("static/images/providers/light/square/mailgun.svg")
        );
    }
}
