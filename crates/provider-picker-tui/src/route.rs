use std::fmt;

use provider_catalog::Channel;

/// Navigation request handed to the external router when the picker exits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Continue into the creation flow for the chosen provider
    CreateIntegration {
        channel: Channel,
        provider_id: String,
    },
    /// Return to the integrations list (cancel/close)
    IntegrationsList,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::CreateIntegration {
                channel,
                provider_id,
            } => write!(f, "/integrations/create/{channel}/{provider_id}"),
            Route::IntegrationsList => write!(f, "/integrations"),
        }
    }
}
