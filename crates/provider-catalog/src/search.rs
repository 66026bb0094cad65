//! Free-text filtering over provider display names

use crate::provider::Provider;

/// Filter a provider list by a free-text query.
///
/// Keeps providers whose display name contains the query as a
/// case-insensitive substring. The empty query returns the input unchanged
/// (same members, same order). The operation is idempotent, and callers are
/// expected to pass the *unfiltered* list every time so that shortening the
/// query can bring previously hidden entries back.
pub fn filter_providers(providers: &[Provider], query: &str) -> Vec<Provider> {
    if query.is_empty() {
        return providers.to_vec();
    }

    let needle = query.to_lowercase();
    providers
        .iter()
        .filter(|provider| provider.display_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
