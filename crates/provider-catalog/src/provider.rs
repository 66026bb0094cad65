use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::search::filter_providers;
use crate::sort::sort_providers;

/// A specific vendor/integration offering delivery for one channel.
///
/// Immutable once loaded; `id` is unique within the catalog and doubles as
/// the logo asset name and the route segment for the creation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub display_name: String,
    pub channel: Channel,
    pub doc_reference: String,
}

impl Provider {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        channel: Channel,
        doc_reference: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            channel,
            doc_reference: doc_reference.into(),
        }
    }
}

/// Per-channel provider lists with one fixed slot per [`Channel`] variant.
///
/// The fixed-size map (instead of a hash map keyed by strings) makes adding a
/// channel a compile-time event: every place that walks `Channel::ORDER`
/// keeps working, and `Channel::index` must cover the new variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    lists: [Vec<Provider>; Channel::COUNT],
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            lists: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Build a catalog by routing each provider into its channel's slot,
    /// preserving the iteration order within each channel.
    pub fn from_providers(providers: impl IntoIterator<Item = Provider>) -> Self {
        let mut catalog = Self::new();
        for provider in providers {
            catalog.push(provider);
        }
        catalog
    }

    pub fn push(&mut self, provider: Provider) {
        self.lists[provider.channel.index()].push(provider);
    }

    /// The providers of one channel, in catalog order.
    pub fn providers(&self, channel: Channel) -> &[Provider] {
        &self.lists[channel.index()]
    }

    /// Total number of providers across all channels.
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// True when every channel's list is empty.
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Channels that currently have at least one provider, in display order.
    pub fn channels_with_providers(&self) -> Vec<Channel> {
        Channel::ORDER
            .into_iter()
            .filter(|&channel| !self.providers(channel).is_empty())
            .collect()
    }

    /// All providers flattened in channel display order.
    pub fn iter(&self) -> impl Iterator<Item = &Provider> {
        Channel::ORDER
            .into_iter()
            .flat_map(|channel| self.providers(channel).iter())
    }

    /// Apply the search filter and the channel sort, always starting from
    /// `self` as the unfiltered original.
    ///
    /// The result is a per-channel subsequence of `self` reordered by each
    /// channel's priority list. Calling `refine` again on the original with
    /// the same query yields the same catalog, and an empty query restores
    /// every entry, so query edits never compound restrictions.
    pub fn refine(&self, query: &str) -> Catalog {
        let mut refined = Catalog::new();
        for channel in Channel::ORDER {
            let filtered = filter_providers(self.providers(channel), query);
            refined.lists[channel.index()] = sort_providers(channel, filtered);
        }
        refined
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
