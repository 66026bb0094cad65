//! Channel-specific provider ordering

use crate::channel::Channel;
use crate::provider::Provider;

/// Provider ids pinned to the top of their channel's list, in pin order.
///
/// Channels without a priority list (currently in-app) fall back to the
/// incoming order unchanged.
pub fn priority_providers(channel: Channel) -> &'static [&'static str] {
    match channel {
        Channel::Email => &["sendgrid", "mailgun"],
        Channel::Sms => &["twilio", "nexmo"],
        Channel::Push => &["fcm"],
        Channel::Chat => &["slack"],
        Channel::InApp => &[],
    }
}

/// Order a channel's providers so its priority ids come first (in priority
/// order), followed by the remaining providers in their prior relative order.
///
/// Priority ids missing from the list are simply skipped; a channel with no
/// priority list returns the list as-is.
pub fn sort_providers(channel: Channel, providers: Vec<Provider>) -> Vec<Provider> {
    let priority = priority_providers(channel);
    if priority.is_empty() {
        return providers;
    }

    let rank = |provider: &Provider| priority.iter().position(|id| *id == provider.id);

    let mut pinned = Vec::new();
    let mut rest = Vec::new();
    for provider in providers {
        if rank(&provider).is_some() {
            pinned.push(provider);
        } else {
            rest.push(provider);
        }
    }

    // Stable sort: pinned entries follow the priority list's order, `rest`
    // keeps its incoming order.
    pinned.sort_by_key(|provider| rank(provider).unwrap_or(usize::MAX));
    pinned.extend(rest);
    pinned
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: &str, channel: Channel) -> Provider {
        Provider::new(id, id.to_uppercase(), channel, format!("channels/{channel}/{id}"))
    }

    #[test]
    fn test_priority_ids_come_first_in_priority_order() {
        let providers = vec![
            provider("postmark", Channel::Email),
            provider("mailgun", Channel::Email),
            provider("mailjet", Channel::Email),
            provider("sendgrid", Channel::Email),
        ];

        let sorted = sort_providers(Channel::Email, providers);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["sendgrid", "mailgun", "postmark", "mailjet"]);
    }

    #[test]
    fn test_non_priority_entries_keep_relative_order() {
        let providers = vec![
            provider("termii", Channel::Sms),
            provider("plivo", Channel::Sms),
            provider("telnyx", Channel::Sms),
        ];

        let sorted = sort_providers(Channel::Sms, providers.clone());
        assert_eq!(sorted, providers);
    }

    #[test]
    fn test_channel_without_priority_list_is_unchanged() {
        let providers = vec![
            provider("feed", Channel::InApp),
            provider("bell", Channel::InApp),
        ];

        let sorted = sort_providers(Channel::InApp, providers.clone());
        assert_eq!(sorted, providers);
    }

    #[test]
    fn test_missing_priority_ids_are_skipped() {
        // Only one of the two SMS priority ids is present.
        let providers = vec![
            provider("plivo", Channel::Sms),
            provider("nexmo", Channel::Sms),
        ];

        let sorted = sort_providers(Channel::Sms, providers);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["nexmo", "plivo"]);
    }

    #[test]
    fn test_sorting_an_already_sorted_list_is_stable() {
        let providers = vec![
            provider("twilio", Channel::Sms),
            provider("nexmo", Channel::Sms),
            provider("sns", Channel::Sms),
        ];

        let once = sort_providers(Channel::Sms, providers);
        let twice = sort_providers(Channel::Sms, once.clone());
        assert_eq!(once, twice);
    }
}
