//! Built-in provider metadata
//!
//! The static catalog the picker is seeded with. Kept in one place so the
//! lists read like configuration; ids double as logo asset names and route
//! segments, doc references point into the integration handbook.

use crate::channel::Channel;
use crate::provider::{Catalog, Provider};

/// One metadata row: (id, display name, doc reference).
type Row = (&'static str, &'static str, &'static str);

const IN_APP_PROVIDERS: &[Row] = &[(
    "notification-center",
    "Notification Center",
    "channels/in-app/notification-center",
)];

const EMAIL_PROVIDERS: &[Row] = &[
    ("mailgun", "Mailgun", "channels/email/mailgun"),
    ("mailjet", "Mailjet", "channels/email/mailjet"),
    ("mandrill", "Mandrill", "channels/email/mandrill"),
    ("outlook365", "Outlook 365", "channels/email/outlook365"),
    ("postmark", "Postmark", "channels/email/postmark"),
    ("resend", "Resend", "channels/email/resend"),
    ("sendgrid", "SendGrid", "channels/email/sendgrid"),
    ("sendinblue", "Sendinblue", "channels/email/sendinblue"),
    ("ses", "Amazon SES", "channels/email/ses"),
    ("sparkpost", "SparkPost", "channels/email/sparkpost"),
];

const CHAT_PROVIDERS: &[Row] = &[
    ("discord", "Discord", "channels/chat/discord"),
    ("mattermost", "Mattermost", "channels/chat/mattermost"),
    ("msteams", "Microsoft Teams", "channels/chat/msteams"),
    ("rocket-chat", "Rocket.Chat", "channels/chat/rocket-chat"),
    ("slack", "Slack", "channels/chat/slack"),
];

const PUSH_PROVIDERS: &[Row] = &[
    ("apns", "APNs", "channels/push/apns"),
    ("expo", "Expo Push", "channels/push/expo"),
    ("fcm", "Firebase Cloud Messaging", "channels/push/fcm"),
    ("one-signal", "OneSignal", "channels/push/one-signal"),
];

const SMS_PROVIDERS: &[Row] = &[
    ("gupshup", "Gupshup", "channels/sms/gupshup"),
    ("nexmo", "Nexmo", "channels/sms/nexmo"),
    ("plivo", "Plivo", "channels/sms/plivo"),
    ("sms77", "Sms77", "channels/sms/sms77"),
    ("sns", "Amazon SNS", "channels/sms/sns"),
    ("telnyx", "Telnyx", "channels/sms/telnyx"),
    ("termii", "Termii", "channels/sms/termii"),
    ("twilio", "Twilio", "channels/sms/twilio"),
];

fn rows(channel: Channel, rows: &'static [Row]) -> impl Iterator<Item = Provider> {
    rows.iter()
        .map(move |&(id, display_name, doc_reference)| {
            Provider::new(id, display_name, channel, doc_reference)
        })
}

/// The full built-in catalog, one list per channel.
pub fn builtin_catalog() -> Catalog {
    Catalog::from_providers(
        rows(Channel::InApp, IN_APP_PROVIDERS)
            .chain(rows(Channel::Email, EMAIL_PROVIDERS))
            .chain(rows(Channel::Chat, CHAT_PROVIDERS))
            .chain(rows(Channel::Push, PUSH_PROVIDERS))
            .chain(rows(Channel::Sms, SMS_PROVIDERS)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::priority_providers;
    use std::collections::HashSet;

    #[test]
    fn test_every_channel_has_providers() {
        let catalog = builtin_catalog();
        for channel in Channel::ORDER {
            assert!(
                !catalog.providers(channel).is_empty(),
                "channel {channel} has no providers"
            );
        }
    }

    #[test]
    fn test_ids_are_unique_across_the_catalog() {
        let catalog = builtin_catalog();
        let mut seen = HashSet::new();
        for provider in catalog.iter() {
            assert!(seen.insert(provider.id.clone()), "duplicate id {}", provider.id);
        }
    }

    #[test]
    fn test_providers_carry_their_channel() {
        let catalog = builtin_catalog();
        for channel in Channel::ORDER {
            for provider in catalog.providers(channel) {
                assert_eq!(provider.channel, channel);
            }
        }
    }

    #[test]
    fn test_priority_ids_exist_in_their_channel() {
        let catalog = builtin_catalog();
        for channel in Channel::ORDER {
            for id in priority_providers(channel) {
                assert!(
                    catalog.providers(channel).iter().any(|p| p.id == *id),
                    "priority id {id} missing from {channel}"
                );
            }
        }
    }

    #[test]
    fn test_doc_references_are_filled_in() {
        for provider in builtin_catalog().iter() {
            assert!(!provider.doc_reference.is_empty());
        }
    }
}
