//! Newsletter broadcasting.

use crate::error::{NotificationError, NotificationResult};
use crate::models::Subscriber;
use tracing::{info, instrument, warn};

/// A subscriber passed over because no provider was assigned.
///
/// `Display` renders the console notice printed during the broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSubscriber {
    pub name: String,
    pub email: String,
}

impl std::fmt::Display for SkippedSubscriber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No email provider assigned to {} ({})", self.email, self.name)
    }
}

/// Outcome of a successful broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnounceSummary {
    /// Subscribers whose mailer received the message.
    pub sent: usize,
    /// Subscribers without a provider, in broadcast order.
    pub skipped: Vec<SkippedSubscriber>,
}

/// An ordered list of subscribers that can be messaged all at once.
#[derive(Debug, Clone, Default)]
pub struct Newsletter<'r> {
    subscribers: Vec<Subscriber<'r>>,
}

impl<'r> Newsletter<'r> {
    pub fn new(subscribers: Vec<Subscriber<'r>>) -> Self {
        Self { subscribers }
    }

    pub fn add_subscriber(&mut self, subscriber: Subscriber<'r>) {
        self.subscribers.push(subscriber);
    }

    pub fn subscribers(&self) -> &[Subscriber<'r>] {
        &self.subscribers
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Send `message` to every subscriber, in order.
    ///
    /// Fails only when there is nobody to send to. Subscribers without a
    /// mailer get a notice on stdout next to the delivery lines and are
    /// skipped; the rest of the broadcast goes on.
    #[instrument(skip(self, message), fields(subscribers = self.subscribers.len()))]
    pub fn announce(&self, message: &str) -> NotificationResult<AnnounceSummary> {
        if self.subscribers.is_empty() {
            return Err(NotificationError::NoSubscribers);
        }

        let mut summary = AnnounceSummary::default();

        for subscriber in &self.subscribers {
            let Some(mailer) = subscriber.mailer else {
                let skipped = SkippedSubscriber {
                    name: subscriber.name.clone(),
                    email: subscriber.email.clone(),
                };
                warn!(
                    name = %skipped.name,
                    email = %skipped.email,
                    "No email provider assigned, skipping subscriber"
                );
                println!("{}", skipped);
                summary.skipped.push(skipped);
                continue;
            };

            mailer.send(&subscriber.email, message);
            summary.sent += 1;
        }

        info!(
            sent = summary.sent,
            skipped = summary.skipped.len(),
            "Announcement broadcast complete"
        );

        Ok(summary)
    }
}

impl<'r> FromIterator<Subscriber<'r>> for Newsletter<'r> {
    fn from_iter<I: IntoIterator<Item = Subscriber<'r>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
