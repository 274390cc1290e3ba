//! Append-only audit log of committed token events.

use isft_types::{Approval, GasRebate, TokenEvent, Transfer};

/// An event together with its position in the log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggedEvent {
    pub index: u64,
    pub event: TokenEvent,
}

type Listener = Box<dyn Fn(&LoggedEvent) + Send + Sync>;

/// Ordered record of every event emitted by committed calls.
///
/// Listeners run synchronously when events are committed and never see
/// events of a call that rolled back.
#[derive(Default)]
pub struct EventLog {
    entries: Vec<LoggedEvent>,
    listeners: Vec<Listener>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&LoggedEvent) + Send + Sync + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Append the events of one committed call, in emission order.
    pub(crate) fn commit(&mut self, events: &[TokenEvent]) {
        for event in events {
            let logged = LoggedEvent {
                index: self.entries.len() as u64,
                event: *event,
            };
            for listener in &self.listeners {
                listener(&logged);
            }
            self.entries.push(logged);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedEvent] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TokenEvent> {
        self.entries.last().map(|e| &e.event)
    }

    /// Events at or after `index`.
    pub fn since(&self, index: u64) -> &[LoggedEvent] {
        let start = usize::try_from(index).unwrap_or(usize::MAX).min(self.entries.len());
        &self.entries[start..]
    }

    pub fn transfers(&self) -> impl Iterator<Item = &Transfer> {
        self.entries.iter().filter_map(|e| e.event.as_transfer())
    }

    pub fn approvals(&self) -> impl Iterator<Item = &Approval> {
        self.entries.iter().filter_map(|e| e.event.as_approval())
    }

    pub fn rebates(&self) -> impl Iterator<Item = &GasRebate> {
        self.entries.iter().filter_map(|e| e.event.as_gas_rebate())
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("entries", &self.entries.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isft_types::{Address, U256};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    fn transfer(n: u8) -> TokenEvent {
        Transfer {
            from: Address::with_last_byte(n),
            to: Address::with_last_byte(n + 1),
            value: U256::from(n),
        }
        .into()
    }

    #[test]
    fn commit_appends_in_order() {
        let mut log = EventLog::new();
        log.commit(&[transfer(1), transfer(2)]);
        log.commit(&[transfer(3)]);

        let indices: Vec<u64> = log.entries().iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(log.last(), Some(&transfer(3)));
        assert_eq!(log.since(1).len(), 2);
        assert!(log.since(99).is_empty());
    }

    #[test]
    fn listeners_see_every_committed_event() {
        let mut log = EventLog::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        log.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        log.commit(&[transfer(1), transfer(2)]);
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn filters_by_kind() {
        let mut log = EventLog::new();
        log.commit(&[
            transfer(1),
            Approval {
                owner: Address::with_last_byte(1),
                spender: Address::with_last_byte(2),
                value: U256::from(5u64),
            }
            .into(),
            GasRebate {
                recipient: Address::with_last_byte(1),
                amount: U256::from(9u64),
            }
            .into(),
        ]);
        assert_eq!(log.transfers().count(), 1);
        assert_eq!(log.approvals().count(), 1);
        assert_eq!(log.rebates().count(), 1);
    }
}
