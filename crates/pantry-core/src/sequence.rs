//! Reload Sequencing
//!
//! Overlapping reloads may resolve out of order. Each reload takes a ticket
//! when its request is issued; a snapshot is applied only if no later ticket
//! has been applied already, so the most recently requested state wins.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    issued: u64,
    applied: Option<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Marks `ticket` applied; false means a newer snapshot is already in place
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        match self.applied {
            Some(last) if ticket.0 <= last => false,
            _ => {
                self.applied = Some(ticket.0);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_responses_apply() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        assert!(seq.accept(first));
        let second = seq.issue();
        assert!(seq.accept(second));
    }

    #[test]
    fn test_stale_response_rejected() {
        let mut seq = RequestSequencer::new();
        let older = seq.issue();
        let newer = seq.issue();

        assert!(seq.accept(newer));
        assert!(!seq.accept(older));
    }

    #[test]
    fn test_ticket_not_applied_twice() {
        let mut seq = RequestSequencer::new();
        let t = seq.issue();
        assert!(seq.accept(t));
        assert!(!seq.accept(t));
    }
}
