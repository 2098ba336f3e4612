//! Latest-Wins Tickets
//!
//! Only the most recently started task may commit its result. Backs the
//! debounced search box and the page fetches.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Ticket counter: a scheduled commit runs only if no newer one was
/// scheduled after it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicketGate {
    generation: u64,
}

impl TicketGate {
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Take a ticket from a gate stored in the reactive graph
pub fn take_ticket(gate: StoredValue<TicketGate>) -> u64 {
    let mut ticket = 0;
    gate.update_value(|g| ticket = g.schedule());
    ticket
}

/// Whether `ticket` is still the newest one. False once the owning
/// component is gone.
pub fn ticket_is_current(gate: StoredValue<TicketGate>, ticket: u64) -> bool {
    gate.try_with_value(|g| g.is_current(ticket)).unwrap_or(false)
}

/// Wrap `commit` so rapid calls collapse into one after `delay_ms`
pub fn debounced<F>(delay_ms: u32, commit: F) -> impl Fn(String) + Copy + 'static
where
    F: Fn(String) + Copy + 'static,
{
    let gate = StoredValue::new(TicketGate::default());
    move |value: String| {
        let ticket = take_ticket(gate);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if ticket_is_current(gate, ticket) {
                commit(value);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_commits() {
        let mut gate = TicketGate::default();
        let first = gate.schedule();
        let second = gate.schedule();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_fresh_gate_rejects_stale_ticket() {
        let gate = TicketGate::default();
        assert!(!gate.is_current(1));
    }

    #[test]
    fn test_out_of_order_results_keep_latest() {
        // Two reloads in a row; the older response lands last
        let mut gate = TicketGate::default();
        let mut applied = Vec::new();
        let older = gate.schedule();
        let newer = gate.schedule();

        for (ticket, payload) in [(newer, "after second mutation"), (older, "before")] {
            if gate.is_current(ticket) {
                applied.push(payload);
            }
        }
        assert_eq!(applied, vec!["after second mutation"]);
    }
}
