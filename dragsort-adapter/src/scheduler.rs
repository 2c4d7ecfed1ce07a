use alloc::vec::Vec;

use dragsort::TickToken;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    due_ms: u64,
    seq: u64,
    token: TickToken,
}

/// A deterministic deferred-tick queue for hosts without a native timer.
///
/// The adapter forwards [`dragsort::ListHost::schedule_tick`] / `cancel_ticks` here and calls
/// `advance(now_ms)` from its frame or timer loop, delivering each returned token to
/// [`dragsort::DragController::on_scroll_tick`].
///
/// Ticks due at the same time are returned in scheduling order.
#[derive(Clone, Debug, Default)]
pub struct TickScheduler {
    now_ms: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl TickScheduler {
    pub fn new(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Queues `token` to fire `delay_ms` after the scheduler's current time.
    pub fn schedule(&mut self, delay_ms: u64, token: TickToken) {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        self.pending.push(Pending {
            due_ms,
            seq: self.next_seq,
            token,
        });
        self.next_seq = self.next_seq.wrapping_add(1);
    }

    /// Drops every pending tick for `token`.
    pub fn cancel(&mut self, token: TickToken) {
        self.pending.retain(|p| p.token != token);
    }

    /// The earliest due time, if anything is pending.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Moves the clock to `now_ms` (never backwards) and removes and returns every tick due by
    /// then, ordered by due time.
    ///
    /// Ticks scheduled while handling the returned tokens are measured from `now_ms` and are
    /// not part of this batch.
    pub fn advance(&mut self, now_ms: u64) -> Vec<TickToken> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let mut due: Vec<Pending> = Vec::new();
        self.pending.retain(|p| {
            if p.due_ms <= now {
                due.push(*p);
                false
            } else {
                true
            }
        });
        due.sort_unstable_by_key(|p| (p.due_ms, p.seq));
        due.into_iter().map(|p| p.token).collect()
    }
}
