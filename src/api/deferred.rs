use std::time::Duration;

use crate::core::ChartTargetId;

/// Work deferred until layout or the chart library has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredTask {
    /// Initial pass building every bound chart.
    CreateAllCharts,
    /// Destroy-and-recreate of one chart.
    RefreshChart(ChartTargetId),
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    due: Duration,
    sequence: u64,
    task: DeferredTask,
}

/// Fixed-delay task queue on a virtual clock.
///
/// The host advances the clock from its own timer source. Tasks run no
/// earlier than their delay, in due-time then insertion order, and cannot be
/// cancelled once queued.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    now: Duration,
    next_sequence: u64,
    pending: Vec<ScheduledTask>,
}

impl DeferredQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay: Duration, task: DeferredTask) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.pending.push(ScheduledTask {
            due: self.now.saturating_add(delay),
            sequence,
            task,
        });
    }

    /// Moves the clock forward and drains every task that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<DeferredTask> {
        self.now = self.now.saturating_add(elapsed);
        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|task| task.due <= now);
        self.pending = pending;
        due.sort_by_key(|task| (task.due, task.sequence));
        due.into_iter().map(|task| task.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{DeferredQueue, DeferredTask};
    use crate::core::ChartTargetId;

    #[test]
    fn tasks_run_after_their_delay_in_due_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(Duration::from_millis(200), DeferredTask::CreateAllCharts);
        queue.schedule(
            Duration::from_millis(100),
            DeferredTask::RefreshChart(ChartTargetId::new("a")),
        );

        assert!(queue.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(
            queue.advance(Duration::from_millis(1)),
            vec![DeferredTask::RefreshChart(ChartTargetId::new("a"))]
        );
        assert_eq!(queue.len(), 1);
        assert_eq!(
            queue.advance(Duration::from_secs(1)),
            vec![DeferredTask::CreateAllCharts]
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_due_times_keep_insertion_order() {
        let mut queue = DeferredQueue::new();
        queue.schedule(
            Duration::from_millis(100),
            DeferredTask::RefreshChart(ChartTargetId::new("first")),
        );
        queue.schedule(
            Duration::from_millis(100),
            DeferredTask::RefreshChart(ChartTargetId::new("second")),
        );
        let drained = queue.advance(Duration::from_millis(100));
        assert_eq!(
            drained,
            vec![
                DeferredTask::RefreshChart(ChartTargetId::new("first")),
                DeferredTask::RefreshChart(ChartTargetId::new("second")),
            ]
        );
    }
}
