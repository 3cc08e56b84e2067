use crate::domain::{PatientStatus, StatusChange};
use crate::event::{AppEvent, EventSender, MountId};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Produces patient status changes over time. Called once per tick with the
/// ids of every patient on the panel.
pub trait StatusFeed: Send + 'static {
    fn tick(&mut self, patient_ids: &[u32]) -> Vec<StatusChange>;
}

impl StatusFeed for Box<dyn StatusFeed> {
    fn tick(&mut self, patient_ids: &[u32]) -> Vec<StatusChange> {
        (**self).tick(patient_ids)
    }
}

/// Each patient independently gets a uniformly drawn status (possibly the
/// same one) with probability `probability` per tick.
pub struct RandomStatusFeed {
    rng: StdRng,
    probability: f64,
}

impl RandomStatusFeed {
    pub fn new(probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            probability: probability.clamp(0.0, 1.0),
        }
    }
}

impl StatusFeed for RandomStatusFeed {
    fn tick(&mut self, patient_ids: &[u32]) -> Vec<StatusChange> {
        let mut changes = Vec::new();
        for &patient_id in patient_ids {
            if self.rng.gen_bool(self.probability) {
                if let Some(status) = PatientStatus::ALL.choose(&mut self.rng) {
                    changes.push(StatusChange {
                        patient_id,
                        status: *status,
                    });
                }
            }
        }
        changes
    }
}

/// Running feed timer. Dropping the handle cancels the timer.
pub struct FeedHandle {
    mount: MountId,
    task: JoinHandle<()>,
}

impl FeedHandle {
    pub fn mount(&self) -> MountId {
        self.mount
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        debug!("Cancelling status feed for panel mount {}", self.mount);
        self.task.abort();
    }
}

pub fn spawn_status_feed<F: StatusFeed>(
    mut feed: F,
    patient_ids: Vec<u32>,
    period: Duration,
    mount: MountId,
    events: EventSender,
) -> FeedHandle {
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; the panel starts from its seed.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let changes = feed.tick(&patient_ids);
            if changes.is_empty() {
                continue;
            }
            debug!("Panel mount {}: {} status changes", mount, changes.len());
            if events.send(AppEvent::PatientUpdates { mount, changes }).is_err() {
                break;
            }
        }
    });

    FeedHandle { mount, task }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    /// Moves every patient to `Attended` on every tick.
    struct AlwaysAttended;

    impl StatusFeed for AlwaysAttended {
        fn tick(&mut self, patient_ids: &[u32]) -> Vec<StatusChange> {
            patient_ids
                .iter()
                .map(|&patient_id| StatusChange {
                    patient_id,
                    status: PatientStatus::Attended,
                })
                .collect()
        }
    }

    #[test]
    fn probability_bounds() {
        let ids = [1, 2, 3, 4];
        let mut never = RandomStatusFeed::new(0.0, Some(7));
        assert!(never.tick(&ids).is_empty());

        let mut always = RandomStatusFeed::new(1.0, Some(7));
        let changes = always.tick(&ids);
        let touched: Vec<u32> = changes.iter().map(|c| c.patient_id).collect();
        assert_eq!(touched, ids.to_vec());
    }

    #[test]
    fn seeded_feeds_are_reproducible() {
        let ids = [1, 2, 3, 4];
        let mut a = RandomStatusFeed::new(0.3, Some(42));
        let mut b = RandomStatusFeed::new(0.3, Some(42));
        for _ in 0..20 {
            assert_eq!(a.tick(&ids), b.tick(&ids));
        }
    }

    #[test]
    fn roughly_thirty_percent_of_patients_change() {
        let ids: Vec<u32> = (0..1000).collect();
        let mut feed = RandomStatusFeed::new(0.3, Some(1));
        let changed = feed.tick(&ids).len();
        assert!((200..400).contains(&changed), "changed {}", changed);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_every_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        let _handle = spawn_status_feed(AlwaysAttended, vec![1, 2], Duration::from_secs(5), 3, tx);

        match rx.recv().await {
            Some(AppEvent::PatientUpdates { mount, changes }) => {
                assert_eq!(mount, 3);
                assert_eq!(changes.len(), 2);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_the_timer() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_status_feed(AlwaysAttended, vec![1], Duration::from_secs(5), 1, tx);
        assert!(rx.recv().await.is_some());

        drop(handle);

        // With the task aborted its sender is gone, so the channel closes
        // instead of yielding another tick.
        assert!(rx.recv().await.is_none());
    }
}
