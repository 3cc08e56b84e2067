use crate::domain::Service;
use crate::error::{HospitalError, Result};
use crate::event::{AppEvent, EventSender};
use crate::sources::seed::seed_services;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub trait ServiceSource: Send + Sync + 'static {
    fn fetch(&self) -> Result<Vec<Service>>;
}

pub struct SeedServiceSource;

impl ServiceSource for SeedServiceSource {
    fn fetch(&self) -> Result<Vec<Service>> {
        Ok(seed_services())
    }
}

fn ensure_unique(services: Vec<Service>) -> Result<Vec<Service>> {
    let mut seen = HashSet::new();
    for service in &services {
        if !seen.insert(service.id) {
            return Err(HospitalError::DuplicateId {
                kind: "service",
                id: service.id,
            });
        }
    }
    Ok(services)
}

/// One-shot simulated fetch: wait `delay` without blocking, then post the
/// outcome to the UI task. There is no cancellation; if the UI is gone the
/// send fails and the result is dropped.
pub fn spawn_service_fetch(
    source: Arc<dyn ServiceSource>,
    delay: Duration,
    events: EventSender,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Loading services...");
        tokio::time::sleep(delay).await;

        let result = source.fetch().and_then(ensure_unique);
        if let Ok(services) = &result {
            debug!("Fetched {} services", services.len());
        }

        if events.send(AppEvent::ServicesLoaded(result)).is_err() {
            debug!("Service fetch completed after shutdown, result dropped");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fetch_waits_for_the_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let start = tokio::time::Instant::now();
        spawn_service_fetch(Arc::new(SeedServiceSource), Duration::from_millis(3000), tx);

        match rx.recv().await {
            Some(AppEvent::ServicesLoaded(Ok(services))) => assert_eq!(services.len(), 8),
            other => panic!("unexpected event: {:?}", other),
        }
        assert!(start.elapsed() >= Duration::from_millis(3000));
    }

    #[tokio::test(start_paused = true)]
    async fn late_completion_after_shutdown_is_a_no_op() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = spawn_service_fetch(Arc::new(SeedServiceSource), Duration::from_millis(10), tx);
        drop(rx);

        // The task must finish cleanly even though nobody is listening.
        assert!(handle.await.is_ok());
    }

    #[test]
    fn duplicate_service_ids_are_rejected() {
        let services = vec![Service::new(1, "A"), Service::new(1, "B")];
        assert_eq!(
            ensure_unique(services),
            Err(HospitalError::DuplicateId { kind: "service", id: 1 })
        );
    }
}
