use crate::domain::Service;
use crate::error::HospitalError;
use log::{error, info};

#[derive(Clone, Debug)]
pub struct ServiceListState {
    pub is_loading: bool,
    pub services: Option<Vec<Service>>,
}

impl Default for ServiceListState {
    fn default() -> Self {
        Self {
            is_loading: true,
            services: None,
        }
    }
}

impl ServiceListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loading always ends here; a failure is logged and leaves no data.
    pub fn finish(&mut self, result: Result<Vec<Service>, HospitalError>) {
        match result {
            Ok(services) => {
                info!("Loaded {} services", services.len());
                self.services = Some(services);
            }
            Err(e) => {
                error!("Error loading services: {}", e);
                self.services = None;
            }
        }
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state = ServiceListState::new();
        assert!(state.is_loading);
        assert!(state.services.is_none());
    }

    #[test]
    fn failure_clears_loading_without_data() {
        let mut state = ServiceListState::new();
        state.finish(Err(HospitalError::ServiceFetch("timeout".to_string())));
        assert!(!state.is_loading);
        assert!(state.services.is_none());
    }

    #[test]
    fn success_populates() {
        let mut state = ServiceListState::new();
        state.finish(Ok(vec![Service::new(1, "Cardiology")]));
        assert!(!state.is_loading);
        assert_eq!(state.services.as_ref().map(Vec::len), Some(1));
    }
}
