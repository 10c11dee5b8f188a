use crate::{
    domain::{
        common::{PlateLensConfig, entities::app_errors::CoreError, services::Service},
        recognition::{patterns::PatternMatcher, selector::CandidateSelector},
    },
    infrastructure::{catalog::load_embedded_catalog, latency::SimulatedModelLatency},
};

pub type PlateLensService = Service<SimulatedModelLatency>;

/// Loads the embedded catalog and wires the recognition pipeline.
///
/// Fails when the catalog is empty or inconsistent; there is no runtime
/// recovery from a bad catalog.
pub fn create_service(config: PlateLensConfig) -> Result<PlateLensService, CoreError> {
    let catalog = load_embedded_catalog()?;
    let candidate_selector = CandidateSelector::with_default_tiers(catalog.taxonomy().clone());

    Service::new(
        catalog,
        PatternMatcher::default(),
        candidate_selector,
        SimulatedModelLatency::from(&config.recognition),
    )
}

#[cfg(test)]
pub(crate) fn create_test_service() -> PlateLensService {
    use crate::domain::common::RecognitionConfig;

    create_service(PlateLensConfig {
        recognition: RecognitionConfig::without_latency(),
    })
    .unwrap()
}
