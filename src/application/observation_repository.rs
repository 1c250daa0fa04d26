// Repository trait for observation data access
use crate::domain::observation::Observation;

pub trait ObservationRepository {
    /// Load every observation, in source order
    fn load_observations(&self) -> anyhow::Result<Vec<Observation>>;

    /// Human-readable name of the source, for logs
    fn source_name(&self) -> String;
}
