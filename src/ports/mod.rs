mod orchestrator;
mod secrets;

pub use orchestrator::{JobHandle, JobSubmission, Orchestrator};
pub use secrets::SecretsStore;
