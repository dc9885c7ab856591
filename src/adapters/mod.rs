mod memory;
mod nomad_http;
mod vault_http;

pub use memory::{MemoryOrchestrator, MemorySecretsStore};
pub use nomad_http::HttpNomadClient;
pub use vault_http::HttpVaultClient;
