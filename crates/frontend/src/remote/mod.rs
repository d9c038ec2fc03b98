mod config;
mod firestore_gateway;

pub use config::StoreConfig;
pub use firestore_gateway::FirestoreGateway;
