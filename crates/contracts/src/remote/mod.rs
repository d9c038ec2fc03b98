pub mod firestore;
pub mod gateway;
