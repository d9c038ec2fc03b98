pub mod cancel;
pub mod money;
