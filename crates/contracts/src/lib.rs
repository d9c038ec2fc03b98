pub mod domain;
pub mod remote;
pub mod usecases;
