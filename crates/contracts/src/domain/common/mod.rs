mod remote_state;

pub use remote_state::RemoteState;
