pub mod session_store;
pub mod view_state;
