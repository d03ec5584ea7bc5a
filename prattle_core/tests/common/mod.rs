pub mod fake_transport;
pub mod mem_store;
pub mod recording;
