pub mod errors;
pub mod status;
pub mod tcp;
pub mod transport;

// Re-export the modules here for easy import elsewhere.
pub use errors::ConnectionError;
pub use status::ConnectionStatus;
pub use tcp::TcpTransport;
pub use transport::Transport;
