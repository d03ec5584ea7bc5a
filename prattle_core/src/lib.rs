pub mod accounts;
pub mod command;
pub mod connection;
pub mod ui;
pub mod utils;

// re-export ergonomic entry points
pub use accounts::profile::AccountProfile;
pub use accounts::store::{AccountStore, FileAccountStore};
pub use command::CommandContext;
pub use connection::status::ConnectionStatus;
pub use connection::tcp::TcpTransport;
pub use connection::transport::Transport;
