pub mod profile;
pub mod store;

// Re-export the modules here for easy import elsewhere.
pub use profile::AccountProfile;
pub use store::{AccountStore, FileAccountStore};
