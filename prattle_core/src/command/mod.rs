pub mod account;
pub mod connect;
pub mod disconnect;
pub mod params;

// Re-export the modules here for easy import elsewhere.
pub use account::AccountCmd;
pub use params::{ConnectionParams, ParamError};

use crate::accounts::store::AccountStore;
use crate::connection::transport::Transport;
use crate::ui::{Console, PasswordPrompt};

/// Collaborators shared by every command.
///
/// Each command invocation runs to completion before the next one is
/// processed; the context holds read-only borrows and introduces no
/// parallelism of its own. Every `cmd_*` returns `true`: a command always
/// succeeds as a dispatch, and failures are reported through the console.
pub struct CommandContext<'a> {
    pub store: &'a dyn AccountStore,
    pub transport: &'a dyn Transport,
    pub console: &'a dyn Console,
    pub prompt: &'a dyn PasswordPrompt,
}

impl<'a> CommandContext<'a> {
    pub fn new(
        store: &'a dyn AccountStore,
        transport: &'a dyn Transport,
        console: &'a dyn Console,
        prompt: &'a dyn PasswordPrompt,
    ) -> Self {
        Self {
            store,
            transport,
            console,
            prompt,
        }
    }

    pub(crate) fn show_usage(&self, usage: &str) {
        self.console.show(&format!("Usage: {usage}"));
    }
}
