use crate::connection::status::ConnectionStatus;

use super::CommandContext;

impl CommandContext<'_> {
    /// Tear the current session down and report it.
    pub async fn cmd_disconnect(&self) -> bool {
        if self.transport.status().await == ConnectionStatus::Connected {
            let name = self.transport.account_name().await.unwrap_or_default();
            self.transport.disconnect().await;
            self.console.show(&format!("{name} logged out successfully."));
        } else {
            self.console.show("You are not currently connected.");
        }
        true
    }
}
