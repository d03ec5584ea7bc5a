use log::info;

use crate::connection::status::ConnectionStatus;

use super::params::{ConnectionParams, ParamError};
use super::CommandContext;

impl CommandContext<'_> {
    /// Drive one connection attempt.
    ///
    /// Reads the transport status exactly once; any non-idle state rejects
    /// the attempt before the arguments are even looked at. On an accepted
    /// attempt there is exactly one transport dispatch, and the password is
    /// prompted for only when no stored one is available.
    pub async fn cmd_connect(&self, args: &[&str], usage: &str) -> bool {
        if !self.transport.status().await.is_idle() {
            self.console
                .show("You are either connected already, or a login is in process.");
            return true;
        }

        let Some((&target, properties)) = args.split_first() else {
            self.show_usage(usage);
            self.console.show("");
            return true;
        };

        let params = match ConnectionParams::parse(properties) {
            Ok(params) => params,
            Err(ParamError::Usage) => {
                self.show_usage(usage);
                self.console.show("");
                return true;
            }
            Err(e) => {
                self.console.show(&e.to_string());
                self.console.show("");
                return true;
            }
        };

        let target = target.to_lowercase();
        let (jid, result) = match self.store.get(&target) {
            Some(mut account) => {
                self.console.show(&format!(
                    "Connecting with account {} as {}",
                    account.name,
                    account.full_jid()
                ));
                if account.password.is_none() {
                    account.password = Some(self.prompt.ask_password());
                }
                let jid = account.jid.clone();
                (jid, self.transport.connect_with_account(&account).await)
            }
            None => {
                self.console.show(&format!("Connecting as {target}"));
                let password = self.prompt.ask_password();
                let result = self
                    .transport
                    .connect_with_details(&target, &password, params.server.as_deref(), params.port)
                    .await;
                (target, result)
            }
        };

        info!("Connect attempt for '{}' dispatched: {}", jid, result);
        if result == ConnectionStatus::Disconnected {
            self.console
                .show_error(&format!("Connection attempt for {jid} failed."));
        }
        true
    }
}
