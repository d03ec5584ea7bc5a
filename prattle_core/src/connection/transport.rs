use async_trait::async_trait;

use crate::accounts::profile::AccountProfile;

use super::status::ConnectionStatus;

/// The seam between the command layer and the actual stream transport.
///
/// The connect calls return synchronously from the command layer's point of
/// view: the returned status says whether an attempt was *initiated*
/// (`Connecting`) or failed outright (`Disconnected`). Stream negotiation and
/// any later status changes happen inside the transport, which remains the
/// sole writer of the status afterwards.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Current connection status, read once before each dispatch.
    async fn status(&self) -> ConnectionStatus;

    /// Identifier of the current session: the account name when connected
    /// via a stored account, otherwise the bare JID.
    async fn account_name(&self) -> Option<String>;

    /// Connect with transient details. `server` of `None` means "derive the
    /// host from the JID domain"; `port` of 0 means the protocol default.
    async fn connect_with_details(
        &self,
        jid: &str,
        password: &str,
        server: Option<&str>,
        port: u16,
    ) -> ConnectionStatus;

    /// Connect using a stored account profile.
    async fn connect_with_account(&self, account: &AccountProfile) -> ConnectionStatus;

    /// Tear the current session down. Always ends in `Disconnected`.
    async fn disconnect(&self) -> ConnectionStatus;
}
