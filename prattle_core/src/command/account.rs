use log::warn;

use crate::connection::status::ConnectionStatus;

use super::CommandContext;

/// Parsed `account` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountCmd<'a> {
    /// Bare `account`: show the current account when connected.
    Current,
    List,
    Show(&'a str),
    Add(&'a str),
    Enable(&'a str),
    Disable(&'a str),
    Rename(&'a str, &'a str),
}

impl<'a> AccountCmd<'a> {
    /// `None` means the tokens do not form a subcommand and the caller
    /// should echo its usage text.
    pub fn parse(args: &[&'a str]) -> Option<Self> {
        match *args {
            [] => Some(Self::Current),
            ["list"] => Some(Self::List),
            ["show", name] => Some(Self::Show(name)),
            ["add", jid] => Some(Self::Add(jid)),
            ["enable", name] => Some(Self::Enable(name)),
            ["disable", name] => Some(Self::Disable(name)),
            ["rename", old, new] => Some(Self::Rename(old, new)),
            _ => None,
        }
    }
}

impl CommandContext<'_> {
    /// Dispatch one `account` invocation.
    ///
    /// Only the bare form consults the connection status; the subcommands
    /// operate on the store alone.
    pub async fn cmd_account(&self, args: &[&str], usage: &str) -> bool {
        let Some(cmd) = AccountCmd::parse(args) else {
            self.show_usage(usage);
            return true;
        };

        match cmd {
            AccountCmd::Current => {
                if self.transport.status().await == ConnectionStatus::Connected {
                    self.show_current_account().await;
                } else {
                    self.show_usage(usage);
                }
            }
            AccountCmd::List => {
                self.console.show_account_list(&self.store.list());
            }
            AccountCmd::Show(name) => match self.store.get(name) {
                Some(account) => self.console.show_account(&account),
                None => {
                    self.console.show("No such account.");
                    self.console.show("");
                }
            },
            AccountCmd::Add(jid) => {
                self.store.add(jid);
                self.console.show("Account created.");
                self.console.show("");
            }
            AccountCmd::Enable(name) => {
                if self.store.enable(name) {
                    self.console.show("Account enabled.");
                } else {
                    self.console.show(&format!("No such account: {name}"));
                }
                self.console.show("");
            }
            AccountCmd::Disable(name) => {
                if self.store.disable(name) {
                    self.console.show("Account disabled.");
                } else {
                    self.console.show(&format!("No such account: {name}"));
                }
                self.console.show("");
            }
            AccountCmd::Rename(old, new) => {
                if self.store.rename(old, new) {
                    self.console.show("Account renamed.");
                } else {
                    self.console.show(&format!(
                        "Either account {old} doesn't exist, or account {new} already exists."
                    ));
                }
                self.console.show("");
            }
        }
        true
    }

    async fn show_current_account(&self) {
        let Some(name) = self.transport.account_name().await else {
            warn!("Connected but the transport reports no account name");
            return;
        };
        match self.store.get(&name) {
            Some(account) => self.console.show_account(&account),
            None => warn!("Connected account '{}' not found in the store", name),
        }
    }
}
