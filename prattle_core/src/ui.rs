use crate::accounts::profile::AccountProfile;

/// Where command outcomes are reported. The command layer never prints
/// directly; every user-visible string goes through this seam.
pub trait Console: Send + Sync {
    fn show(&self, text: &str);
    fn show_error(&self, text: &str);
    fn show_account(&self, account: &AccountProfile);
    fn show_account_list(&self, names: &[String]);
}

/// Blocking credential prompt. May suspend on user input; cancellation is
/// the UI layer's concern, not this core's.
pub trait PasswordPrompt: Send + Sync {
    fn ask_password(&self) -> String;
}
