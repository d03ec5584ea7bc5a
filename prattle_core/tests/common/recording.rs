//! Recording console and scripted password prompt for command-level tests.

use std::sync::Mutex;

use prattle_core::ui::{Console, PasswordPrompt};
use prattle_core::AccountProfile;

#[derive(Default)]
pub struct RecordingConsole {
    pub shown: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub accounts: Mutex<Vec<AccountProfile>>,
    pub account_lists: Mutex<Vec<Vec<String>>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn accounts(&self) -> Vec<AccountProfile> {
        self.accounts.lock().unwrap().clone()
    }

    pub fn account_lists(&self) -> Vec<Vec<String>> {
        self.account_lists.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn show(&self, text: &str) {
        self.shown.lock().unwrap().push(text.to_string());
    }

    fn show_error(&self, text: &str) {
        self.errors.lock().unwrap().push(text.to_string());
    }

    fn show_account(&self, account: &AccountProfile) {
        self.accounts.lock().unwrap().push(account.clone());
    }

    fn show_account_list(&self, names: &[String]) {
        self.account_lists.lock().unwrap().push(names.to_vec());
    }
}

/// Returns a fixed password and counts how often it was asked.
pub struct ScriptedPrompt {
    password: String,
    pub asked: Mutex<usize>,
}

impl ScriptedPrompt {
    pub fn returning(password: &str) -> Self {
        Self {
            password: password.to_string(),
            asked: Mutex::new(0),
        }
    }

    pub fn times_asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

impl PasswordPrompt for ScriptedPrompt {
    fn ask_password(&self) -> String {
        *self.asked.lock().unwrap() += 1;
        self.password.clone()
    }
}
