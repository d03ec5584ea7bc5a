//! In-memory account store for command-level tests, with a record of every
//! lookup so tests can assert the resolver was (or was not) consulted.

use std::sync::Mutex;

use prattle_core::{AccountProfile, AccountStore};

#[derive(Default)]
pub struct MemAccountStore {
    profiles: Mutex<Vec<AccountProfile>>,
    pub lookups: Mutex<Vec<String>>,
}

impl MemAccountStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with(profiles: Vec<AccountProfile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }
}

impl AccountStore for MemAccountStore {
    fn get(&self, identifier: &str) -> Option<AccountProfile> {
        self.lookups.lock().unwrap().push(identifier.to_string());
        self.profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| {
                p.name.eq_ignore_ascii_case(identifier) || p.jid.eq_ignore_ascii_case(identifier)
            })
            .cloned()
    }

    fn list(&self) -> Vec<String> {
        let mut names = self.names();
        names.sort();
        names
    }

    fn add(&self, jid: &str) {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.name.eq_ignore_ascii_case(jid)) {
            return;
        }
        profiles.push(AccountProfile::new(jid, jid));
    }

    fn enable(&self, name: &str) -> bool {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.name == name) {
            Some(profile) => {
                profile.enabled = true;
                true
            }
            None => false,
        }
    }

    fn disable(&self, name: &str) -> bool {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.name == name) {
            Some(profile) => {
                profile.enabled = false;
                true
            }
            None => false,
        }
    }

    fn rename(&self, old: &str, new: &str) -> bool {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.name == new) {
            return false;
        }
        match profiles.iter_mut().find(|p| p.name == old) {
            Some(profile) => {
                profile.name = new.to_string();
                true
            }
            None => false,
        }
    }

    fn remove(&self, name: &str) -> bool {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.name != name);
        profiles.len() != before
    }
}
