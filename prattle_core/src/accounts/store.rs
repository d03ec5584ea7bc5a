use std::{fs, io, path::PathBuf};

use directories::ProjectDirs;
use log::warn;
use serde_json::Error as SerdeError;

use super::profile::AccountProfile;

/// Read/mutate surface of the account store as the command layer sees it.
///
/// Mutations report success as a plain bool; the command layer turns a
/// `false` into its user-facing "no such account" style messages. `get`
/// resolves case-insensitively against stored account names and bare JIDs,
/// so callers pass an already lower-cased identifier and a miss means
/// "treat it as a raw JID".
pub trait AccountStore: Send + Sync {
    fn get(&self, identifier: &str) -> Option<AccountProfile>;
    fn list(&self) -> Vec<String>;
    fn add(&self, jid: &str);
    fn enable(&self, name: &str) -> bool;
    fn disable(&self, name: &str) -> bool;
    fn rename(&self, old: &str, new: &str) -> bool;
    fn remove(&self, name: &str) -> bool;
}

/// One JSON file per account under the platform config dir.
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    dir: PathBuf,
}

impl FileAccountStore {
    /// `~/.config/prattle/accounts` on Linux, `%APPDATA%\prattle\accounts`
    /// on Windows, etc.
    pub fn new() -> io::Result<Self> {
        let proj = ProjectDirs::from("", "", "prattle")
            .ok_or_else(|| io::Error::other("Unable to locate config dir"))?;
        Self::with_dir(proj.config_dir().join("accounts"))
    }

    /// Open a store rooted at an explicit directory.
    pub fn with_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn file_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Every stored profile (skips malformed files with a warning).
    fn load_all(&self) -> Vec<AccountProfile> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Could not read account dir {:?}: {}", self.dir, e);
                return Vec::new();
            }
        };
        let mut out = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if !path.extension().is_some_and(|e| e == "json") {
                continue;
            }
            match fs::File::open(&path)
                .and_then(|f| serde_json::from_reader(f).map_err(SerdeError::into))
            {
                Ok(profile) => out.push(profile),
                Err(e) => warn!("Could not read account file {:?}: {}", path, e),
            }
        }
        out
    }

    /// Create or overwrite a profile.
    fn save(&self, profile: &AccountProfile) -> io::Result<()> {
        let file = fs::File::create(self.file_for(&profile.name))?;
        serde_json::to_writer_pretty(file, profile).map_err(SerdeError::into)
    }

    fn update<F>(&self, name: &str, mutate: F) -> bool
    where
        F: FnOnce(&mut AccountProfile),
    {
        let Some(mut profile) = self.find_by_name(name) else {
            return false;
        };
        mutate(&mut profile);
        match self.save(&profile) {
            Ok(()) => true,
            Err(e) => {
                warn!("Could not save account '{}': {}", profile.name, e);
                false
            }
        }
    }

    fn find_by_name(&self, name: &str) -> Option<AccountProfile> {
        self.load_all()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

impl AccountStore for FileAccountStore {
    fn get(&self, identifier: &str) -> Option<AccountProfile> {
        self.load_all().into_iter().find(|p| {
            p.name.eq_ignore_ascii_case(identifier) || p.jid.eq_ignore_ascii_case(identifier)
        })
    }

    fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.load_all().into_iter().map(|p| p.name).collect();
        names.sort();
        names
    }

    fn add(&self, jid: &str) {
        if self.get(jid).is_some() {
            return;
        }
        let profile = AccountProfile::new(jid, jid);
        if let Err(e) = self.save(&profile) {
            warn!("Could not create account '{}': {}", jid, e);
        }
    }

    fn enable(&self, name: &str) -> bool {
        self.update(name, |p| p.enabled = true)
    }

    fn disable(&self, name: &str) -> bool {
        self.update(name, |p| p.enabled = false)
    }

    fn rename(&self, old: &str, new: &str) -> bool {
        let Some(mut profile) = self.find_by_name(old) else {
            return false;
        };
        if self.find_by_name(new).is_some() {
            return false;
        }
        let old_file = self.file_for(&profile.name);
        profile.name = new.to_string();
        if let Err(e) = self.save(&profile) {
            warn!("Could not save renamed account '{}': {}", new, e);
            return false;
        }
        if let Err(e) = fs::remove_file(&old_file) {
            warn!("Could not remove old account file {:?}: {}", old_file, e);
        }
        true
    }

    fn remove(&self, name: &str) -> bool {
        let Some(profile) = self.find_by_name(name) else {
            return false;
        };
        match fs::remove_file(self.file_for(&profile.name)) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => false,
            Err(e) => {
                warn!("Could not remove account '{}': {}", name, e);
                false
            }
        }
    }
}
