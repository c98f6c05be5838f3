use std::io::ErrorKind;

use tracing::debug;

use crate::adb::client::file_client::AdbFileClient;
use crate::adb::errors::adb_client_error::AdbClientError;
use crate::adb::models::file_entry::FileEntry;

impl AdbFileClient {
    /// Returns the first candidate path that stats successfully.
    /// Candidates are tried strictly in the given order; callers rely
    /// on that for path priorities.
    pub async fn find_first_accessible(&self, candidates: &[&str]) -> Option<String> {
        self.find_first_matching(candidates, |_| true).await
    }

    pub async fn find_first_accessible_folder(&self, candidates: &[&str]) -> Option<String> {
        self.find_first_matching(candidates, FileEntry::is_directory).await
    }

    pub async fn find_first_accessible_regular_file(&self, candidates: &[&str]) -> Option<String> {
        self.find_first_matching(candidates, FileEntry::is_regular_file).await
    }

    async fn find_first_matching<F>(&self, candidates: &[&str], matches: F) -> Option<String>
    where
        F: Fn(&FileEntry) -> bool,
    {
        for candidate in candidates {
            match self.stat(candidate).await {
                // An all-zero record is how the server stats a path
                // that does not exist.
                Ok(Some(entry)) if entry.mode() != 0 && matches(&entry) => {
                    return Some((*candidate).to_string());
                }
                Ok(_) => {}
                Err(err) => {
                    debug!("stat {} failed while searching: {}", candidate, err);
                }
            }
        }
        None
    }

    /// Removes the pulled-files cache and everything in it.
    pub async fn clean_pulled_files(&self) -> Result<(), AdbClientError> {
        let dir = self.pulled_files_dir();
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(AdbClientError::LocalIo(format!(
                "Failed to remove {}: {}",
                dir.display(),
                err
            ))),
        }
    }
}
