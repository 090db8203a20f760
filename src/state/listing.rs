//! Listing state: the folder and file collections for the active scope.
//!
//! Reloads run concurrently and are never cancelled, so each reload is
//! stamped with a generation number. Responses carrying an older stamp are
//! discarded instead of overwriting a newer listing.

use crate::models::{FileEntry, Folder};

/// The two parallel collections scoped to the active view, plus the
/// bookkeeping to keep late responses from clobbering them.
#[derive(Debug, Default)]
pub struct ListingState {
    folders: Vec<Folder>,
    files: Vec<FileEntry>,
    loading_folders: bool,
    loading_files: bool,
    generation: u64,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn folders(&self) -> &[Folder] {
        &self.folders
    }

    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    pub fn is_loading(&self) -> bool {
        self.loading_folders || self.loading_files
    }

    /// Start a new reload of both collections and return its stamp.
    ///
    /// The previous contents stay visible until fresh data arrives; on
    /// failure they are kept as-is.
    pub fn begin_reload(&mut self) -> u64 {
        self.generation += 1;
        self.loading_folders = true;
        self.loading_files = true;
        self.generation
    }

    /// Accept a folder listing if it belongs to the newest reload.
    /// Returns false for a stale response, which is dropped.
    pub fn accept_folders(&mut self, generation: u64, folders: Vec<Folder>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.folders = folders;
        self.loading_folders = false;
        true
    }

    /// Accept a file listing if it belongs to the newest reload.
    pub fn accept_files(&mut self, generation: u64, files: Vec<FileEntry>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.files = files;
        self.loading_files = false;
        true
    }

    /// Record a failed folder reload. The stale contents remain untouched.
    /// Returns false for an out-of-date failure, which is ignored entirely.
    pub fn fail_folders(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading_folders = false;
        true
    }

    /// Record a failed file reload.
    pub fn fail_files(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading_files = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: i64, name: &str) -> Folder {
        Folder {
            id,
            name: name.to_string(),
            parent_id: None,
        }
    }

    fn file(id: i64, name: &str) -> FileEntry {
        FileEntry {
            id,
            name: name.to_string(),
            folder_id: None,
            size: None,
            created_at: None,
        }
    }

    #[test]
    fn test_accept_current_generation() {
        let mut listing = ListingState::new();
        let generation = listing.begin_reload();
        assert!(listing.is_loading());

        assert!(listing.accept_folders(generation, vec![folder(1, "A")]));
        assert!(listing.accept_files(generation, vec![file(2, "a.txt")]));
        assert!(!listing.is_loading());
        assert_eq!(listing.folders().len(), 1);
        assert_eq!(listing.files().len(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        // Two navigations in quick succession: the older response must not
        // overwrite the newer listing, regardless of arrival order.
        let mut listing = ListingState::new();
        let first = listing.begin_reload();
        let second = listing.begin_reload();

        assert!(listing.accept_folders(second, vec![folder(2, "newer")]));
        assert!(!listing.accept_folders(first, vec![folder(1, "older")]));

        assert_eq!(listing.folders().len(), 1);
        assert_eq!(listing.folders()[0].name, "newer");
    }

    #[test]
    fn test_failure_keeps_previous_contents() {
        let mut listing = ListingState::new();
        let generation = listing.begin_reload();
        listing.accept_folders(generation, vec![folder(1, "A")]);
        listing.accept_files(generation, vec![file(2, "a.txt")]);

        let next = listing.begin_reload();
        assert!(listing.fail_folders(next));
        assert!(listing.fail_files(next));

        assert_eq!(listing.folders().len(), 1);
        assert_eq!(listing.files().len(), 1);
        assert!(!listing.is_loading());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut listing = ListingState::new();
        let first = listing.begin_reload();
        let _second = listing.begin_reload();

        // The old reload failing must not clear the newer reload's spinner.
        assert!(!listing.fail_folders(first));
        assert!(listing.is_loading());
    }
}
