//! Navigation state: current folder, breadcrumb, and the active view.

use crate::models::Folder;

/// Which listing mode the workspace is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Normal folder/file browsing.
    Drive,
    /// Soft-deleted items, offering restore or permanent deletion.
    Trash,
    /// Name-search results; navigation-free.
    Search,
}

/// The scope both listing reloads must use after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingScope {
    /// Folder-tree scope: `Some(id)` for a folder, `None` for the root.
    Drive(Option<i64>),
    /// Trash scope.
    Trash,
}

/// Tracks where the user is in the folder tree.
///
/// Invariant: `breadcrumb` is always a contiguous ancestor chain ending at
/// `current_folder`; both are empty at the root and in the trash/search
/// views.
#[derive(Debug)]
pub struct NavState {
    view: ViewMode,
    current_folder: Option<Folder>,
    breadcrumb: Vec<Folder>,
    search_query: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    /// Fresh state: drive view, at the root.
    pub fn new() -> Self {
        Self {
            view: ViewMode::Drive,
            current_folder: None,
            breadcrumb: Vec::new(),
            search_query: None,
        }
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn current_folder(&self) -> Option<&Folder> {
        self.current_folder.as_ref()
    }

    pub fn breadcrumb(&self) -> &[Folder] {
        &self.breadcrumb
    }

    pub fn search_query(&self) -> Option<&str> {
        self.search_query.as_deref()
    }

    /// The scope both reloads use for the current position.
    pub fn scope(&self) -> ListingScope {
        match self.view() {
            ViewMode::Trash => ListingScope::Trash,
            _ => ListingScope::Drive(self.current_folder.as_ref().map(|f| f.id)),
        }
    }

    /// Open a folder.
    ///
    /// If the folder already appears in the breadcrumb the trail is truncated
    /// to end at its first occurrence (clicking an ancestor crumb collapses
    /// its descendants); otherwise the folder is appended.
    pub fn open_folder(&mut self, folder: Folder) -> ListingScope {
        self.view = ViewMode::Drive;
        self.search_query = None;
        if let Some(pos) = self.breadcrumb.iter().position(|f| f.id == folder.id) {
            self.breadcrumb.truncate(pos + 1);
        } else {
            self.breadcrumb.push(folder.clone());
        }
        self.current_folder = Some(folder);
        self.scope()
    }

    /// Jump to the breadcrumb element at `index`, truncating everything
    /// after it. Out-of-range indexes are ignored.
    pub fn crumb_jump(&mut self, index: usize) -> ListingScope {
        if index < self.breadcrumb.len() {
            self.breadcrumb.truncate(index + 1);
            self.current_folder = self.breadcrumb.last().cloned();
            self.view = ViewMode::Drive;
            self.search_query = None;
        }
        self.scope()
    }

    /// Step up to the parent folder (the crumb before the current one), or
    /// to the root when the breadcrumb has a single element.
    pub fn go_up(&mut self) -> ListingScope {
        match self.breadcrumb.len() {
            0 => self.scope(),
            1 => self.go_root(),
            n => self.crumb_jump(n - 2),
        }
    }

    /// Back to the drive root: empty breadcrumb, no current folder.
    pub fn go_root(&mut self) -> ListingScope {
        self.view = ViewMode::Drive;
        self.current_folder = None;
        self.breadcrumb.clear();
        self.search_query = None;
        self.scope()
    }

    /// Switch to the trash view, clearing folder navigation.
    pub fn open_trash(&mut self) -> ListingScope {
        self.view = ViewMode::Trash;
        self.current_folder = None;
        self.breadcrumb.clear();
        self.search_query = None;
        self.scope()
    }

    /// Show search results for `query`. Navigation-free; leaving search goes
    /// back to the drive root.
    pub fn show_search(&mut self, query: String) {
        self.view = ViewMode::Search;
        self.current_folder = None;
        self.breadcrumb.clear();
        self.search_query = Some(query);
    }
}
