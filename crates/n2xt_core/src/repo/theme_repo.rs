//! Theme preference record repository.

use crate::model::theme::Theme;
use crate::repo::cart_repo::{RepoError, RepoResult};
use crate::storage::{KeyValueStore, THEME_RECORD_KEY};

/// Reads and writes the `n2xt-theme` record.
pub struct ThemeRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> ThemeRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns `Ok(None)` when no theme was saved.
    pub fn load_theme(&self) -> RepoResult<Option<Theme>> {
        match self.store.get_item(THEME_RECORD_KEY)? {
            Some(raw) => Theme::parse(&raw).map(Some).ok_or_else(|| {
                RepoError::InvalidData(format!("unknown theme value `{raw}`"))
            }),
            None => Ok(None),
        }
    }

    pub fn save_theme(&self, theme: Theme) -> RepoResult<()> {
        self.store.set_item(THEME_RECORD_KEY, theme.as_str())?;
        Ok(())
    }
}
