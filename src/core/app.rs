use crate::adapters::LocalStorage;
use crate::config::Settings;
use crate::core::catalogue::CatalogueService;
use crate::core::command::{self, Command};
use crate::core::store::SnapshotArticleStore;
use crate::utils::error::Result;

pub type FileCatalogue = CatalogueService<SnapshotArticleStore<LocalStorage>>;

/// Runs single commands against the catalogue file named in the settings.
#[derive(Debug, Clone)]
pub struct CatalogueApp {
    settings: Settings,
}

impl CatalogueApp {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loads the catalogue afresh; nothing is cached between commands.
    pub fn open(&self) -> Result<FileCatalogue> {
        let storage = LocalStorage::new(&self.settings.catalogue_file)
            .with_atomic_writes(self.settings.atomic_writes);
        Ok(CatalogueService::new(SnapshotArticleStore::load(storage)?))
    }

    pub fn run(&self, command: Command) -> Result<String> {
        let name = command.name();
        let mut catalogue = self.open()?;
        let output = command::execute(&mut catalogue, command, &self.settings.rules)?;
        tracing::info!(
            "'{}' completed on {}",
            name,
            self.settings.catalogue_file.display()
        );
        Ok(output)
    }
}
