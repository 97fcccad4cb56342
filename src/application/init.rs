//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{CollectionStore, Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new tracker at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());

    store.initialize()?;

    let config = Config::new();
    store.save_config(&config)?;

    println!("Initialized amity tracker at {}", path.display());

    Ok(())
}
