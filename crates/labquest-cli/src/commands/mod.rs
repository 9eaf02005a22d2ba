pub mod badges;
pub mod progress;

use std::future::Future;
use std::path::Path;

use labquest_core::{JsonStore, StoreError};

/// Open the JSON store at the override directory or the platform default.
pub(crate) fn open_store(data_dir: Option<&Path>) -> Result<JsonStore, StoreError> {
    match data_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            Ok(JsonStore::with_dir(dir))
        }
        None => JsonStore::open(),
    }
}

/// Drive an engine future to completion on a current-thread runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, std::io::Error> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}
