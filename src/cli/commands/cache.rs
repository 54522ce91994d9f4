//! Cache command - inspect or clear the resolved-path cache

use crate::cache::FileCache;
use crate::cli::args::{CacheAction, CacheArgs};
use crate::cli::Settings;
use crate::error::TailwindResult;
use crate::ui::{self, UiContext};

/// Execute the cache command
pub fn execute(args: CacheArgs, settings: &Settings) -> TailwindResult<()> {
    // Opening a provisioner would download; the cache is addressed directly
    let cache = FileCache::unopened(settings.cache_dir());

    match args.action {
        CacheAction::Dir => println!("{}", cache.dir().display()),
        CacheAction::Clear => {
            let removed = cache.clear()?;
            ui::step_ok(
                &UiContext::detect(),
                &format!("Removed {} cache entries from {}", removed, cache.dir().display()),
            );
        }
    }

    Ok(())
}
