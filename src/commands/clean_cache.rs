use crate::cache;
use crate::cli::{CacheArgs, CacheSubcommand};
use crate::error::Result;

pub fn run(args: CacheArgs) -> Result<()> {
    if let Some(CacheSubcommand::Clear) = args.command {
        cache::clear_cache()?;
        println!("Cache cleared successfully.");
        return Ok(());
    }

    show_cache_stats()
}

fn show_cache_stats() -> Result<()> {
    let stats = cache::cache_stats()?;
    let cache_dir = cache::cache_dir()?;

    println!("Cache Statistics:");
    println!("  Location: {}", cache_dir.display());

    if stats.present {
        println!("  Archive: {}", cache::ARCHIVE_FILE);
        println!("  Size: {}", stats.formatted_size());
        println!("  Age: {}", stats.formatted_age());
        println!("\nRun 'appseed cache clear' to remove the cached archive.");
    } else {
        println!("\nCache is empty.");
    }

    Ok(())
}
