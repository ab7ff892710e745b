use foldercrawl_list::{CrawlConfig, Lister, SizeUnit};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("small.txt"), "tiny").unwrap();
    fs::write(root.join("big.bin"), vec![0u8; 3 * 1024]).unwrap();
    fs::create_dir(root.join("cache")).unwrap();
    fs::write(root.join("cache/blob"), vec![1u8; 2048]).unwrap();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();

    temp
}

fn paths(listing: &foldercrawl_list::Listing) -> HashSet<String> {
    listing.entries.iter().map(|e| e.path.clone()).collect()
}

fn expected(root: &Path, names: &[&str]) -> HashSet<String> {
    names
        .iter()
        .map(|name| root.join(name).to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_shallow_crawl_lists_children() {
    let temp = create_test_tree();
    let lister = Lister::new(CrawlConfig::new(temp.path()));

    let listing = lister.crawl();

    assert_eq!(
        paths(&listing),
        expected(temp.path(), &["small.txt", "big.bin", "cache", "src"])
    );
    assert_eq!(listing.skipped, 0);
}

#[test]
fn test_recursive_crawl_lists_subtree() {
    let temp = create_test_tree();
    let config = CrawlConfig::builder()
        .root(temp.path())
        .recursive(true)
        .build()
        .unwrap();

    let listing = Lister::new(config).crawl();

    assert_eq!(
        paths(&listing),
        expected(
            temp.path(),
            &["small.txt", "big.bin", "cache", "cache/blob", "src", "src/main.rs"]
        )
    );
}

#[test]
fn test_directories_are_listed_at_fallback_size() {
    let temp = create_test_tree();
    let listing = Lister::new(CrawlConfig::new(temp.path())).crawl();

    let cache = temp.path().join("cache").to_string_lossy().into_owned();
    let entry = listing.entries.iter().find(|e| e.path == cache).unwrap();
    assert_eq!(entry.bytes, 4096);
    assert_eq!(entry.display_size(), "4kb");
}

#[test]
fn test_exclude_drops_subtree() {
    let temp = create_test_tree();
    let config = CrawlConfig::builder()
        .root(temp.path())
        .recursive(true)
        .exclude(Some(temp.path().join("cache")))
        .build()
        .unwrap();

    let listing = Lister::new(config).crawl();

    assert_eq!(
        paths(&listing),
        expected(temp.path(), &["small.txt", "big.bin", "src", "src/main.rs"])
    );
}

#[test]
fn test_unit_filter() {
    let temp = create_test_tree();
    let config = CrawlConfig::builder()
        .root(temp.path())
        .recursive(true)
        .size_unit(SizeUnit::B)
        .build()
        .unwrap();

    let listing = Lister::new(config).crawl();

    assert_eq!(
        paths(&listing),
        expected(temp.path(), &["small.txt", "src/main.rs"])
    );
}

#[test]
fn test_min_size_uses_scaled_value() {
    let temp = create_test_tree();
    let config = CrawlConfig::builder()
        .root(temp.path())
        .recursive(true)
        .size_unit(SizeUnit::KB)
        .min_size(3u64)
        .build()
        .unwrap();

    let listing = Lister::new(config).crawl();

    // big.bin is 3kb and both directories report 4kb; cache/blob is only 2kb.
    assert_eq!(
        paths(&listing),
        expected(temp.path(), &["big.bin", "cache", "src"])
    );
}

#[test]
fn test_missing_root_lists_nothing() {
    let temp = TempDir::new().unwrap();
    let listing = Lister::new(CrawlConfig::new(temp.path().join("missing"))).crawl();

    assert!(listing.is_empty());
    assert_eq!(listing.total_bytes(), 0);
}

#[cfg(unix)]
#[test]
fn test_permissions_are_reported() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let file = temp.path().join("key");
    fs::write(&file, "k").unwrap();
    fs::set_permissions(&file, fs::Permissions::from_mode(0o600)).unwrap();

    let listing = Lister::new(CrawlConfig::new(temp.path())).crawl();

    assert_eq!(listing.len(), 1);
    assert_eq!(listing.entries[0].mode, 0o600);
    assert_eq!(listing.entries[0].permissions_string(), "rw-------");
}
