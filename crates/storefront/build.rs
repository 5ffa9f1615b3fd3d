//! Build script for the storefront crate.
//!
//! Computes a content hash for the stylesheet so templates can append a
//! cache-busting query parameter (`main.css?v=<hash>`).

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_path = Path::new(&manifest_dir).join("static/css/main.css");

    println!("cargo:rerun-if-changed={}", css_path.display());

    // The stylesheet may be absent in stripped-down builds; an empty hash
    // just disables cache busting.
    let Ok(content) = fs::read(&css_path) else {
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let mut hasher = Sha256::new();
    hasher.update(&content);
    let hash = format!("{:x}", hasher.finalize());
    let short_hash = hash.get(..8).unwrap_or_default();

    println!("cargo:rustc-env=CSS_HASH={short_hash}");
}
