//! Website assets built around the payload.
//!
//! The service worker caches the site under a name derived from a content
//! hash, so any change to the hashed files invalidates old caches.

use crate::config::Config;
use crate::dawg::build::{make_dawg, write_dawg};
use crate::dawg::types::Dawg;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholder replaced by the token in the service worker template
pub const HASH_PLACEHOLDER: &str = "{HASH}";

/// Hex digits kept from the digest
pub const TOKEN_LEN: usize = 16;

/// SHA-256 over the files, in order, truncated to [`TOKEN_LEN`] hex digits
pub fn asset_token(files: &[PathBuf]) -> Result<String> {
    let mut hasher = Sha256::new();
    for file in files {
        let bytes =
            fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
        hasher.update(&bytes);
    }
    let digest = format!("{:x}", hasher.finalize());
    Ok(digest[..TOKEN_LEN].to_string())
}

/// Render the service worker from its template, returning the token
pub fn make_service_worker(output: &Path, template: &Path, hash_files: &[PathBuf]) -> Result<String> {
    let token = asset_token(hash_files)?;
    let text = fs::read_to_string(template)
        .with_context(|| format!("Failed to read template {}", template.display()))?;
    let text = text.replace(HASH_PLACEHOLDER, &token);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output, text).with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(token)
}

/// Build the payload(s) and the service worker described by `config`
pub fn build_site(config: &Config, silent: bool) -> Result<(Dawg, String)> {
    if !silent {
        println!("Building from: {}", config.words.display());
    }

    let dawg = make_dawg(&config.words, &config.dawg, silent)
        .with_context(|| format!("Failed to build {}", config.dawg.display()))?;

    if let Some(package_dawg) = &config.package_dawg {
        if package_dawg != &config.dawg {
            write_dawg(&dawg, package_dawg)
                .with_context(|| format!("Failed to write {}", package_dawg.display()))?;
        }
    }

    let token = make_service_worker(
        &config.service_worker,
        &config.service_worker_template,
        &config.effective_hash_files(),
    )?;

    if !silent {
        println!("Service worker:  {} (cache {})", config.service_worker.display(), token);
    }
    Ok((dawg, token))
}
