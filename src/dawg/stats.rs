use crate::dawg::build::load_dawg;
use anyhow::{Context, Result};
use std::path::Path;

/// Display automaton statistics for a payload file
pub fn show_stats(dawg_path: &Path) -> Result<()> {
    let dawg = load_dawg(dawg_path)
        .with_context(|| format!("Failed to load {}", dawg_path.display()))?;
    let stats = dawg.stats();

    println!("DAWG Statistics");
    println!("===============");
    println!();
    println!("Payload:          {}", dawg_path.display());
    println!("States:           {}", stats.state_count);
    println!("Edges:            {}", stats.edge_count);
    println!("Accepting states: {}", stats.accepting_count);
    println!("Words:            {}", stats.word_count);

    if let Ok(meta) = std::fs::metadata(dawg_path) {
        println!();
        println!("Payload size:     {}", format_size(meta.len()));
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
