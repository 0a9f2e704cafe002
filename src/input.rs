use std::collections::HashSet;
use std::io::BufRead;

use anyhow::{Context, Result};

/// Give scheme-less targets an `https://` prefix so users can type bare
/// hostnames.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Drop repeated targets, keeping the first occurrence's position.
pub fn dedup_preserving_order(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter().filter(|u| seen.insert(u.clone())).collect()
}

/// Read one target per line, skipping blank lines, until EOF.
pub fn read_targets<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut targets = Vec::new();
    for line in reader.lines() {
        let line = line.context("reading targets")?;
        let line = line.trim();
        if !line.is_empty() {
            targets.push(line.to_string());
        }
    }
    Ok(targets)
}

/// Targets from the command line when present, otherwise from stdin. Either
/// way they come back normalized and deduplicated.
pub fn collect_targets(args: &[String]) -> Result<Vec<String>> {
    let raw = if args.is_empty() {
        read_targets(std::io::stdin().lock())?
    } else {
        args.to_vec()
    };
    Ok(dedup_preserving_order(
        raw.iter().map(|u| normalize_url(u)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hostnames_get_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
    }

    #[test]
    fn existing_schemes_are_kept() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let urls = vec![
            "https://a".to_string(),
            "https://b".to_string(),
            "https://a".to_string(),
            "https://c".to_string(),
        ];
        assert_eq!(
            dedup_preserving_order(urls),
            vec!["https://a", "https://b", "https://c"]
        );
    }

    #[test]
    fn reads_lines_skipping_blanks() {
        let input = b"example.com\n\n  \nhttp://other.org\n" as &[u8];
        assert_eq!(
            read_targets(input).unwrap(),
            vec!["example.com", "http://other.org"]
        );
    }
}
