//! Admin feature modules: one directory per entity, pure form state beside
//! the wasm-only views.

pub mod roles;
pub mod tenants;
pub mod users;

/// Split a comma-separated input into trimmed, non-empty entries.
#[must_use]
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::parse_list;

    #[test]
    fn parse_list_trims_and_drops_blanks() {
        assert_eq!(parse_list("admin, editor ,,viewer"), [
            "admin", "editor", "viewer"
        ]);
        assert!(parse_list("  ").is_empty());
    }
}
