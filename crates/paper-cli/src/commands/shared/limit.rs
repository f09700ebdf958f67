/// Rows to display: the global `--limit` if given, else `fallback`.
#[must_use]
pub fn display_limit(global: Option<u32>, fallback: usize) -> usize {
    global
        .and_then(|limit| usize::try_from(limit).ok())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::display_limit;

    #[test]
    fn global_flag_wins() {
        assert_eq!(display_limit(Some(5), 50), 5);
    }

    #[test]
    fn fallback_used_when_unset() {
        assert_eq!(display_limit(None, 50), 50);
    }
}
