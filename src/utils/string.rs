//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("job", 0), "jobs");
        assert_eq!(pluralize("job", 1), "job");
        assert_eq!(pluralize("edge", 5), "edges");
    }
}
