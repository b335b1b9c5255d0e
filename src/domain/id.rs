/// Mints a short opaque identifier like `sess-3fa9c1`.
pub fn mint(prefix: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    let hash = blake3::hash(uuid.as_bytes());
    let hex = hex::encode(&hash.as_bytes()[..3]);
    format!("{prefix}-{hex}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_uses_prefix() {
        let id = mint("sess");
        assert!(id.starts_with("sess-"));
        assert_eq!(id.len(), "sess-".len() + 6);
    }

    #[test]
    fn mint_is_unique_per_call() {
        assert_ne!(mint("usr"), mint("usr"));
    }
}
