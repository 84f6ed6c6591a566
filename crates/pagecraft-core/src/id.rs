//! Identifier generation for document nodes.
//!
//! Ids are collision-resistant random UUIDs. Uniqueness is a documented
//! invariant of a well-formed document, never enforced by a central
//! registry; loading rejects documents where it is violated.

use uuid::Uuid;

/// Unique identifier for rows, columns, blocks and canvas elements.
pub type BlockId = Uuid;

/// Generate a fresh identifier.
pub fn generate() -> BlockId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
    }
}
