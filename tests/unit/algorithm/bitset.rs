//! Tests for the covered-cell bitset

#[cfg(test)]
mod tests {
    use jigsaw::algorithm::bitset::CellMask;

    // Tests insert, contains, and count with duplicates
    // Verified by counting insert calls instead of set bits
    #[test]
    fn test_insert_deduplicates() {
        let mut mask = CellMask::new(3, 4);
        assert_eq!(mask.count(), 0);

        mask.insert(0, 0);
        mask.insert(2, 3);
        mask.insert(2, 3);
        assert_eq!(mask.count(), 2);
        assert!(mask.contains(0, 0));
        assert!(mask.contains(2, 3));
        assert!(!mask.contains(3, 2));
        assert!(!mask.contains(1, 1));
    }

    // Tests out-of-bounds cells are ignored rather than wrapping
    // Verified by indexing without the column bound check
    #[test]
    fn test_out_of_bounds_ignored() {
        let mut mask = CellMask::new(2, 2);
        mask.insert(0, 2);
        mask.insert(5, 0);
        assert_eq!(mask.count(), 0);
        assert!(!mask.contains(1, 0), "Column overflow must not wrap to the next row");
        assert!(!mask.contains(0, 2));
    }

    // Tests masks of equal shape and marks compare equal
    // Verified by comparing dimensions only
    #[test]
    fn test_equality() {
        let mut left = CellMask::new(2, 3);
        left.insert(1, 2);
        let mut right = CellMask::new(2, 3);
        assert_ne!(left, right);

        right.insert(1, 2);
        assert_eq!(left, right);
        assert_ne!(CellMask::new(3, 2), CellMask::new(2, 3));
    }
}
