use boxes::{BitGrid, BitGridError};

#[test]
fn test_new_is_empty() {
    let bg = BitGrid::<u64>::new(3, 2);
    assert!(bg.is_empty());
    assert_eq!(bg.len(), 6);
    assert_eq!(bg.count_ones(), 0);
}

#[test]
fn test_get_set() {
    let mut bg = BitGrid::<u16>::new(4, 5);

    assert!(!bg.set(1, 1).unwrap());
    assert!(bg.get(1, 1).unwrap());
    // second set reports the bit was already there
    assert!(bg.set(1, 1).unwrap());
    assert_eq!(bg.count_ones(), 1);

    bg.set(3, 4).unwrap();
    assert!(bg.get(3, 4).unwrap());
    assert!(!bg.get(0, 0).unwrap());
}

#[test]
fn test_out_of_bounds() {
    let mut bg = BitGrid::<u8>::new(2, 3);
    assert_eq!(
        bg.get(2, 0).unwrap_err(),
        BitGridError::IndexOutOfBounds { row: 2, col: 0 }
    );
    assert_eq!(
        bg.set(0, 3).unwrap_err(),
        BitGridError::IndexOutOfBounds { row: 0, col: 3 }
    );
    assert!(bg.is_empty());
}

#[test]
fn test_spans_multiple_words() {
    // 10 x 10 = 100 bits over u8 words
    let mut bg = BitGrid::<u8>::new(10, 10);
    for r in 0..10 {
        for c in 0..10 {
            bg.set(r, c).unwrap();
        }
    }
    assert_eq!(bg.count_ones(), bg.len());
    assert!(bg.get(9, 9).unwrap());
}
