use circ_rotate::{reverse_complement, reverse_complement_str};

#[test]
fn test_reverse_complement_basic() {
    let input = b"ATGC";
    let expected = b"GCAT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_lowercase() {
    // lowercase stays lowercase
    let input = b"atgc";
    let expected = b"gcat";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_mixed_case() {
    // mixed case
    let input = b"AtGc";
    let expected = b"gCaT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_with_n() {
    // N passes through
    let input = b"ATGCN";
    let expected = b"NGCAT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_unknown_bases() {
    // other characters are kept but still reversed
    let input = b"ATXGC-";
    let expected = b"-GCXAT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_empty() {
    let input = b"";
    let expected = b"";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_long_sequence() {
    let input = b"AAATTTGGGCCC";
    let expected = b"GGGCCCAAATTT";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_palindrome() {
    // EcoRI site
    let input = b"GAATTC";
    let expected = b"GAATTC";
    let result = reverse_complement(input);
    assert_eq!(result, expected);
}

#[test]
fn test_reverse_complement_involution() {
    for seq in ["ACGTacgt", "GATCGATTACA", "ttttGGGG", ""] {
        let twice = reverse_complement(&reverse_complement(seq.as_bytes()));
        assert_eq!(twice, seq.as_bytes());
    }
}

#[test]
fn test_reverse_complement_str() {
    assert_eq!(reverse_complement_str("TGTAA"), "TTACA");
    assert_eq!(reverse_complement_str("aCgé"), "écGt");
    assert_eq!(reverse_complement_str(""), "");
}
