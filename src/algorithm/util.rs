use rand::Rng;

/// Generates a text of `len` characters drawn uniformly from `alphabet`.
///
/// Panics if `alphabet` is empty and `len` is not zero.
pub fn random_text<C: Copy, R: Rng + ?Sized>(len: usize, alphabet: &[C], rng: &mut R) -> Vec<C> {
    assert!(len == 0 || !alphabet.is_empty(), "cannot draw characters from an empty alphabet");

    (0..len)
        .map(|_| alphabet[rng.random_range(0..alphabet.len())])
        .collect()
}
