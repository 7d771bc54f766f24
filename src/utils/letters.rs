use rand::Rng;

/// Letters a generated grid is drawn from
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Pick one letter uniformly from [`ALPHABET`]
pub fn random_letter(rng: &mut impl Rng) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

/// Letter at `index` in the alphabet, wrapping past 'z'
pub fn letter_at_index(index: usize) -> char {
    ALPHABET[index % ALPHABET.len()] as char
}
