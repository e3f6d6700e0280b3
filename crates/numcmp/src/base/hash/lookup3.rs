//! Bob Jenkins' lookup3 hash as the host uses it, reading the key as little-endian words.

const INITIAL_STATE: u32 = 0x9e37_79b9_u32.wrapping_add(3_923_095);

#[inline]
fn mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(4);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(6);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(8);
    *b = b.wrapping_add(*a);
    *a = a.wrapping_sub(*c);
    *a ^= c.rotate_left(16);
    *c = c.wrapping_add(*b);
    *b = b.wrapping_sub(*a);
    *b ^= a.rotate_left(19);
    *a = a.wrapping_add(*c);
    *c = c.wrapping_sub(*b);
    *c ^= b.rotate_left(4);
    *b = b.wrapping_add(*a);
}

#[inline]
fn final_mix(a: &mut u32, b: &mut u32, c: &mut u32) {
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(14));
    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(11));
    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(25));
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(16));
    *a ^= *c;
    *a = a.wrapping_sub(c.rotate_left(4));
    *b ^= *a;
    *b = b.wrapping_sub(a.rotate_left(14));
    *c ^= *b;
    *c = c.wrapping_sub(b.rotate_left(24));
}

/// Little-endian word from up to four bytes, each shifted by its position.
fn word(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .fold(0, |acc, (i, byte)| acc | (u32::from(*byte) << (8 * i)))
}

fn absorb(key: &[u8], a: &mut u32, b: &mut u32, c: &mut u32) {
    let mut blocks = key.chunks_exact(12);
    for block in &mut blocks {
        *a = a.wrapping_add(word(&block[0..4]));
        *b = b.wrapping_add(word(&block[4..8]));
        *c = c.wrapping_add(word(&block[8..12]));
        mix(a, b, c);
    }
    let tail = blocks.remainder();
    let (a_bytes, rest) = tail.split_at(tail.len().min(4));
    let (b_bytes, c_bytes) = rest.split_at(rest.len().min(4));
    *a = a.wrapping_add(word(a_bytes));
    *b = b.wrapping_add(word(b_bytes));
    // The lowest byte of `c` is reserved for the length.
    *c = c.wrapping_add(word(c_bytes) << 8);
    final_mix(a, b, c);
}

fn initial_state(len: usize) -> u32 {
    // The host folds the length in modulo 2^32.
    #[allow(clippy::cast_possible_truncation)]
    let len = len as u32;
    INITIAL_STATE.wrapping_add(len)
}

/// 32-bit hash of `key`.
#[must_use]
pub fn hash_bytes(key: &[u8]) -> u32 {
    let init = initial_state(key.len());
    let (mut a, mut b, mut c) = (init, init, init);
    absorb(key, &mut a, &mut b, &mut c);
    c
}

/// 64-bit hash of `key`, perturbed by `seed`. A zero seed adds no perturbation.
#[must_use]
pub fn hash_bytes_extended(key: &[u8], seed: u64) -> u64 {
    let init = initial_state(key.len());
    let (mut a, mut b, mut c) = (init, init, init);
    if seed != 0 {
        #[allow(clippy::cast_possible_truncation)]
        {
            a = a.wrapping_add((seed >> 32) as u32);
            b = b.wrapping_add(seed as u32);
        }
        mix(&mut a, &mut b, &mut c);
    }
    absorb(key, &mut a, &mut b, &mut c);
    (u64::from(b) << 32) | u64::from(c)
}
