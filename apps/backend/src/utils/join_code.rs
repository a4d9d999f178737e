//! Game codes handed to players so a device can claim a pending game.
//!
//! Codes are 10 characters of Crockford's Base32 alphabet, which has no
//! I, L, O or U and so survives being read aloud or typed on a keypad.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";
pub const GAME_CODE_LEN: usize = 10;

pub fn generate_game_code() -> String {
    let mut rng = rand::rng();
    (0..GAME_CODE_LEN)
        .map(|_| CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char)
        .collect()
}
