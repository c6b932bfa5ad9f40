//! Byte classes and delimiter search.
//!
//! Every search here is a single forward (or backward) pass over the input, so parsing stays
//! linear in input length whatever the input looks like.

macro_rules! byte_map {
    // ===== 256 lookup table =====
    {
        $(#[$meta:meta])*
        $vis:vis const fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis const fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

/// Find the first byte equal to any of the given ASCII delimiters, word at a time.
///
/// Evaluates to the index of the first match, or `None`.
macro_rules! find_delim {
    ($bytes:expr; $($delim:literal),+ $(,)?) => {
        'swar: {
            const BLOCK: usize = size_of::<usize>();
            const MSB: usize = usize::from_ne_bytes([0b1000_0000; BLOCK]);
            const LSB: usize = usize::from_ne_bytes([0b0000_0001; BLOCK]);

            let original: &[u8] = $bytes;
            let mut state: &[u8] = original;

            while let Some((chunk, rest)) = state.split_first_chunk::<BLOCK>() {
                // little endian so the lowest flagged byte is the first in memory
                let block = usize::from_le_bytes(*chunk);

                // a byte of `x` is zero where `block` holds the delimiter, the lowest flagged
                // byte of `(x - LSB) & !x` is exactly the first zero byte
                let found = 0 $(| {
                    let x = block ^ usize::from_ne_bytes([$delim; BLOCK]);
                    x.wrapping_sub(LSB) & !x
                })+;

                let result = found & MSB;
                if result != 0 {
                    let nth = (result.trailing_zeros() / 8) as usize;
                    break 'swar Some(original.len() - state.len() + nth);
                }

                state = rest;
            }

            while let [byte, rest @ ..] = state {
                if matches!(*byte, $($delim)|+) {
                    break 'swar Some(original.len() - state.len());
                }

                state = rest;
            }

            None
        }
    };
}

// ===== Lookup tables =====

byte_map! {
    /// Bytes that end a scheme candidate: `:` / `/` / `?` / `#`.
    #[inline(always)]
    pub const fn is_scheme_delim(byte: u8) {
        matches!(byte, b':' | b'/' | b'?' | b'#')
    }
}

byte_map! {
    /// Bytes that end a scheme candidate in loose mode, which also refuses `.`.
    #[inline(always)]
    pub const fn is_loose_scheme_delim(byte: u8) {
        matches!(byte, b':' | b'/' | b'?' | b'#' | b'.')
    }
}

// ===== Search =====

/// Returns the index of the first scheme delimiter.
pub const fn find_scheme_delim(bytes: &[u8], loose: bool) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        let delim = match loose {
            true => is_loose_scheme_delim(byte),
            false => is_scheme_delim(byte),
        };
        if delim {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Returns the index of the first `/`, `?` or `#`, the end of an authority.
pub fn find_authority_end(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b'/', b'?', b'#')
}

/// Returns the index of the first `?` or `#`, the end of a path.
pub fn find_path_end(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b'?', b'#')
}

/// Returns the index of the first `#`.
pub fn find_hash(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b'#')
}

/// Returns the index of the first `@`.
pub fn find_at_sign(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b'@')
}

/// Returns the index of the first `:` or `@`.
pub fn find_colon_or_at(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b':', b'@')
}

/// Returns the index of the first `:`, `@` or `/`.
pub fn find_userinfo_end(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b':', b'@', b'/')
}

/// Returns the index of the first `:`, `/`, `?` or `#`, the end of a host.
pub fn find_host_end(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b':', b'/', b'?', b'#')
}

/// Returns the index of the first `:`.
pub fn find_colon(bytes: &[u8]) -> Option<usize> {
    find_delim!(bytes; b':')
}

/// Returns the index of the last `/`.
pub fn rfind_slash(bytes: &[u8]) -> Option<usize> {
    bytes.iter().rposition(|&byte| byte == b'/')
}

/// Returns the length of the leading ASCII digit run.
pub const fn digits_len(bytes: &[u8]) -> usize {
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

#[test]
fn test_find_delim() {
    assert_eq!(find_authority_end(b"example.com"), None);
    assert_eq!(find_authority_end(b"example.com/path"), Some(11));
    assert_eq!(find_authority_end(b"example.com?q#f"), Some(11));
    assert_eq!(find_authority_end(b"a#"), Some(1));
    assert_eq!(find_authority_end(b""), None);

    // first match wins across chunk boundaries and delimiter kinds
    assert_eq!(find_path_end(b"/over/there/and/back#frag?not-query"), Some(20));
    assert_eq!(find_path_end(b"/over/there/and/back?query#frag"), Some(20));

    // non-ASCII bytes are plain data
    let emoji = "/🐀🐀🐀🐀🐀🐀🐀?emoji=🚀";
    assert_eq!(find_path_end(emoji.as_bytes()), emoji.find('?'));
    assert_eq!(find_hash("🐀🐀🐀🐀🐀🐀🐀🐀".as_bytes()), None);
}

#[test]
fn test_find_at_sign() {
    assert_eq!(find_at_sign(b"example.com"), None);
    assert_eq!(find_at_sign(b"user:passwd@example.com"), Some(11));
    assert_eq!(find_at_sign(b"a@b"), Some(1));
    assert_eq!(find_at_sign(b"@@@@@@@@@@@@@@@@"), Some(0));
}

#[test]
fn test_find_scheme_delim() {
    assert_eq!(find_scheme_delim(b"http://example.com", false), Some(4));
    assert_eq!(find_scheme_delim(b"a.b:c", false), Some(3));
    assert_eq!(find_scheme_delim(b"a.b:c", true), Some(1));
    assert_eq!(find_scheme_delim(b"myURL", true), None);
}

#[test]
fn test_rfind_and_digits() {
    assert_eq!(rfind_slash(b"/dir/file.txt"), Some(4));
    assert_eq!(rfind_slash(b"file.txt"), None);
    assert_eq!(digits_len(b"8080/path"), 4);
    assert_eq!(digits_len(b"x80"), 0);
}
