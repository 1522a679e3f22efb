//! Non-owning byte spans with Python/Go-style indexing.
//!
//! A [`Span`] is a pointer/length view over bytes owned elsewhere — a
//! [`ByteString`](crate::ByteString), an arena region, a literal. The
//! borrow checker enforces that a span never outlives its buffer. Spans
//! are two words, `Copy`, and never allocate.
//!
//! All index parameters are signed: negative indices count from the end
//! (`-1` is the last byte). An index that normalises outside the valid
//! range is a [`BoundsError`] — never silently clamped or wrapped.

use loam_core::BoundsError;
use smallvec::SmallVec;

use crate::byteset::ByteSet;

/// Line-break delimiters for [`Span::next_line`].
const LINE_BREAKS: ByteSet = ByteSet::from_bytes(b"\r\n");

/// Map a possibly-negative index to `[0, len]`.
///
/// `i >= 0` maps to itself; `i < 0` maps to `len + i`, so `-1` addresses
/// the last byte and `-len` the first. Both `0` and `len` are valid
/// results — `len` is the exclusive upper bound used by range operations.
/// Anything else is [`BoundsError::IndexOutOfRange`].
pub fn normalize_index(i: isize, len: usize) -> Result<usize, BoundsError> {
    let j = if i >= 0 {
        i as usize
    } else {
        // len + i with i negative; underflow means i < -len.
        match len.checked_sub(i.unsigned_abs()) {
            Some(j) => j,
            None => return Err(BoundsError::IndexOutOfRange { index: i, len }),
        }
    };
    if j > len {
        return Err(BoundsError::IndexOutOfRange { index: i, len });
    }
    Ok(j)
}

/// A non-owning view over a byte buffer.
///
/// Equality (`==`) is content equality with an identity fast path;
/// [`Span::same_site`] tests identity (same address, same length). A live
/// view into a container that reallocates is ruled out by the borrow on
/// `'a`, so spans cannot dangle.
#[derive(Clone, Copy, Debug)]
pub struct Span<'a> {
    bytes: &'a [u8],
}

impl<'a> Span<'a> {
    /// View the whole of `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// View `buf` up to (not including) its first NUL byte, or all of it
    /// when no NUL occurs.
    ///
    /// This is the terminator-scan constructor for buffers that carry
    /// C-style termination, e.g. the output of
    /// [`ByteString::as_bytes_with_nul`](crate::ByteString::as_bytes_with_nul).
    pub fn from_terminated(buf: &'a [u8]) -> Self {
        let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
        Self { bytes: &buf[..len] }
    }

    /// Length of the view in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is zero bytes long.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The viewed bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The byte at (possibly negative) index `i`.
    pub fn get(&self, i: isize) -> Result<u8, BoundsError> {
        let j = normalize_index(i, self.len())?;
        if j == self.len() {
            return Err(BoundsError::IndexOutOfRange {
                index: i,
                len: self.len(),
            });
        }
        Ok(self.bytes[j])
    }

    /// Subview over `[i, j)` after normalising both bounds.
    ///
    /// Requires `i <= j` after normalisation
    /// ([`BoundsError::InvalidRange`] otherwise).
    pub fn reslice(self, i: isize, j: isize) -> Result<Span<'a>, BoundsError> {
        let start = normalize_index(i, self.len())?;
        let end = normalize_index(j, self.len())?;
        if start > end {
            return Err(BoundsError::InvalidRange { start, end });
        }
        Ok(Span {
            bytes: &self.bytes[start..end],
        })
    }

    /// Subview over `[0, i)` — `s[:i]` in Python terms.
    pub fn prefix(self, i: isize) -> Result<Span<'a>, BoundsError> {
        let end = normalize_index(i, self.len())?;
        Ok(Span {
            bytes: &self.bytes[..end],
        })
    }

    /// Subview over `[i, len)` — `s[i:]` in Python terms.
    pub fn suffix(self, i: isize) -> Result<Span<'a>, BoundsError> {
        let start = normalize_index(i, self.len())?;
        Ok(Span {
            bytes: &self.bytes[start..],
        })
    }

    /// Identity comparison: same starting address and same length.
    ///
    /// Identity implies content equality; the converse does not hold.
    pub fn same_site(&self, other: &Span<'_>) -> bool {
        self.bytes.as_ptr() == other.bytes.as_ptr() && self.len() == other.len()
    }

    /// Drop leading ASCII whitespace in place, returning the number of
    /// bytes removed.
    pub fn trim_start(&mut self) -> usize {
        let cut = self
            .bytes
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        self.bytes = &self.bytes[cut..];
        cut
    }

    /// Drop trailing ASCII whitespace in place, returning the number of
    /// bytes removed.
    pub fn trim_end(&mut self) -> usize {
        let keep = self
            .bytes
            .iter()
            .rposition(|b| !b.is_ascii_whitespace())
            .map_or(0, |i| i + 1);
        let cut = self.bytes.len() - keep;
        self.bytes = &self.bytes[..keep];
        cut
    }

    /// Drop leading and trailing ASCII whitespace in place, returning the
    /// total number of bytes removed.
    pub fn trim(&mut self) -> usize {
        self.trim_start() + self.trim_end()
    }

    /// A copy of this span with leading ASCII whitespace removed.
    pub fn trimmed_start(mut self) -> Span<'a> {
        self.trim_start();
        self
    }

    /// A copy of this span with trailing ASCII whitespace removed.
    pub fn trimmed_end(mut self) -> Span<'a> {
        self.trim_end();
        self
    }

    /// A copy of this span with surrounding ASCII whitespace removed.
    pub fn trimmed(mut self) -> Span<'a> {
        self.trim();
        self
    }

    /// Count of leading bytes NOT in `set` — the index of the first
    /// member, or the full length when no member occurs.
    pub fn span_reject(&self, set: &ByteSet) -> usize {
        self.bytes
            .iter()
            .take_while(|&&b| !set.contains(b))
            .count()
    }

    /// Count of leading bytes in `set` — the index of the first
    /// non-member, or the full length when every byte is a member.
    pub fn span_accept(&self, set: &ByteSet) -> usize {
        self.bytes.iter().take_while(|&&b| set.contains(b)).count()
    }

    /// Split off the leading run of non-delimiter bytes.
    ///
    /// Returns `(token, rest)`: `token` is everything before the first
    /// delimiter, `rest` starts after the token and after any immediately
    /// following run of delimiters, so repeated splitting collapses
    /// delimiter runs. An empty span yields an empty token and an empty
    /// rest forever — the terminal state callers use to end their loops.
    pub fn split_token(self, delimiters: &ByteSet) -> (Span<'a>, Span<'a>) {
        let cut = self.span_reject(delimiters);
        let token = Span {
            bytes: &self.bytes[..cut],
        };
        let after = Span {
            bytes: &self.bytes[cut..],
        };
        let skip = after.span_accept(delimiters);
        let rest = Span {
            bytes: &after.bytes[skip..],
        };
        (token, rest)
    }

    /// In-place form of [`Span::split_token`]: returns the token and
    /// re-points `self` at the rest.
    pub fn next_token(&mut self, delimiters: &ByteSet) -> Span<'a> {
        let (token, rest) = self.split_token(delimiters);
        *self = rest;
        token
    }

    /// Read one line, consuming the line and its terminator.
    ///
    /// Equivalent to [`Span::next_token`] with `"\r\n"` delimiters; blank
    /// lines collapse like repeated delimiters do.
    pub fn next_line(&mut self) -> Span<'a> {
        self.next_token(&LINE_BREAKS)
    }

    /// All nonempty tokens of the span, in order.
    pub fn fields(self, delimiters: &ByteSet) -> SmallVec<[Span<'a>; 8]> {
        let mut out = SmallVec::new();
        let mut rest = self;
        loop {
            let token = rest.next_token(delimiters);
            if token.is_empty() {
                break;
            }
            out.push(token);
        }
        out
    }

    /// Whether the span begins with `needle`.
    pub fn starts_with(&self, needle: impl AsRef<[u8]>) -> bool {
        self.bytes.starts_with(needle.as_ref())
    }

    /// Index of the first occurrence of `needle`, or `self.len()` when
    /// absent.
    ///
    /// The not-found sentinel is deliberately the haystack length — a
    /// valid-looking index — rather than a distinct error, so callers must
    /// compare the result against `len()`. A needle longer than the
    /// haystack is reported the same way. The empty needle matches at 0.
    pub fn find(&self, needle: impl AsRef<[u8]>) -> usize {
        let needle = needle.as_ref();
        if needle.len() > self.len() {
            return self.len();
        }
        for pos in 0..=(self.len() - needle.len()) {
            if self.bytes[pos..pos + needle.len()] == *needle {
                return pos;
            }
        }
        self.len()
    }

    /// A 64-bit multiplicative/XOR rolling hash of the content.
    ///
    /// Seeded with `0x100`, folding each byte with a wrapping multiply by
    /// a large odd constant. Fast and collision-prone by design; not
    /// cryptographic.
    pub fn hash(&self) -> u64 {
        let mut h: u64 = 0x100;
        for &b in self.bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(1111111111111111111);
        }
        h
    }
}

impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        // Identity short-circuit, then byte-for-byte.
        self.same_site(other) || self.bytes == other.bytes
    }
}

impl Eq for Span<'_> {}

impl PartialEq<&[u8]> for Span<'_> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.bytes == *other
    }
}

impl PartialEq<&str> for Span<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl<'a> From<&'a [u8]> for Span<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<'a> From<&'a str> for Span<'a> {
    fn from(s: &'a str) -> Self {
        Self::new(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loam_core::BoundsError;
    use proptest::prelude::*;

    const DELIMS: ByteSet = ByteSet::from_bytes(b",. ");

    #[test]
    fn indexing_from_both_ends() {
        let s = Span::from("Hello, world!");
        assert_eq!(s.get(0).unwrap(), b'H');
        assert_eq!(s.get(1).unwrap(), b'e');
        assert_eq!(s.get(-1).unwrap(), b'!');
        assert_eq!(s.get(-2).unwrap(), b'd');
        // -1 and len-1 select the identical byte.
        assert_eq!(s.get(-1).unwrap(), s.get(s.len() as isize - 1).unwrap());
    }

    #[test]
    fn out_of_range_index_is_an_error_not_a_clamp() {
        let s = Span::from("abcd");
        assert_eq!(
            s.get(4),
            Err(BoundsError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            s.get(-5),
            Err(BoundsError::IndexOutOfRange { index: -5, len: 4 })
        );
    }

    #[test]
    fn normalize_accepts_the_inclusive_upper_bound() {
        assert_eq!(normalize_index(4, 4).unwrap(), 4);
        assert_eq!(normalize_index(-4, 4).unwrap(), 0);
        assert!(normalize_index(5, 4).is_err());
        assert!(normalize_index(-5, 4).is_err());
    }

    #[test]
    fn reslice_prefix_suffix() {
        let s = Span::from("Hello, world!");

        let hello = s.prefix(5).unwrap();
        assert_eq!(hello, "Hello");
        assert_eq!(hello.get(-1).unwrap(), b'o');

        let world = s.suffix(7).unwrap();
        assert_eq!(world, "world!");
        assert_eq!(world.len(), 6);

        let llo = s.reslice(2, 5).unwrap();
        assert_eq!(llo, "llo");
        assert_eq!(llo.len(), 3);

        // The same subview reached two ways is the identical site.
        let llo2 = hello.suffix(2).unwrap();
        assert!(llo.same_site(&llo2));
        assert_eq!(llo, llo2);
    }

    #[test]
    fn reslice_with_negative_bounds() {
        let s = Span::from("Hello, world!");
        assert_eq!(s.reslice(-6, -1).unwrap(), "world");
        assert_eq!(s.reslice(0, -7).unwrap(), "Hello,");
    }

    #[test]
    fn reslice_rejects_crossed_bounds() {
        let s = Span::from("abcd");
        assert_eq!(
            s.reslice(3, 1),
            Err(BoundsError::InvalidRange { start: 3, end: 1 })
        );
    }

    #[test]
    fn content_equality_ignores_address() {
        let a = Span::from("llo");
        let s = Span::from("Hello");
        let b = s.suffix(2).unwrap();
        assert!(!a.same_site(&b));
        assert_eq!(a, b);
        assert_ne!(a, Span::from("ll"));
        assert_ne!(a, Span::from("llo3"));
    }

    #[test]
    fn from_terminated_stops_at_nul() {
        let buf = b"abc\0def";
        let s = Span::from_terminated(buf);
        assert_eq!(s, "abc");
        let no_nul = Span::from_terminated(b"abc");
        assert_eq!(no_nul, "abc");
    }

    #[test]
    fn trimming_reports_removed_counts() {
        let orig = Span::from("    a string with spaces\t ");
        let mut s = orig;
        assert_eq!(s.trim_start(), 4);
        assert_eq!(s, "a string with spaces\t ");

        let mut s = orig;
        assert_eq!(s.trim_end(), 2);
        assert_eq!(s, "    a string with spaces");

        let mut s = orig;
        assert_eq!(s.trim(), 6);
        assert_eq!(s, "a string with spaces");
        assert_eq!(s, orig.trimmed());
    }

    #[test]
    fn trim_is_idempotent() {
        let mut s = Span::from("  padded  ");
        s.trim();
        let once = s;
        assert_eq!(s.trim(), 0);
        assert_eq!(s, once);
    }

    #[test]
    fn trim_all_whitespace_to_empty() {
        let mut s = Span::from(" \t\r\n ");
        assert_eq!(s.trim(), 5);
        assert!(s.is_empty());
    }

    #[test]
    fn span_reject_and_accept_are_duals() {
        let s = Span::from("Hello, world!");
        assert_eq!(s.span_reject(&ByteSet::from_bytes(b",")), 5);
        assert_eq!(s.span_reject(&ByteSet::from_bytes(b"0")), s.len());
        assert_eq!(s.span_reject(&ByteSet::from_bytes(b" ")), 6);
        assert_eq!(s.span_accept(&ByteSet::from_bytes(b"lHe")), 4);
        assert_eq!(s.span_accept(&ByteSet::from_bytes(b"x")), 0);
    }

    #[test]
    fn tokenize_collapses_delimiters_until_exhaustion() {
        let mut words = Span::from("a few words to check, with punctuation.");
        for expected in ["a", "few", "words", "to", "check", "with", "punctuation"] {
            assert_eq!(words.next_token(&DELIMS), expected);
        }
        // Terminal state: empty token forever, length pinned at zero.
        assert_eq!(words.next_token(&DELIMS), "");
        assert_eq!(words.next_token(&DELIMS), "");
        assert_eq!(words.len(), 0);
    }

    #[test]
    fn split_token_returns_token_and_rest() {
        let s = Span::from("one  two");
        let (token, rest) = s.split_token(&ByteSet::from_bytes(b" "));
        assert_eq!(token, "one");
        assert_eq!(rest, "two");
    }

    #[test]
    fn fields_collects_all_tokens() {
        let s = Span::from("a few words to check, with punctuation.");
        let fields = s.fields(&DELIMS);
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[0], "a");
        assert_eq!(fields[6], "punctuation");
    }

    #[test]
    fn next_line_strips_mixed_line_endings() {
        let mut par = Span::from("Here's a sentence.\nHere's another.\r\nAnd one more!\r\n");
        assert_eq!(par.next_line(), "Here's a sentence.");
        assert_eq!(par.next_line(), "Here's another.");
        assert_eq!(par.next_line(), "And one more!");
        assert_eq!(par.next_line(), "");
    }

    #[test]
    fn starts_with_matches_prefixes_only() {
        let s = Span::from("Hello, world!");
        assert!(s.starts_with("Hel"));
        assert!(s.starts_with("Hello"));
        assert!(!s.starts_with("hello"));
        assert!(!s.starts_with("Hello, world!!!!"));
    }

    #[test]
    fn find_returns_first_occurrence() {
        let s = Span::from("word1 word2 word3 word4 wor5 word6");
        assert_eq!(s.find("word"), 0);
        assert_eq!(s.find("word2"), 6);
        assert_eq!(s.find("word3"), 12);
        assert_eq!(s.find("wor5"), 24);
        assert_eq!(s.find("word6"), 29);
        assert_eq!(s.find(""), 0);
    }

    #[test]
    fn find_absent_needle_yields_haystack_length() {
        let s = Span::from("word1 word2 word3");
        assert_eq!(s.find("word5"), 18);
        assert_eq!(s.find("word5"), s.len());
        // A needle longer than the haystack is the same case.
        assert_eq!(s.find("word1 word2 word3 word4"), s.len());
    }

    #[test]
    fn hash_depends_on_content_not_address() {
        let a = Span::from("some key");
        let b = Span::new(&b"xsome key"[1..]);
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a.hash(), Span::from("some kez").hash());
        assert_eq!(Span::from("").hash(), 0x100);
    }

    proptest! {
        #[test]
        fn reslice_length_and_content(
            data in proptest::collection::vec(any::<u8>(), 0..64),
            i in 0usize..64,
            j in 0usize..64,
        ) {
            let s = Span::new(&data);
            let (i, j) = (i.min(data.len()), j.min(data.len()));
            let (i, j) = (i.min(j), i.max(j));
            let sub = s.reslice(i as isize, j as isize).unwrap();
            prop_assert_eq!(sub.len(), j - i);
            prop_assert_eq!(sub.as_bytes(), &data[i..j]);
        }

        #[test]
        fn negative_and_positive_indices_agree(
            data in proptest::collection::vec(any::<u8>(), 1..64),
            k in 0usize..64,
        ) {
            let s = Span::new(&data);
            let k = k % data.len();
            let neg = -((data.len() - k) as isize);
            prop_assert_eq!(s.get(k as isize).unwrap(), s.get(neg).unwrap());
        }

        #[test]
        fn trim_idempotence(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let mut once = Span::new(&data);
            once.trim();
            let mut twice = once;
            prop_assert_eq!(twice.trim(), 0);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn find_result_is_len_or_a_real_match(
            hay in proptest::collection::vec(any::<u8>(), 0..32),
            needle in proptest::collection::vec(any::<u8>(), 0..8),
        ) {
            let s = Span::new(&hay);
            let pos = s.find(&needle);
            if pos == hay.len() && !needle.is_empty() {
                // Absent (or over-long needle): no window may match.
                for w in hay.windows(needle.len()) {
                    prop_assert_ne!(w, needle.as_slice());
                }
            } else if pos < hay.len() {
                prop_assert_eq!(&hay[pos..pos + needle.len()], needle.as_slice());
            }
        }
    }
}
