//! Bounded, deduplicated set of 8x8 tiles.
//!
//! Tiles are keyed by their 64-bit pattern, packed big-endian (row 0 in the
//! most significant byte), so lookups are O(1) and the key is identical on
//! every platform.

use std::collections::HashMap;

use crate::error::{CellError, MalformedInput};

/// Number of character slots in the hardware character generator.
pub const MAX_CHARS: usize = 256;

/// One 8x8 cell reduced to a bitplane: 8 rows, bit 7 leftmost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(pub [u8; 8]);

impl Tile {
    pub const BLANK: Tile = Tile([0; 8]);

    #[inline]
    pub const fn new(rows: [u8; 8]) -> Self {
        Self(rows)
    }

    #[inline]
    pub fn rows(&self) -> &[u8; 8] {
        &self.0
    }

    /// Pattern packed into a `u64`, row 0 in the high byte.
    #[inline]
    pub fn key(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.key() == 0
    }

    /// True if pixel `(x, y)` of the tile is set.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.0[y] & (0x80 >> x) != 0
    }
}

impl From<[u8; 8]> for Tile {
    fn from(rows: [u8; 8]) -> Self {
        Self(rows)
    }
}

/// Ordered set of unique tiles with dense indices.
///
/// Indices are assigned in first-seen order starting at 0. Once
/// `max_chars` unique tiles are stored, adding a new one fails with
/// [`CellError::CharsetFull`].
///
/// # Example
///
/// ```
/// use cell_gfx::{Charset, Tile};
///
/// let mut charset = Charset::new();
/// let a = Tile::new([0xff, 0, 0, 0, 0, 0, 0, 0]);
/// let b = Tile::new([0, 0xff, 0, 0, 0, 0, 0, 0]);
///
/// assert_eq!(charset.add(&a).unwrap(), 0);
/// assert_eq!(charset.add(&b).unwrap(), 1);
/// assert_eq!(charset.add(&a).unwrap(), 0);
/// assert_eq!(charset.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Charset {
    tiles: Vec<Tile>,
    chars: HashMap<u64, u8>,
    max_chars: usize,
}

impl Default for Charset {
    fn default() -> Self {
        Self::new()
    }
}

impl Charset {
    /// An empty charset with the full 256 slots.
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            chars: HashMap::new(),
            max_chars: MAX_CHARS,
        }
    }

    /// An empty charset limited to `max_chars` slots (1..=256).
    pub fn with_max_chars(max_chars: usize) -> Result<Self, CellError> {
        if max_chars == 0 || max_chars > MAX_CHARS {
            return Err(CellError::InvalidCharsetSize { max_chars });
        }
        Ok(Self {
            max_chars,
            ..Self::new()
        })
    }

    /// Load a previously saved charset.
    ///
    /// Every tile keeps the slot it was saved in. Only the first all-zero
    /// tile counts as the canonical blank; later blank tiles neither get an
    /// index of their own nor extend the charset, so zero padding at the end
    /// of a full-size save is dropped again.
    pub fn from_bytes(data: &[u8], max_chars: usize) -> Result<Self, CellError> {
        let mut charset = Self::with_max_chars(max_chars)?;

        if data.len() % 8 != 0 {
            return Err(MalformedInput::PartialTile { len: data.len() }.into());
        }
        if data.len() / 8 > max_chars {
            return Err(CellError::CharsetFull { max_chars });
        }

        let stored: Vec<Tile> = data
            .chunks_exact(8)
            .map(|chunk| {
                let mut rows = [0u8; 8];
                rows.copy_from_slice(chunk);
                Tile(rows)
            })
            .collect();

        let mut had_blank = false;
        let mut used = 0;
        for (index, tile) in stored.iter().enumerate() {
            if tile.is_blank() && had_blank {
                continue;
            }
            charset.chars.entry(tile.key()).or_insert(index as u8);
            used = index + 1;
            had_blank |= tile.is_blank();
        }

        charset.tiles = stored;
        charset.tiles.truncate(used);

        tracing::debug!(
            stored = data.len() / 8,
            used,
            unique = charset.chars.len(),
            "Loaded charset"
        );

        Ok(charset)
    }

    /// Index of `tile`, inserting it if it is new.
    pub fn add(&mut self, tile: &Tile) -> Result<u8, CellError> {
        if let Some(&index) = self.chars.get(&tile.key()) {
            return Ok(index);
        }

        if self.tiles.len() >= self.max_chars {
            return Err(CellError::CharsetFull {
                max_chars: self.max_chars,
            });
        }

        let index = self.tiles.len() as u8;
        self.tiles.push(*tile);
        self.chars.insert(tile.key(), index);
        Ok(index)
    }

    /// Index of `tile` without inserting it.
    pub fn find(&self, tile: &Tile) -> Option<u8> {
        self.chars.get(&tile.key()).copied()
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Tile in slot `index`.
    pub fn get(&self, index: u8) -> Option<&Tile> {
        self.tiles.get(index as usize)
    }

    /// Serialized tile data: the occupied slots, or every slot zero padded
    /// to `max_chars * 8` bytes when `full` is set.
    pub fn to_bytes(&self, full: bool) -> Vec<u8> {
        let slots = if full { self.max_chars } else { self.tiles.len() };
        let mut data = Vec::with_capacity(slots * 8);
        for tile in &self.tiles {
            data.extend_from_slice(&tile.0);
        }
        data.resize(slots * 8, 0);
        data
    }
}
