use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CpuSet {
    indices: BTreeSet<usize>,
}

impl CpuSet {
    pub fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
        }
    }

    pub fn from_indices<I: IntoIterator<Item = usize>>(indices: I) -> Self {
        Self {
            indices: indices.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    // Err carries the first index that doesn't fit in a word
    pub fn to_word_mask(&self) -> Result<usize, usize> {
        let bits = usize::BITS as usize;
        let mut mask = 0usize;
        for index in self.iter() {
            if index >= bits {
                return Err(index);
            }
            mask |= 1 << index;
        }
        Ok(mask)
    }
}

impl fmt::Display for CpuSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for index in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            write!(f, "{}", index)?;
            first = false;
        }
        Ok(())
    }
}
