use text_size::TextSize;

/// Maps byte offsets to 1-based line numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    newlines: Vec<TextSize>,
}

impl LineIndex {
    /// Records the offset of every `\n` in `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let newlines = text
            .match_indices('\n')
            .map(|(offset, _)| TextSize::from(offset as u32))
            .collect();
        Self { newlines }
    }

    /// Returns the line of an exclusive match end: newlines at or after
    /// `offset` are not counted.
    #[must_use]
    pub fn line_of(&self, offset: TextSize) -> u32 {
        self.newlines.partition_point(|&newline| newline < offset) as u32 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_map_to_lines() {
        let index = LineIndex::new("ab\ncd\n\nef");
        assert_eq!(index.line_of(0.into()), 1);
        assert_eq!(index.line_of(2.into()), 1);
        assert_eq!(index.line_of(3.into()), 2);
        assert_eq!(index.line_of(4.into()), 2);
        assert_eq!(index.line_of(9.into()), 4);
    }
}
