//! # Token Collation
//!
//! Pads a list of variable-length token sequences into a single
//! row-major ``[rows, cols]`` block.

use crate::{
    errors::{S2tgtError, S2tgtResult},
    types::TokenType,
};

/// Options for [`collate_tokens`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollateOptions<T: TokenType> {
    /// The padding token.
    pub pad: T,

    /// The token placed at the front when shifting.
    ///
    /// When `None`, the last token of each sequence is moved instead.
    pub eos: Option<T>,

    /// Place padding before the tokens rather than after.
    pub left_pad: bool,

    /// Shift right by one, moving the end-of-sentence token to the front.
    pub move_eos_to_beginning: bool,

    /// Round the column count up to a multiple of this value.
    pub pad_to_multiple: usize,
}

impl<T: TokenType> CollateOptions<T> {
    /// Right-padding with `pad`, no shifting.
    pub fn new(pad: T) -> Self {
        Self {
            pad,
            eos: None,
            left_pad: false,
            move_eos_to_beginning: false,
            pad_to_multiple: 1,
        }
    }

    /// Set the explicit front token for shifting.
    pub fn with_eos<E>(
        mut self,
        eos: E,
    ) -> Self
    where
        E: Into<Option<T>>,
    {
        self.eos = eos.into();
        self
    }

    /// Set left padding.
    pub fn with_left_pad(
        mut self,
        left_pad: bool,
    ) -> Self {
        self.left_pad = left_pad;
        self
    }

    /// Set eos shifting.
    pub fn with_move_eos_to_beginning(
        mut self,
        move_eos_to_beginning: bool,
    ) -> Self {
        self.move_eos_to_beginning = move_eos_to_beginning;
        self
    }

    /// Set the column multiple; `0` is treated as `1`.
    pub fn with_pad_to_multiple(
        mut self,
        pad_to_multiple: usize,
    ) -> Self {
        self.pad_to_multiple = pad_to_multiple.max(1);
        self
    }
}

/// A padded, row-major block of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedTokens<T: TokenType> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: TokenType> PaddedTokens<T> {
    /// The ``(rows, cols)`` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The flat row-major data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get one row.
    pub fn row(
        &self,
        index: usize,
    ) -> Option<&[T]> {
        if index < self.rows {
            let start = index * self.cols;
            Some(&self.data[start..start + self.cols])
        } else {
            None
        }
    }

    /// Iterate the rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |i| &self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Copy into nested vectors.
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

fn copy_shifted<T: TokenType>(
    src: &[T],
    dst: &mut [T],
    front: Option<T>,
) {
    let Some((&last, head)) = src.split_last() else {
        return;
    };
    dst[0] = front.unwrap_or(last);
    dst[1..].copy_from_slice(head);
}

/// Collate token sequences into a padded block.
///
/// ## Arguments
/// * `values` - the sequences; each row of the result holds one.
/// * `options` - the padding and shifting options.
///
/// ## Returns
/// The padded block, or [`S2tgtError::EmptyBatch`] when `values` is empty.
pub fn collate_tokens<T, S>(
    values: &[S],
    options: &CollateOptions<T>,
) -> S2tgtResult<PaddedTokens<T>>
where
    T: TokenType,
    S: AsRef<[T]>,
{
    let max_len = values
        .iter()
        .map(|v| v.as_ref().len())
        .max()
        .ok_or(S2tgtError::EmptyBatch)?;

    let multiple = options.pad_to_multiple.max(1);
    let cols = max_len.div_ceil(multiple) * multiple;
    let rows = values.len();

    let mut data = vec![options.pad; rows * cols];
    for (i, value) in values.iter().enumerate() {
        let src = value.as_ref();
        let row = &mut data[i * cols..(i + 1) * cols];
        let dst = if options.left_pad {
            &mut row[cols - src.len()..]
        } else {
            &mut row[..src.len()]
        };

        if options.move_eos_to_beginning {
            copy_shifted(src, dst, options.eos);
        } else {
            dst.copy_from_slice(src);
        }
    }

    Ok(PaddedTokens { data, rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_pad() {
        let values: Vec<Vec<u32>> = vec![vec![5, 6, 2], vec![7, 2]];
        let batch = collate_tokens(&values, &CollateOptions::new(0)).unwrap();
        assert_eq!(batch.shape(), (2, 3));
        assert_eq!(batch.to_nested(), vec![vec![5, 6, 2], vec![7, 2, 0]]);
        assert_eq!(batch.row(1), Some(&[7u32, 2, 0][..]));
        assert_eq!(batch.row(2), None);
        assert_eq!(batch.as_slice(), &[5, 6, 2, 7, 2, 0]);
    }

    #[test]
    fn test_left_pad() {
        let values: Vec<Vec<u32>> = vec![vec![5, 6, 2], vec![7, 2]];
        let options = CollateOptions::new(1).with_left_pad(true);
        let batch = collate_tokens(&values, &options).unwrap();
        assert_eq!(batch.to_nested(), vec![vec![5, 6, 2], vec![1, 7, 2]]);
    }

    #[test]
    fn test_move_eos_to_beginning() {
        let values: Vec<Vec<u32>> = vec![vec![5, 6, 2], vec![7, 2]];

        let options = CollateOptions::new(0).with_move_eos_to_beginning(true);
        let batch = collate_tokens(&values, &options).unwrap();
        assert_eq!(batch.to_nested(), vec![vec![2, 5, 6], vec![2, 7, 0]]);

        let options = options.with_eos(8);
        let batch = collate_tokens(&values, &options).unwrap();
        assert_eq!(batch.to_nested(), vec![vec![8, 5, 6], vec![8, 7, 0]]);
    }

    #[test]
    fn test_pad_to_multiple() {
        let values: Vec<Vec<u16>> = vec![vec![5, 6, 2], vec![2]];
        let options = CollateOptions::new(0).with_pad_to_multiple(4);
        let batch = collate_tokens(&values, &options).unwrap();
        assert_eq!(batch.shape(), (2, 4));
        assert_eq!(batch.to_nested(), vec![vec![5, 6, 2, 0], vec![2, 0, 0, 0]]);

        assert_eq!(CollateOptions::<u16>::new(0).with_pad_to_multiple(0).pad_to_multiple, 1);
    }

    #[test]
    fn test_empty_rows() {
        let values: Vec<Vec<u32>> = vec![vec![], vec![3]];
        let options = CollateOptions::new(0).with_move_eos_to_beginning(true);
        let batch = collate_tokens(&values, &options).unwrap();
        assert_eq!(batch.to_nested(), vec![vec![0], vec![3]]);
    }

    #[test]
    fn test_empty_batch() {
        let values: Vec<Vec<u32>> = vec![];
        assert!(matches!(
            collate_tokens(&values, &CollateOptions::new(0)),
            Err(S2tgtError::EmptyBatch)
        ));
    }
}
