//! Nonlinear substitution over pairs of trits.

use super::CANONICAL_SUBSTITUTION;
use crate::error::{CurlResult, ErrorCode};
use crate::trit::Trit;

/// Named substitution rules.
///
/// Each rule selects one fixed [`SubstitutionTable`]. Tables outside this
/// list come from [`SubstitutionTable::from_rows`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubstitutionRule {
    /// The table behind every reference digest.
    #[default]
    Canonical,
}

impl SubstitutionRule {
    /// The table this rule selects.
    pub const fn table(self) -> SubstitutionTable {
        match self {
            SubstitutionRule::Canonical => SubstitutionTable::CANONICAL,
        }
    }
}

impl From<SubstitutionRule> for SubstitutionTable {
    fn from(rule: SubstitutionRule) -> Self {
        rule.table()
    }
}

/// A total function `(a, b) -> Trit` given by a 3x3 table indexed `[a][b]`.
///
/// [`SubstitutionTable::CANONICAL`] is the table every reference digest is
/// computed with:
///
/// ```text
/// a\b  0  1  2
/// 0    2  2  0
/// 1    1  0  2
/// 2    0  1  1
/// ```
///
/// Other tables can be supplied through [`SubstitutionTable::from_rows`].
/// Digests computed with different tables are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubstitutionTable {
    rows: [[Trit; 3]; 3],
}

impl SubstitutionTable {
    /// The canonical table, generated from `params/metadata.json`.
    pub const CANONICAL: SubstitutionTable =
        SubstitutionTable::from_rows_const(CANONICAL_SUBSTITUTION);

    const fn from_rows_const(rows: [[u8; 3]; 3]) -> Self {
        let mut out = [[Trit::ZERO; 3]; 3];
        let mut a = 0;
        while a < 3 {
            let mut b = 0;
            while b < 3 {
                out[a][b] = Trit::from_u8_const(rows[a][b]);
                b += 1;
            }
            a += 1;
        }
        Self { rows: out }
    }

    /// Build a table from raw rows.
    ///
    /// Returns `E103_InvalidSubstitutionEntry(row, col, value)` for the first
    /// entry outside {0, 1, 2}.
    pub fn from_rows(rows: [[u8; 3]; 3]) -> CurlResult<Self> {
        let mut out = [[Trit::ZERO; 3]; 3];
        for (a, row) in rows.iter().enumerate() {
            for (b, &value) in row.iter().enumerate() {
                out[a][b] = Trit::new(value).map_err(|_| {
                    ErrorCode::E103_InvalidSubstitutionEntry(a as u64, b as u64, value as u64)
                })?;
            }
        }
        Ok(Self { rows: out })
    }

    /// Look up `sub(a, b)`.
    #[inline]
    pub fn apply(&self, a: Trit, b: Trit) -> Trit {
        self.rows[a.index()][b.index()]
    }

    /// The table rows, indexed `[a][b]`.
    pub fn rows(&self) -> &[[Trit; 3]; 3] {
        &self.rows
    }

    /// Length of the cycle `v -> sub(v, v) -> ...` starting at `v`, or `None`
    /// if `v` never comes back.
    ///
    /// A uniform state holding `v` stays uniform under every round, so it is
    /// a fixed point of the transform exactly when this period divides the
    /// round count.
    pub fn diagonal_period(&self, v: Trit) -> Option<usize> {
        let mut x = v;
        for steps in 1..=3 {
            x = self.apply(x, x);
            if x == v {
                return Some(steps);
            }
        }
        None
    }
}

impl Default for SubstitutionTable {
    fn default() -> Self {
        Self::CANONICAL
    }
}

/// Apply the canonical substitution to raw values.
///
/// `a` is validated first, then `b`; an out-of-range value yields
/// `E100_InvalidTritValue` with index 0 for `a` and 1 for `b`.
pub fn substitute(a: u8, b: u8) -> CurlResult<Trit> {
    let a = Trit::at(0, a)?;
    let b = Trit::at(1, b)?;
    Ok(SubstitutionTable::CANONICAL.apply(a, b))
}
