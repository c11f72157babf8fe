use serde::{Deserialize, Serialize};

/// How out-of-range neighbours are synthesized near the image edge.
///
/// Illustrated on a row `abcdefgh`:
///   Reflect101  `gfedcb|abcdefgh|gfedcba`
///   Reflect     `fedcba|abcdefgh|hgfedcba`
///   Replicate   `aaaaaa|abcdefgh|hhhhhhh`
///
/// `Reflect101` is the default border policy of conventional convolution
/// routines and the one historical Tenengrad scores were produced with.
/// For a 3x3 kernel `Reflect` and `Replicate` select the same samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BorderMode {
    #[default]
    Reflect101,
    Reflect,
    Replicate,
}

impl BorderMode {
    /// Map a possibly out-of-range index onto `0..len`.
    ///
    /// `len` must be non-zero.
    #[inline]
    pub fn resolve(self, index: isize, len: usize) -> usize {
        debug_assert!(len > 0);
        let n = len as isize;
        if (0..n).contains(&index) {
            return index as usize;
        }
        match self {
            Self::Replicate => index.clamp(0, n - 1) as usize,
            Self::Reflect => {
                let period = 2 * n;
                let m = index.rem_euclid(period);
                (if m < n { m } else { period - 1 - m }) as usize
            }
            Self::Reflect101 => {
                if n == 1 {
                    return 0;
                }
                let period = 2 * (n - 1);
                let m = index.rem_euclid(period);
                (if m < n { m } else { period - m }) as usize
            }
        }
    }
}

impl std::fmt::Display for BorderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reflect101 => write!(f, "Reflect 101"),
            Self::Reflect => write!(f, "Reflect"),
            Self::Replicate => write!(f, "Replicate"),
        }
    }
}
