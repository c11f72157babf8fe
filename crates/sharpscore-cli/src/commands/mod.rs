pub mod compare;
pub mod config;
pub mod score;
pub mod sharpen;

use clap::ValueEnum;
use sharpscore_core::quality::BorderMode;
use sharpscore_core::sharpen::SharpenMethod;

/// Border-extension policy for the Sobel kernel.
#[derive(Clone, Copy, ValueEnum)]
pub enum BorderArg {
    /// gfedcb|abcdefgh|gfedcba (default)
    Reflect101,
    /// fedcba|abcdefgh|hgfedcba
    Reflect,
    /// aaaaaa|abcdefgh|hhhhhhh
    Replicate,
}

impl From<BorderArg> for BorderMode {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Reflect101 => BorderMode::Reflect101,
            BorderArg::Reflect => BorderMode::Reflect,
            BorderArg::Replicate => BorderMode::Replicate,
        }
    }
}

/// Sharpening filter.
#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    /// orig + amount * (orig - 3x3 box blur)
    Unsharp,
    /// 3x3 kernel [-1 -1 -1; -1 9 -1; -1 -1 -1]
    Laplace,
}

impl From<MethodArg> for SharpenMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Unsharp => SharpenMethod::Unsharp,
            MethodArg::Laplace => SharpenMethod::Laplace,
        }
    }
}
