/// Minimum pixel count (h*w) to use row-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Smallest width or height the 3x3 Sobel kernel accepts.
pub const MIN_IMAGE_DIMENSION: usize = 3;

/// Sobel horizontal-derivative kernel, applied as a correlation.
pub const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Sobel vertical-derivative kernel (transpose of [`SOBEL_X`]).
pub const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// File extension scanned for when the config names none.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Score table written when the config names no output path.
pub const DEFAULT_OUTPUT_FILE: &str = "clarity_scores.csv";

/// Label prefix for collections without an explicit label ("Directory 1", ...).
pub const DEFAULT_LABEL_PREFIX: &str = "Directory";

/// Unsharp-mask strength used when none is given.
pub const DEFAULT_UNSHARP_AMOUNT: f32 = 1.35;

/// JPEG quality of sharpened output.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Extensions the sharpening batch tries in order; the first that matches
/// any file wins.
pub const SHARPEN_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// 3x3 Laplacian sharpening kernel (identity plus negated Laplacian).
pub const LAPLACE_KERNEL: [[i32; 3]; 3] = [[-1, -1, -1], [-1, 9, -1], [-1, -1, -1]];

/// 3x3 box kernel; the sum is divided by 9 to form the unsharp-mask blur.
pub const BOX_KERNEL: [[i32; 3]; 3] = [[1, 1, 1], [1, 1, 1], [1, 1, 1]];
