//! # Filter Stages
//!
//! One pure builder per stage. Each reads its own configuration section and
//! returns the stage's filter expression, or `None` when the stage is
//! absent. Defaults live next to each builder as named constants.
//!
//! | Stage | Trigger | Expression |
//! |---|---|---|
//! | eq | `eq.enabled` | `eq=brightness=B:contrast=C:gamma=G:saturation=S` |
//! | color_channels | any multiplier other than 1 | `eq=red_mul=R:green_mul=G:blue_mul=B` |
//! | sharpen | `sharpen.enabled` | `unsharp=X:Y:A:XC:YC:AC` |
//! | sharpen_extra | `sharpen.extra_enabled` | `unsharp=M:M:A` |
//! | deblur | `deblur.enabled` | `convolution='K'` or repeated `unsharp=M:M:A` |
//! | denoise | `denoise.enabled` | `hqdn3d=L:C:T:CT` |
//! | blur | `blur.enabled` | `boxblur=R` |
//! | grain | `grain.enabled` | `noise=alls=S:allf=F` |
//! | custom | non-empty `custom_filters` | the list joined with `,` |

pub mod catalog;
pub mod value;

pub mod blur;
pub mod color_channels;
pub mod custom;
pub mod deblur;
pub mod denoise;
pub mod equalize;
pub mod grain;
pub mod sharpen;

pub use catalog::StageKind;
pub use deblur::DeblurMethod;
pub use value::ParamValue;
