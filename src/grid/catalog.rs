use super::GridVariant;
use super::en_v1::EN_V1;
use super::nl_v1::NL_V1;
use super::nl_v2::NL_V2;
use super::nl_v3::NL_V3;
use super::nl_v4::NL_V4;

/// Id of the variant selected on a fresh device (`NL_V4`)
pub const DEFAULT_VARIANT_ID: u8 = 3;

/// Every layout shipped with the firmware, ordered by id
pub static BUILTIN_VARIANTS: [GridVariant; 5] = [NL_V1, NL_V2, NL_V3, NL_V4, EN_V1];
