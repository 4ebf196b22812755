#![warn(warnings, rust_2018_idioms)]
#![forbid(unsafe_code)]
#![warn(
    clippy::allow_attributes_without_reason,
    clippy::as_ptr_cast_mut,
    clippy::unnecessary_cast,
    clippy::clone_on_ref_ptr,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::deref_by_slicing,
    clippy::empty_structs_with_brackets,
    clippy::float_cmp_const,
    clippy::fn_to_numeric_cast_any,
    clippy::indexing_slicing,
    clippy::iter_kv_map,
    clippy::manual_clamp,
    clippy::manual_filter,
    clippy::map_err_ignore,
    clippy::uninlined_format_args,
    clippy::unused_format_specs,
    clippy::single_char_lifetime_names,
    clippy::str_to_string,
    clippy::string_add,
    clippy::string_slice,
    clippy::string_to_string,
    clippy::todo,
    clippy::try_err
)]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![allow(clippy::module_inception, clippy::module_name_repetitions)]

pub use ethers::middleware;
pub use ethers::providers;
pub use ethers::{
    core,
    core::{abi, types},
};

/// Easy imports of frequently used type definitions and traits.
pub mod prelude {
    pub use super::core::{types::*, *};

    pub use super::middleware::*;

    pub use super::providers::*;
}

pub mod artifacts;
pub mod cli;
pub mod dapp_utils;
pub mod deps;
pub mod gas;
pub mod net;
pub mod project;
