#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Province name normalization, alias resolution, and boundary datasets.
//!
//! Chinese administrative names arrive in many spellings: warning feeds
//! carry full official names (`广西壮族自治区`), boundary files may carry
//! either full or short names, and user input can be anything in between.
//! This crate reduces every variant to a canonical short form and maps it
//! onto whatever display names the active boundary dataset uses.

pub mod alias;
pub mod boundary;
pub mod normalize;

pub use alias::{AliasConflict, AliasIndex, resolve_capital};
pub use boundary::{BoundaryDataset, BoundaryError, SOUTH_SEA_INSET};
pub use normalize::normalize_name;
