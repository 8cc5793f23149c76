//! PXstats Ingest — turns free-text notices into classified events.
//!
//! The pipeline is three pure stages: normalize (one searchable blob per
//! notice), extract (name, IV triple, rarity flag), classify (ordered
//! phrase predicates). Composition lives in `pxstats-runtime`.

pub mod classify;
pub mod extract;
pub mod normalize;

pub use classify::{classify, Classification};
pub use extract::{extract_iv, extract_name, extract_shiny};
pub use normalize::{normalize_notice, NoticeText};
