//! Matching engine for DRG grouping.
//!
//! Reconciles a patient's diagnoses and procedures against a reference
//! grouping catalog through a cascade of exact-code, alias and fuzzy-name
//! comparison, built on text normalization and edit-distance similarity
//! primitives. All matching functions are pure over their arguments; only
//! the per-run [`NameCollector`] holds mutable state.

pub mod cascade;
pub mod code;
pub mod collector;
pub mod error;
pub mod filter;
pub mod matchers;
pub mod normalize;
pub mod similarity;

pub use cascade::{GroupMatcher, MatchStage};
pub use code::{ParsedEntry, parse_entry};
pub use collector::NameCollector;
pub use error::MatchError;
pub use filter::filter_by_procedure_presence;
pub use matchers::{
    DEFAULT_NAME_THRESHOLD, calculate_similarity, exact_code_match, similarity_match,
    similarity_match_default,
};
pub use normalize::{
    NormalizerConfig, collapse_whitespace, extract_bracket_content, main_name, normalize,
    normalize_numerals, strip_modifiers, to_half_width,
};
pub use similarity::{SimilarityBand, edit_distance, similarity};
