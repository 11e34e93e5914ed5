//! poker-hands: poker hand classification library
//!
//! Goals:
//! - Classify any small set of cards into its strongest poker category
//! - Total order over hands of one category for tie-breaks
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! A [`builder::BuilderChain`] holds category builders from strongest to
//! weakest. The first builder that can carve the cards into its shape wins
//! and the resulting [`hand::Hand`] is ranked by its position in the chain.
//!
//! ## Quick start
//! ```
//! use poker_hands::builder::BuilderChain;
//! use poker_hands::cards::parse_cards;
//! use poker_hands::hand::compare_hands;
//! use poker_hands::rules::names;
//!
//! let chain = BuilderChain::standard();
//! let wheel = chain.classify(&parse_cards("Ah 2d 3c 4s 5h").unwrap()).unwrap();
//! let broadway = chain.classify(&parse_cards("Th Jd Qc Ks Ah").unwrap()).unwrap();
//! assert_eq!(wheel.name(), names::STRAIGHT);
//! assert!(compare_hands(&broadway, &wheel).unwrap().is_gt());
//! ```

pub mod builder;
pub mod cards;
pub mod compare;
pub mod hand;
pub mod rules;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
