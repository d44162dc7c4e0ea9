//! Many-to-few mapping from concrete calls to canonical families.
//!
//! The yardage and clock models only understand the small closed sets
//! [`CoreOffenseFamily`] and [`CoreDefenseFamily`]. This module is the single
//! boundary where the open-ended catalog of concrete play names is
//! collapsed onto them, so the catalog can grow without touching resolution.
//!
//! Both directions are total: an unrecognized identifier falls back to
//! [`CoreOffenseFamily::ShortPass`] or [`CoreDefenseFamily::Base`].

pub mod defense;
pub mod family;
pub mod offense;

pub use defense::defense_family_for;
pub use family::{CoreDefenseFamily, CoreOffenseFamily};
pub use offense::offense_family_for;

/// Normalize an identifier to upper snake case.
///
/// `"play-action shot"` and `"Play_Action_Shot"` both become
/// `"PLAY_ACTION_SHOT"`.
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    identifier
        .trim()
        .chars()
        .map(|c| match c {
            '-' => '_',
            c if c.is_whitespace() => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
