//! Bundled extensions.

pub mod general;
pub mod moderation;
pub mod owner;

use crate::extensions::Extension;

/// Every extension the bot knows about, in load order.
pub fn registry() -> Vec<Extension> {
    vec![
        Extension::new("general", general::setup),
        Extension::new("moderation", moderation::setup),
        Extension::new("owner", owner::setup),
    ]
}
