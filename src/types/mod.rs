mod bot_match;
mod identity;
mod section;

pub use bot_match::*;
pub use identity::*;
pub use section::*;
