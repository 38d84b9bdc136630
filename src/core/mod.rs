//! Interactive side of the client
//!
//! This module contains:
//! - The prompt loop reading operator input and printing replies
//! - Session startup wiring configuration, provider and loop together

mod prompt_loop;
mod session;

pub use prompt_loop::*;
pub use session::*;
