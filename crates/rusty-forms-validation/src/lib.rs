//! rusty-forms validation primitives
//!
//! Pure checks with no notion of fields, labels or messages. The rule engine
//! in `rusty-forms` composes these into per-field rules and owns the wording.

pub mod choice;
pub mod email;
pub mod numeric;
pub mod string;

pub use choice::*;
pub use email::*;
pub use numeric::*;
pub use string::*;
