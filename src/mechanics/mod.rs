//! Small pure formulas shared by the operator, the driver and the tests.

pub mod closed_form;
pub mod distance;
pub mod spacing;
pub mod utility;

pub use distance::*;
pub use spacing::*;
pub use utility::*;
