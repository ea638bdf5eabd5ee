// Session State Machine: the two user inputs, the three results, and the
// single-operation guard sequencing analyze → cover letter → questions.

pub mod handlers;
pub mod machine;
pub mod state;

pub use machine::Session;
