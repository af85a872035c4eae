mod attempt;
mod phrase;
mod question;
mod session;

pub use attempt::{Attempt, COMPLETED_AT_FORMAT, percentage};
pub use phrase::{Phrase, RepeatDrill};
pub use question::{Question, Quiz};
pub use session::{AnswerFeedback, Phase, SessionState};
