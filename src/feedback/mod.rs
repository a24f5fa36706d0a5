// Feedback recording module

mod recorder;

pub use recorder::{FeedbackAck, FeedbackKind, FeedbackRecord, FeedbackRecorder, FeedbackStats};
