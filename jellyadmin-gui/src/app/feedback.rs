/// Short signal given to the user when something happens on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSignal {
    /// A control was pressed, whatever comes out of it.
    Impact,
    Success,
    Error,
}

pub trait Feedback: std::fmt::Debug {
    fn notify(&self, signal: FeedbackSignal);
}

/// Desktops have no haptic engine, signals only end up in the logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFeedback;

impl Feedback for LogFeedback {
    fn notify(&self, signal: FeedbackSignal) {
        tracing::debug!("Feedback: {:?}", signal);
    }
}
