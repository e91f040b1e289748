mod config;
mod diagnostics;
mod display;
mod errors;
mod timer;

pub use config::ROLLING_TEXT_INTERVAL;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use display::{EMPTY_TEXTS_WARNING, RollingText};
pub use errors::RollingTextError;
pub use timer::{ManualTimer, ManualTimerHandle, RepeatingTimer, TickCallback, TokioIntervalTimer};
