// Eventide - a keyed, synchronous in-process event bus
//
// This library re-exports the event controller and, behind the `log`
// feature, the logging setup used to surface listener diagnostics.

// Re-export core functionality
pub use eventide_events::*;

// Re-export optional crates
#[cfg(feature = "log")]
pub use eventide_log;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        DiagnosticsSink,
        EventController,
        EventControllerBuilder,
        EventError,
        Listener,
        ListenerId,
        RecordingSink,
        TracingSink,
        ValidityProbe,
    };
}
