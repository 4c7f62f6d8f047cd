mod args;
mod report;

pub use args::{
    Args,
    Settings,
    API_KEY_ENV,
    DEFAULT_ROUND,
};
pub use report::{
    report,
    run,
    ReportError,
    Step,
    EXIT_CONFIGURATION,
    EXIT_NETWORK,
    EXIT_OUTPUT,
    EXIT_REMOTE,
};
