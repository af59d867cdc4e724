pub(crate) const FLAG_PREFIX: &str = "--";
// The value recorded for a flag that is given without a value (ex: `--verbose`).
pub(crate) const FLAG_PRESENT: &str = "True";

pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Show this screen.";
pub(crate) const VERSION_NAME: &str = "version";
pub(crate) const VERSION_MESSAGE: &str = "Show version information.";

pub(crate) const NO_DOCUMENTATION: &str = "No documentation provided.";
