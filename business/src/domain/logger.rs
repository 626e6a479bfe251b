/// Logging port used by the use cases.
///
/// Implemented in the infrastructure layer so the domain stays free of any
/// logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
