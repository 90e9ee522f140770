/// Checked whenever a config is loaded from or written to its backing store.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
