//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Keys present in a section; empty when the section is absent.
    /// Ordering is backend-defined.
    fn keys(&self, section: &str) -> Vec<String>;
}
