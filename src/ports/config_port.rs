//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_uint(&self, section: &str, key: &str) -> Result<Option<u64>, String>;
}
