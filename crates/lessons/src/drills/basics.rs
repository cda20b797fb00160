/// Corrected hello-world line.
#[inline]
pub fn greeting() -> &'static str {
    "Hello, world!"
}

/// Message for a name that is bound before it is read.
pub fn name_message(name: &str) -> String {
    format!("Name defined: {name}")
}
