mod construct;

#[cfg(feature = "serde")]
mod serde_text;
