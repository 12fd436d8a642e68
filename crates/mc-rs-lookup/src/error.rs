use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot retrieve the enchantment's name; the enchantment is missing")]
    MissingEnchantment,
}
