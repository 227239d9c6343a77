//! Error macros for graphanim

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphAnimError::invalid_value($context, $value))
    };
}

/// Macro for creating already-exists errors
#[macro_export]
macro_rules! bail_exists {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphAnimError::already_exists(
            $context, $value,
        ))
    };
}
