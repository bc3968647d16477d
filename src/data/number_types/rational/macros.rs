/// Shorthand for creating a rational number in tests.
///
/// # Panics
///
/// When the denominator is zero.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        $crate::data::number_types::rational::Rational::from_integer($value)
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer, $denom).unwrap()
    };
}
