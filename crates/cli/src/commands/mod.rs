pub mod finder;
pub mod subdigest;
