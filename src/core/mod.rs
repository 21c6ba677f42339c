pub mod binding;
pub mod escape;
pub mod expression;
pub mod primitives;
pub mod value;

pub use binding::Binding;
pub use escape::form_escape;
pub use expression::Expression;
pub use primitives::{datetime_to_graphite_time, is_bare_identifier};
pub use value::{ParamValue, Scalar};
