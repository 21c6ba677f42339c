//! Call interpreter.
//!
//! Every call made against a builder is resolved here: fixed-shape names are
//! formatted by [`FixedShape`], anything else falls back to a rule keyed on
//! argument count.

mod fixed_shape;

pub use fixed_shape::FixedShape;

use smallvec::SmallVec;
use tracing::{trace, warn};

use crate::core::{Expression, ParamValue, form_escape, is_bare_identifier};
use crate::error::{BuildResult, GraphiteError};

use fixed_shape::raw_join;

/// Friendlier name accepted for Graphite's `alias`.
pub const LEGEND_CALL: &str = "legend";
pub const ALIAS_CALL: &str = "alias";

pub type CallArgs = SmallVec<[ParamValue; 4]>;

/// A named call with positional arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: CallArgs,
}

impl Call {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: CallArgs::new(),
        }
    }

    pub fn with_args<I, A>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ParamValue>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn arg(mut self, value: impl Into<ParamValue>) -> Self {
        self.args.push(value.into());
        self
    }
}

/// What a call resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum CallOutcome {
    Expression(Expression),
    ParameterSet { key: String, value: ParamValue },
}

impl CallOutcome {
    #[must_use]
    pub fn into_expression(self) -> Option<Expression> {
        match self {
            Self::Expression(expression) => Some(expression),
            Self::ParameterSet { .. } => None,
        }
    }
}

/// Resolves `call` without touching any session state.
pub fn interpret(call: Call) -> BuildResult<CallOutcome> {
    let Call { name, mut args } = call;

    if let Some(shape) = FixedShape::from_name(&name) {
        if shape.accepts(args.len()) {
            let expression = shape.format(&args);
            trace!(call = shape.name(), %expression, "fixed-shape call");
            return Ok(CallOutcome::Expression(expression));
        }
        warn!(
            call = shape.name(),
            arity = args.len(),
            "fixed-shape call arity mismatch, using generic dispatch"
        );
    }

    validate_call_name(&name)?;
    match args.len() {
        2 => generic_pair(&name, &args[0], &args[1]).map(CallOutcome::Expression),
        1 => {
            let value = args.swap_remove(0);
            Ok(CallOutcome::ParameterSet { key: name, value })
        }
        _ => Err(unrecognized(&name, &args)),
    }
}

/// Generic two-argument rule: `name(series,'label')`, with `legend`
/// rewritten to `alias`. Fixed shapes are not consulted.
pub fn generic_pair(name: &str, series: &ParamValue, label: &ParamValue) -> BuildResult<Expression> {
    validate_call_name(name)?;
    let function = if name == LEGEND_CALL { ALIAS_CALL } else { name };
    let expression = quoted_label_call(function, &series.to_string(), &label.to_string());
    trace!(call = %name, %expression, "generic two-argument call");
    Ok(expression)
}

/// `function(series,'escaped label')`.
#[must_use]
pub fn quoted_label_call(function: &str, series: &str, label: &str) -> Expression {
    Expression::new(format!("{function}({series},'{}')", form_escape(label)))
}

fn validate_call_name(name: &str) -> BuildResult<()> {
    if is_bare_identifier(name) {
        Ok(())
    } else {
        Err(GraphiteError::InvalidCallName(name.to_owned()))
    }
}

fn unrecognized(name: &str, args: &[ParamValue]) -> GraphiteError {
    GraphiteError::UnrecognizedCallShape {
        name: name.to_owned(),
        args: raw_join(args),
    }
}
