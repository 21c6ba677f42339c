use tracing::{debug, trace};

use crate::core::{Expression, ParamValue, is_bare_identifier};
use crate::error::{BuildResult, GraphiteError};
use crate::interpreter::{
    ALIAS_CALL, Call, CallOutcome, FixedShape, generic_pair, interpret, quoted_label_call,
};
use crate::render::TARGET_KEY;

use super::ChartBuilder;

impl ChartBuilder {
    /// Appends a series to plot. Content is not validated.
    pub fn target(&mut self, expression: impl Into<Expression>) {
        let expression = expression.into();
        trace!(%expression, count = self.targets.len() + 1, "append target");
        self.targets.push(expression);
    }

    /// `sumSeries(a,b,...)`.
    pub fn sum_series<I, A>(&self, series: I) -> Expression
    where
        I: IntoIterator<Item = A>,
        A: Into<ParamValue>,
    {
        let args = series.into_iter().map(Into::into).collect::<Vec<_>>();
        FixedShape::SumSeries.format(&args)
    }

    /// `asPercent(is,of)`.
    pub fn as_percent(&self, is: impl Into<ParamValue>, of: impl Into<ParamValue>) -> Expression {
        FixedShape::AsPercent.format(&[is.into(), of.into()])
    }

    /// `secondYAxis(series)`.
    pub fn second_y_axis(&self, series: impl Into<ParamValue>) -> Expression {
        FixedShape::SecondYAxis.format(&[series.into()])
    }

    /// `stacked(series)`.
    pub fn stacked(&self, series: impl Into<ParamValue>) -> Expression {
        FixedShape::Stacked.format(&[series.into()])
    }

    /// `alias(series,'label')` with the label escaped.
    pub fn legend(&self, series: impl Into<ParamValue>, label: impl Into<ParamValue>) -> Expression {
        quoted_label_call(
            ALIAS_CALL,
            &series.into().to_string(),
            &label.into().to_string(),
        )
    }

    /// Two-argument call by name. A fixed shape taking two arguments keeps
    /// its own format; anything else becomes `name(series,'label')`.
    pub fn function(
        &self,
        name: &str,
        series: impl Into<ParamValue>,
        label: impl Into<ParamValue>,
    ) -> BuildResult<Expression> {
        let args: [ParamValue; 2] = [series.into(), label.into()];
        match FixedShape::from_name(name) {
            Some(shape) if shape.accepts(args.len()) => Ok(shape.format(&args)),
            _ => generic_pair(name, &args[0], &args[1]),
        }
    }

    /// Assigns a parameter, replacing any previous value in place.
    pub fn set(&mut self, name: &str, value: impl Into<ParamValue>) -> BuildResult<()> {
        if !is_bare_identifier(name) {
            return Err(GraphiteError::InvalidCallName(name.to_owned()));
        }
        if name == TARGET_KEY {
            return Err(GraphiteError::ReservedParameterName(name.to_owned()));
        }
        self.assign(name.to_owned(), value.into());
        Ok(())
    }

    /// Resolves an arbitrary call. Parameter assignments are applied to the
    /// session before the outcome is returned.
    ///
    /// `target` takes exactly one argument and appends it to the targets;
    /// the appended expression is returned.
    pub fn call(&mut self, call: Call) -> BuildResult<CallOutcome> {
        if call.name == TARGET_KEY {
            return self.call_target(call);
        }
        let outcome = interpret(call)?;
        if let CallOutcome::ParameterSet { key, value } = &outcome {
            self.assign(key.clone(), value.clone());
        }
        Ok(outcome)
    }

    fn call_target(&mut self, call: Call) -> BuildResult<CallOutcome> {
        let Call { name, mut args } = call;
        if args.len() != 1 {
            return Err(GraphiteError::UnrecognizedCallShape {
                name,
                args: args
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            });
        }
        let expression = Expression::new(args.swap_remove(0).to_string());
        self.target(expression.clone());
        Ok(CallOutcome::Expression(expression))
    }

    fn assign(&mut self, key: String, value: ParamValue) {
        let replaced = self.parameters.insert(key.clone(), value);
        debug!(parameter = %key, replaced = replaced.is_some(), "set parameter");
    }
}
