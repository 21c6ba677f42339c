use crate::core::{Expression, ParamValue};

/// Series functions with hand-specified formatting.
///
/// Arguments of a fixed-shape call are written verbatim and comma-joined;
/// they are never escaped or quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedShape {
    /// `sumSeries(a,b,...)`, any number of arguments.
    SumSeries,
    /// `asPercent(is,of)`.
    AsPercent,
    /// `secondYAxis(series)`.
    SecondYAxis,
    /// `stacked(series)`.
    Stacked,
}

impl FixedShape {
    pub const ALL: [Self; 4] = [
        Self::SumSeries,
        Self::AsPercent,
        Self::SecondYAxis,
        Self::Stacked,
    ];

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|shape| shape.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SumSeries => "sumSeries",
            Self::AsPercent => "asPercent",
            Self::SecondYAxis => "secondYAxis",
            Self::Stacked => "stacked",
        }
    }

    #[must_use]
    pub fn accepts(self, arity: usize) -> bool {
        match self {
            Self::SumSeries => true,
            Self::AsPercent => arity == 2,
            Self::SecondYAxis | Self::Stacked => arity == 1,
        }
    }

    /// Formats `name(arg1,...,argN)`. Arity is the caller's concern.
    #[must_use]
    pub fn format(self, args: &[ParamValue]) -> Expression {
        Expression::new(format!("{}({})", self.name(), raw_join(args)))
    }
}

pub(crate) fn raw_join(args: &[ParamValue]) -> String {
    args.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for shape in FixedShape::ALL {
            assert_eq!(FixedShape::from_name(shape.name()), Some(shape));
        }
        assert_eq!(FixedShape::from_name("legend"), None);
    }

    #[test]
    fn arity_table() {
        assert!(FixedShape::SumSeries.accepts(0));
        assert!(FixedShape::SumSeries.accepts(5));
        assert!(FixedShape::AsPercent.accepts(2));
        assert!(!FixedShape::AsPercent.accepts(1));
        assert!(FixedShape::Stacked.accepts(1));
        assert!(!FixedShape::Stacked.accepts(2));
    }

    #[test]
    fn list_arguments_flatten_into_the_join() {
        let args = [ParamValue::from(vec!["a.b.*", "a.c.*"]), ParamValue::from("a.d.*")];
        assert_eq!(
            FixedShape::SumSeries.format(&args).as_str(),
            "sumSeries(a.b.*,a.c.*,a.d.*)"
        );
    }
}
