use graphite_builder::api::ChartBuilder;
use graphite_builder::core::ParamValue;
use graphite_builder::error::GraphiteError;
use graphite_builder::interpreter::{Call, CallOutcome};

fn expression(chart: &mut ChartBuilder, call: Call) -> String {
    chart
        .call(call)
        .expect("call resolves")
        .into_expression()
        .expect("call yields an expression")
        .into_string()
}

#[test]
fn dynamic_calls_cover_every_shape() {
    let mut chart = ChartBuilder::new();

    assert_eq!(
        expression(&mut chart, Call::with_args("sumSeries", ["a.b.*", "a.c.*"])),
        "sumSeries(a.b.*,a.c.*)"
    );
    assert_eq!(
        expression(&mut chart, Call::with_args("asPercent", ["a", "b"])),
        "asPercent(a,b)"
    );
    assert_eq!(
        expression(&mut chart, Call::new("secondYAxis").arg("a.b")),
        "secondYAxis(a.b)"
    );
    assert_eq!(
        expression(&mut chart, Call::with_args("legend", ["a.b.c", "A B C"])),
        "alias(a.b.c,'A+B+C')"
    );
    assert_eq!(
        expression(&mut chart, Call::with_args("movingAverage", ["a.b", "5min"])),
        "movingAverage(a.b,'5min')"
    );
}

#[test]
fn nested_dynamic_calls_compose_by_string() {
    let mut chart = ChartBuilder::new();
    let colored = expression(&mut chart, Call::with_args("color", ["x.y", "red"]));
    let aliased = expression(&mut chart, Call::new("legend").arg(colored).arg("Steal"));
    assert_eq!(aliased, "alias(color(x.y,'red'),'Steal')");
}

#[test]
fn fixed_shape_name_with_other_arity_uses_generic_rules() {
    let mut chart = ChartBuilder::new();
    assert_eq!(
        expression(&mut chart, Call::with_args("stacked", ["a", "b"])),
        "stacked(a,'b')"
    );

    let outcome = chart
        .call(Call::new("asPercent").arg("a.b"))
        .expect("one argument falls to a parameter set");
    assert!(matches!(outcome, CallOutcome::ParameterSet { .. }));
    assert_eq!(chart.parameter("asPercent"), Some(&ParamValue::from("a.b")));
}

#[test]
fn single_argument_calls_set_parameters_in_order() {
    let mut chart = ChartBuilder::open([("base_url", "http://h/render")], |chart| {
        chart.call(Call::new("width").arg(800))?;
        chart.call(Call::new("from").arg("-2hours"))?;
        chart.target("a.b");
        Ok(())
    })
    .expect("chart opens");
    chart.call(Call::new("width").arg(640)).expect("overwrite");

    assert_eq!(
        chart.render().expect("render"),
        "http://h/render?width=640&from=-2hours&target=a.b"
    );
}

#[test]
fn unrecognized_shapes_fail_with_name_and_arguments() {
    let mut chart = ChartBuilder::new();
    let err = chart
        .call(Call::with_args("blargen", [1, 2, 3]))
        .expect_err("three arguments");
    assert_eq!(
        err,
        GraphiteError::UnrecognizedCallShape {
            name: "blargen".to_owned(),
            args: "1,2,3".to_owned(),
        }
    );

    let err = chart.call(Call::new("blargen")).expect_err("zero arguments");
    assert!(matches!(err, GraphiteError::UnrecognizedCallShape { .. }));
    assert!(chart.parameters().is_empty());
}

#[test]
fn block_errors_abort_construction() {
    let result = ChartBuilder::open([("base_url", "http://h/render")], |chart| {
        chart.target("a.b");
        chart.call(Call::with_args("blargen", [1, 2, 3]))?;
        Ok(())
    });
    assert!(matches!(
        result,
        Err(GraphiteError::UnrecognizedCallShape { .. })
    ));
}

#[test]
fn labels_with_reserved_characters_are_escaped() {
    let chart = ChartBuilder::new();
    let expression = chart
        .function("alias", "a.b", "p99 & max's (ms)")
        .expect("expression");
    assert_eq!(expression.as_str(), "alias(a.b,'p99+%26+max%27s+%28ms%29')");
}

#[test]
fn dynamic_target_call_appends_a_target() {
    let mut chart = ChartBuilder::new();
    chart.set("base_url", "http://h/render").expect("base url");
    chart.target("a.b");

    let nested = expression(&mut chart, Call::with_args("legend", ["c.d", "C D"]));
    assert_eq!(expression(&mut chart, Call::new("target").arg(nested)), "alias(c.d,'C+D')");

    assert_eq!(chart.targets().len(), 2);
    assert!(chart.parameter("target").is_none());
    let url = chart.render().expect("render");
    assert_eq!(url, "http://h/render?target=a.b&target=alias(c.d,'C+D')");
    assert_eq!(url.matches("target=").count(), chart.targets().len());
}

#[test]
fn target_call_takes_exactly_one_argument() {
    let mut chart = ChartBuilder::new();
    let err = chart
        .call(Call::with_args("target", ["a.b", "c.d"]))
        .expect_err("two arguments");
    assert_eq!(
        err,
        GraphiteError::UnrecognizedCallShape {
            name: "target".to_owned(),
            args: "a.b,c.d".to_owned(),
        }
    );
    assert!(chart.call(Call::new("target")).is_err());
    assert!(chart.targets().is_empty());
}
