use exprcalc::{Evaluator, SyntaxError, Value};

fn eval(line: &str) -> Result<Value, SyntaxError> {
    Evaluator::new().parse(line)
}

fn assert_int(expected: i64, line: &str) {
    match eval(line) {
        Ok(Value::Int(n)) => assert_eq!(expected, n, "input: {:?}", line),
        other => panic!("expected Int({}) for {:?}, got {:?}", expected, line, other),
    }
}

fn assert_float(expected: f64, line: &str) {
    match eval(line) {
        Ok(Value::Float(x)) => assert!(
            (x - expected).abs() < 1e-9,
            "input: {:?}, expected {}, got {}",
            line,
            expected,
            x
        ),
        other => panic!("expected Float({}) for {:?}, got {:?}", expected, line, other),
    }
}

fn assert_failure(line: &str) {
    if let Ok(value) = eval(line) {
        panic!("input {:?} succeeded with {:?} but was expected to fail", line, value);
    }
}

#[test]
fn precedence_and_associativity() {
    assert_int(7, "1+2*3");
    assert_int(7, "3*2+1");
    assert_int(9, "(1+2)*3");
    assert_int(-1, "1-1-1");
    assert_float(1.0, "27/3/3/3");
    assert_int(8, "(1-(2-3))*4");
}

#[test]
fn integer_arithmetic_stays_integer() {
    assert_int(4, "2+2");
    assert_int(42, "42");
    assert_int(27, "3*3*3");
    assert_int(1, "(((((1)))))");
}

#[test]
fn floats_are_contagious() {
    assert_float(4.0, "2+2.0");
    assert_float(2.0, "4/2");
    assert_float(3.0, "3*3/3");
    assert_float(0.1, ".1");
    assert_float(0.1, "0.1");
    assert_float(0.1, "000.1");
    assert_float(0.2, ".1+.1");
    assert_float(0.01, ".1*.1");
    assert_float(1.0, ".1/.1");
}

#[test]
fn division_by_zero_is_nan() {
    for line in ["1/0", "-1/0", "0/0"] {
        let value = eval(line).unwrap();
        assert!(value.is_nan(), "input: {:?} gave {:?}", line, value);
        // NaN compares unequal to itself
        assert_ne!(value, value);
    }
}

#[test]
fn unary_minus_chains() {
    assert_int(-1, "-1");
    assert_int(1, "--1");
    assert_int(5, "--5");
    assert_int(-5, "---5");
    assert_int(4, "--1--1--1--1");
    assert_int(10, "------------10");
}

#[test]
fn whitespace_is_insignificant() {
    assert_int(3, "1+2");
    assert_int(3, "1 + 2");
    assert_int(3, "  1 + 2");
    assert_int(3, "  1 + 2   ");
}

#[test]
fn malformed_input_is_rejected() {
    assert_failure("abc");
    assert_failure("(42a");
    assert_failure("1+a");
    assert_failure("1a");
    assert_failure("(1");
    assert_failure("1+2)");
    assert_failure("1+1+");
    assert_failure("");
    assert_failure("   ");
}

#[test]
fn repeated_parses_are_independent() {
    let mut calc = Evaluator::new();
    assert_eq!(Ok(Value::Int(7)), calc.parse("1+2*3"));
    assert_eq!(Ok(Value::Int(7)), calc.parse("1+2*3"));
    assert!(calc.parse("(1").is_err());
    assert_eq!(Ok(Value::Int(7)), calc.parse("1+2*3"));
}

#[test]
fn display_round_trips_the_numeric_kind() {
    assert_eq!("4", eval("2+2").unwrap().to_string());
    assert_eq!("2.0", eval("4/2").unwrap().to_string());
    assert_eq!("NaN", eval("1/0").unwrap().to_string());
}
