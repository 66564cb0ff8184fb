use std::fs;

use mython::run_program;
use walkdir::WalkDir;

fn run_output(source: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_program(source, &mut output) {
        panic!("Script failed: {e}\nScript:\n{source}");
    }
    String::from_utf8(output).expect("interpreter output should be valid UTF-8")
}

fn assert_output(source: &str, expected: &str) {
    assert_eq!(run_output(source), expected, "script:\n{source}");
}

fn assert_failure(source: &str) {
    if run_program(source, &mut Vec::new()).is_ok() {
        panic!("Script succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn program_corpus_works() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "my")
                                      })
    {
        count += 1;
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
                           panic!("Missing expected output for {path:?}: {e}")
                       });
        assert_eq!(run_output(&source), expected, "program {path:?}");
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 1 + 2", "3\n");
    assert_output("print 7 - 2 * 3", "1\n");
    assert_output("print (1 + 2) * 3", "9\n");
    assert_output("print 7 / 2", "3\n");
    assert_output("print -5 + 2", "-3\n");
    assert_output("print 10 - 2 - 3", "5\n");
}

#[test]
fn string_concatenation() {
    assert_output("x = 'a'\ny = 'b'\nprint x + y", "ab\n");
    assert_output("print 'foo' + \"bar\"", "foobar\n");
}

#[test]
fn print_forms() {
    assert_output("print 1, 'a', True, None", "1 a True None\n");
    assert_output("print", "\n");
    assert_output("print 'tab:\\tend'", "tab:\tend\n");
}

#[test]
fn stringify_builtin() {
    assert_output("print str(42) + '!'", "42!\n");
    assert_output("print str(None)", "None\n");
    assert_output("print str(1 < 2)", "True\n");
}

#[test]
fn if_else_branches() {
    assert_output("if 1 < 2:\n  print 'yes'\nelse:\n  print 'no'", "yes\n");
    assert_output("if 2 < 1:\n  print 'yes'\nelse:\n  print 'no'", "no\n");
    assert_output("if 2 < 1:\n  print 'yes'\nprint 'after'", "after\n");
}

#[test]
fn suites_share_the_enclosing_closure() {
    assert_output("x = 1\nif x == 1:\n  y = 2\nprint y", "2\n");
}

#[test]
fn comparisons_between_plain_values() {
    assert_output("print 'abc' < 'abd'", "True\n");
    assert_output("print 2 >= 2, 2 > 2, 1 != 2", "True False True\n");
    assert_output("print False < True", "True\n");
}

#[test]
fn logical_operators() {
    assert_output("print True or False, True and False, not False", "True False True\n");
}

#[test]
fn logical_operands_are_both_evaluated() {
    // Even a decisive left operand does not skip the right one.
    let source = "class T:\n  def __init__(self):\n    self.hits = 0\n  def bump(self):\n    \
                  self.hits = self.hits + 1\n    return True\nt = T()\nx = t.bump() or t.bump()\n\
                  print t.hits";
    assert_output(source, "2\n");
}

#[test]
fn classes_print_by_name() {
    assert_output("class C:\n  def f(self):\n    return 1\nprint C", "Class C\n");
}

#[test]
fn instances_print_through_str_method() {
    let source = "class C:\n  def __str__(self):\n    return 'hi'\nc = C()\nprint c";
    assert_output(source, "hi\n");
}

#[test]
fn str_method_is_inherited() {
    let source = "class A:\n  def __str__(self):\n    return 'A!'\nclass B(A):\n  def f(self):\n    \
                  return 1\nprint B()";
    assert_output(source, "A!\n");
}

#[test]
fn inherited_methods_dispatch_on_the_receiver() {
    let source = "class A:\n  def f(self):\n    return 1\nclass B(A):\n  def g(self):\n    \
                  return self.f() + 10\nprint B().g()";
    assert_output(source, "11\n");
}

#[test]
fn init_runs_on_construction() {
    let source = "class Counter:\n  def __init__(self):\n    self.count = 0\n  def add(self):\n    \
                  self.count = self.count + 1\nc = Counter()\nc.add()\nc.add()\nprint c.count";
    assert_output(source, "2\n");
}

#[test]
fn instances_have_independent_fields() {
    let source = "class Box:\n  def __init__(self, v):\n    self.v = v\na = Box(1)\nb = Box(2)\n\
                  a.v = 10\nprint a.v, b.v";
    assert_output(source, "10 2\n");
}

#[test]
fn add_dispatches_through_the_special_method() {
    let source = "class Money:\n  def __init__(self, amount):\n    self.amount = amount\n  \
                  def __add__(self, other):\n    return self.amount + other.amount\n\
                  a = Money(3)\nb = Money(4)\nprint a + b";
    assert_output(source, "7\n");
}

#[test]
fn comparisons_dispatch_through_special_methods() {
    let source = "class Box:\n  def __init__(self, v):\n    self.v = v\n  \
                  def __eq__(self, other):\n    return self.v == other.v\n  \
                  def __lt__(self, other):\n    return self.v < other.v\n\
                  a = Box(1)\nb = Box(2)\nprint a == b, a < b, a != b, a > b, a <= b, a >= b";
    assert_output(source, "False True True False True False\n");
}

#[test]
fn missing_methods_fall_through_quietly() {
    let source = "class C:\n  def f(self):\n    return 1\nc = C()\nx = c.missing()\nprint x";
    assert_output(source, "None\n");
    // The same leniency applies to an arity that matches no method.
    let source = "class C:\n  def f(self):\n    return 1\nc = C()\nx = c.f(1)\nprint x";
    assert_output(source, "None\n");
}

#[test]
fn returned_values_flow_through_nested_statements() {
    let source = "class C:\n  def pick(self, n):\n    if n < 10:\n      return 'small'\n    \
                  return 'large'\nc = C()\nprint c.pick(3), c.pick(30)";
    assert_output(source, "small large\n");
}

#[test]
fn methods_without_return_produce_none() {
    let source = "class C:\n  def f(self):\n    x = 1\nc = C()\nprint c.f()";
    assert_output(source, "None\n");
}

#[test]
fn none_binds_and_prints() {
    assert_output("x = None\nprint x", "None\n");
    assert_output("x = None\nprint x == None", "True\n");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_failure("print 1 / 0");
    assert_failure("print 0 / 0");
}

#[test]
fn mixed_kind_operations_are_errors() {
    assert_failure("print 1 + 'a'");
    assert_failure("print 1 < 'a'");
    assert_failure("print 'a' - 'b'");
    assert_failure("x = None\nprint x + 1");
}

#[test]
fn unknown_names_are_errors() {
    assert_failure("print x");
    assert_failure("x = y");
    let source = "class C:\n  def f(self):\n    return 1\nc = C()\nprint c.missing";
    assert_failure(source);
}

#[test]
fn non_boolean_conditions_are_errors() {
    assert_failure("if 1:\n  print 'x'");
    assert_failure("if 'yes':\n  print 'x'");
}

#[test]
fn logical_operators_require_booleans() {
    assert_failure("print 1 or True");
    assert_failure("print not 1");
}

#[test]
fn return_outside_a_method_is_an_error() {
    assert_failure("return 5");
}

#[test]
fn syntax_errors_are_reported() {
    assert_failure("print (1 + 2");
    assert_failure("if 1 < 2\n  print 'x'");
    assert_failure("class C:\n  def f():\n    return 1\nprint 1");
    assert_failure("x = Unknown()");
    assert_failure("class B(Missing):\n  def f(self):\n    return 1\nprint 1");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("# leading comment\n\nx = 1  # trailing comment\n\nprint x", "1\n");
}

#[test]
fn comments_may_follow_dedented_blocks() {
    assert_output("if 1 < 2:\n  x = 1\n# back at top level\nprint x", "1\n");
    assert_output("if 1 < 2:\n  x = 1\n# a note on the else\nelse:\n  x = 2\nprint x", "1\n");
    let source = "class C:\n  def f(self):\n    return 1\n  # helper below\n  def g(self):\n    \
                  return 2\nc = C()\nprint c.f() + c.g()";
    assert_output(source, "3\n");
}
