#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        arity in method is OK
        "class Math {
          add(a, b) {
            return a + b;
          }
        }
        print Math().add(2, 3);";
        "5"
    }

    tests! {
        not_found in method is ERR
        "class Foo {}
        var foo = Foo();
        foo.bar();";
        "Undefined property 'bar'."
        "[line 3]"
    }

    tests! {
        print_bound_method in method is OK
        "class Foo {
          method() {}
        }
        print Foo().method;";
        "<fn method>"
    }

    tests! {
        missing_arguments in method is ERR
        "class Foo {
          need(a, b) {}
        }
        Foo().need(1);";
        "Expected 2 arguments but got 1."
        "[line 4]"
    }
}
