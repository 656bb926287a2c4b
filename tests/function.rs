#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        fibonacci in function is OK
        "fun fib(n) {
          if (n < 2) return n;
          return fib(n - 2) + fib(n - 1);
        }

        for (var i = 0; i < 8; i = i + 1) {
          print fib(i);
        }";
        "0"
        "1"
        "1"
        "2"
        "3"
        "5"
        "8"
        "13"
    }

    tests! {
        empty_body in function is OK
        "fun f() {}
        print f();";
        "nil"
    }

    tests! {
        print_function in function is OK
        "fun foo() {}
        print foo;
        print clock;";
        "<fn foo>"
        "<native fn clock>"
    }

    tests! {
        missing_arguments in function is ERR
        "fun f(a, b) {}
        f(1);";
        "Expected 2 arguments but got 1."
        "[line 2]"
    }

    tests! {
        extra_arguments in function is ERR
        "fun f(a, b) {}
        f(1, 2, 3, 4);";
        "Expected 2 arguments but got 4."
        "[line 2]"
    }
}
