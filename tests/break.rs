#[macro_use]
mod common;

#[cfg(test)]
mod _break {
    tests! {
        inside_while in _break is OK
        "var i = 0;
        while (true) {
          if (i >= 3) break;
          print i;
          i = i + 1;
        }";
        "0"
        "1"
        "2"
    }

    tests! {
        inside_for in _break is OK
        "for (var i = 0; i < 10; i = i + 1) {
          if (i == 3) break;
          print i;
        }";
        "0"
        "1"
        "2"
    }

    tests! {
        nested in _break is OK
        "for (var i = 0; i < 1; i = i + 1) {
          while (true) {
            print \"inside\";
            break;
          }
          print \"outside\";
        }";
        "inside"
        "outside"
    }

    tests! {
        no_loop in _break is ERR
        "print \"before\";
        break;";
        "[Line 2] error at 'break': Cannot break outside of a loop"
    }

    tests! {
        no_loop_across_function_boundary in _break is ERR
        "for (var i = 0; i < 1; i = i + 1) {
          fun f() {
            break;
          }
          f();
        }";
        "[Line 3] error at 'break': Cannot break outside of a loop"
    }
}
