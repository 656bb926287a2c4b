#[macro_use]
mod common;

#[cfg(test)]
mod closure {
    tests! {
        counter in closure is OK
        "fun makeCounter() {
          var i = 0;
          fun count() {
            i = i + 1;
            print i;
          }
          return count;
        }

        var counter = makeCounter();
        counter();
        counter();";
        "1"
        "2"
    }

    tests! {
        close_over_later_variable in closure is OK
        "var f;
        var g;

        {
          var a = \"a\";
          fun fLocal() { print a; }
          f = fLocal;

          var b = \"b\";
          fun gLocal() { print b; }
          g = gLocal;
        }

        f();
        g();";
        "a"
        "b"
    }

    tests! {
        nested_closure in closure is OK
        "fun outer() {
          var x = \"outside\";
          fun middle() {
            fun inner() {
              print x;
            }
            inner();
          }
          middle();
        }
        outer();";
        "outside"
    }

    tests! {
        assign_to_closure in closure is OK
        "var f;
        var g;

        {
          var local = \"local\";
          fun fLocal() {
            print local;
            local = \"after f\";
            print local;
          }
          f = fLocal;

          fun gLocal() {
            print local;
            local = \"after g\";
            print local;
          }
          g = gLocal;
        }

        f();
        g();";
        "local"
        "after f"
        "after f"
        "after g"
    }
}
