#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        basic in _for is OK
        "for (var i = 0; i < 3; i = i + 1) {
          print i;
        }";
        "0"
        "1"
        "2"
    }

    tests! {
        no_clauses in _for is OK
        "var i = 0;
        for (;;) {
          if (i >= 2) break;
          print i;
          i = i + 1;
        }";
        "0"
        "1"
    }

    tests! {
        closure_in_body in _for is OK
        "var f1;
        var f2;
        var f3;

        for (var i = 1; i < 4; i = i + 1) {
          var j = i;
          fun f() {
            print j;
          }
          if (i == 1) f1 = f;
          if (i == 2) f2 = f;
          if (i == 3) f3 = f;
        }

        f1();
        f2();
        f3();";
        "1"
        "2"
        "3"
    }

    tests! {
        return_inside in _for is OK
        "fun f() {
          for (var i = 0; i < 3; i = i + 1) {
            if (i == 1) return \"done\";
          }
          return \"never\";
        }
        print f();";
        "done"
    }

    tests! {
        class_in_body in _for is ERR
        "for (;;) class Foo {}";
        "[Line 1] error at 'class': Expected expression"
    }
}
