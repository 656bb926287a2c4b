#[macro_use]
mod common;

#[cfg(test)]
mod _while {
    tests! {
        basic in _while is OK
        "var i = 0;
        while (i < 3) {
          print i;
          i = i + 1;
        }";
        "0"
        "1"
        "2"
    }

    tests! {
        closure_in_body in _while is OK
        "var f1;
        var f2;
        var f3;
        var i = 1;
        while (i < 4) {
          var j = i;
          fun f() {
            print j;
          }
          if (i == 1) f1 = f;
          if (i == 2) f2 = f;
          if (i == 3) f3 = f;
          i = i + 1;
        }
        f1();
        f2();
        f3();";
        "1"
        "2"
        "3"
    }

    tests! {
        return_inside in _while is OK
        "fun firstOver(n) {
          var i = 0;
          while (true) {
            if (i > n) return i;
            i = i + 1;
          }
        }
        print firstOver(2);";
        "3"
    }

    tests! {
        class_in_body in _while is ERR
        "while (true) class Foo {}";
        "[Line 1] error at 'class': Expected expression"
    }
}
