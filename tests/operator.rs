#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        arithmetic in operator is OK
        "print 1 + 2;
        print 5 - 3;
        print 3 * 4;
        print 8 / 2;
        print -5;";
        "3"
        "2"
        "12"
        "4"
        "-5"
    }

    tests! {
        string_concat in operator is OK
        "print \"foo\" + \"bar\";";
        "foobar"
    }

    tests! {
        comparisons in operator is OK
        "print 1 < 2;
        print 2 <= 2;
        print 3 > 2;
        print 2 >= 3;";
        "true"
        "true"
        "true"
        "false"
    }

    tests! {
        add_mismatched_types in operator is ERR
        "print \"str\" + 1;";
        "Operands must be two numbers or two strings."
        "[line 1]"
    }

    tests! {
        divide_non_number in operator is ERR
        "print \"str\" / 2;";
        "Operands must be numbers."
        "[line 1]"
    }

    tests! {
        negate_non_number in operator is ERR
        "print -\"str\";";
        "Operand must be a number."
        "[line 1]"
    }

    tests! {
        equality_cross_type in operator is OK
        "print 1 == \"1\";
        print nil == false;
        print nil == nil;
        print 1 == 1;";
        "false"
        "false"
        "true"
        "true"
    }
}
