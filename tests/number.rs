#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "print 123;
        print 987654;
        print 0;
        print -0;
        print 123.456;
        print -0.001;";
        "123"
        "987654"
        "0"
        "0"
        "123.456"
        "-0.001"
    }

    tests! {
        leading_dot in number is ERR
        "print .5;";
        "[Line 1] error at '.': Expected expression"
    }

    tests! {
        trailing_dot in number is ERR
        "123.;";
        "[Line 1] error at ';': Expected property name after '.'"
    }

    tests! {
        nan_equality in number is OK
        "var nan = 0 / 0;
        print nan == nan;
        print nan != nan;";
        "false"
        "true"
    }
}
