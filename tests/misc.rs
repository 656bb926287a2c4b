#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        empty_file in misc is OK
        "";
    }

    tests! {
        precedence in misc is OK
        "print 2 + 3 * 4;
        print (2 + 3) * 4;
        print 2 - 3 - 4;
        print 10 / 2 / 5;
        print 1 < 2 and 2 < 3;";
        "14"
        "20"
        "-5"
        "1"
        "true"
    }

    tests! {
        unexpected_character in misc is ERR
        "print \"ok\";
        # bad";
        "[Line 2] error: Unexpected character '#'."
    }
}
