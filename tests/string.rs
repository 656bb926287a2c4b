#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literals in string is OK
        "print \"\";
        print \"a string\";
        print \"hello\" + \" \" + \"world\";";
        ""
        "a string"
        "hello world"
    }

    tests! {
        multiline in string is OK
        "var s = \"1
2
3\";
        print s;";
        "1"
        "2"
        "3"
    }

    tests! {
        unterminated in string is ERR
        "print \"oops";
        "[Line 1] error: Unterminated string."
    }
}
