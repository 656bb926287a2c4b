#[macro_use]
mod common;

#[cfg(test)]
mod comment {
    tests! {
        line_comment in comment is OK
        "// this is a comment
        print \"ok\"; // trailing comment";
        "ok"
    }

    tests! {
        slashes_in_string in comment is OK
        "print \"this is // not a comment\";";
        "this is // not a comment"
    }
}
