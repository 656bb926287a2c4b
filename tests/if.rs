#[macro_use]
mod common;

#[cfg(test)]
mod _if {
    tests! {
        basic in _if is OK
        "if (true) print \"then\"; else print \"else\";
        if (false) print \"then\"; else print \"else\";";
        "then"
        "else"
    }

    tests! {
        dangling_else in _if is OK
        "if (true) if (false) print \"inner\"; else print \"dangling\";";
        "dangling"
    }

    tests! {
        truth in _if is OK
        "if (false) print \"bad\"; else print \"false is falsy\";
        if (nil) print \"bad\"; else print \"nil is falsy\";
        if (0) print \"0 is truthy\";
        if (\"\") print \"empty string is truthy\";";
        "false is falsy"
        "nil is falsy"
        "0 is truthy"
        "empty string is truthy"
    }

    tests! {
        class_in_then in _if is ERR
        "if (true) class Foo {}";
        "[Line 1] error at 'class': Expected expression"
    }
}
